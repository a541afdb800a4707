//! Command execution for the SolForge application.
//!
//! Maps [`AppCommand`]s produced by the key mapper onto state changes and
//! submission tasks. Each submission validates locally first, then spawns
//! an async task that assembles, signs, submits and confirms one atomic
//! transaction, reporting back through the message channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::RpcClient;
use crate::commands::{AppCommand, InputContext};
use crate::constants::{
    MINT_ACCOUNT_SIZE, truncate_prefix, ui_amount_to_base_units,
};
use crate::domain::{ForgeError, Pubkey};
use crate::tx::token::derive_associated_token_address;
use crate::tx::{bundles, compile_transaction, sign_transaction};
use crate::wallet::{Keypair, WalletSession};

use super::{App, AppMessage, Focus, FormKind, SubmitOutcome};

impl App {
    /// Returns the input context used to interpret key events.
    #[must_use]
    pub(crate) fn input_context(&self) -> InputContext {
        if self.ui.has_active_popup() {
            InputContext::Popup
        } else if self.ui.focus.accepts_text_input() {
            InputContext::FormInput
        } else {
            InputContext::Main
        }
    }

    /// Executes one application command.
    pub(crate) fn handle_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => self.exit = true,
            AppCommand::Refresh => self.handle_refresh(),
            AppCommand::ToggleSession => self.handle_toggle_session(),
            AppCommand::Dismiss => self.ui.dismiss_popup(),

            // === Navigation ===
            AppCommand::CycleFocus => self.ui.cycle_focus(),
            AppCommand::CycleFocusBack => self.ui.cycle_focus_back(),
            AppCommand::FieldNext => self.cycle_form_field(true),
            AppCommand::FieldPrev => self.cycle_form_field(false),

            // === Form Editing ===
            AppCommand::Input(c) => self.form_input(c),
            AppCommand::Backspace => self.form_backspace(),

            // === Actions ===
            AppCommand::Submit => self.handle_submit(),
            AppCommand::CopyFocused => self.copy_focused(),
            AppCommand::OpenExplorer => self.open_focused_explorer_link(),
        }
    }

    // ========================================================================
    // Session & Refresh
    // ========================================================================

    fn handle_toggle_session(&mut self) {
        if self.session.is_some() {
            self.disconnect_session();
        } else {
            self.connect_session();
        }
    }

    fn handle_refresh(&mut self) {
        if self.session.is_none() {
            self.ui.show_message("Please connect your wallet.");
            return;
        }
        self.spawn_snapshot_refresh();
        self.spawn_history_fetch();
        self.notifier.info("Refreshing...");
    }

    // ========================================================================
    // Form Editing
    // ========================================================================

    fn cycle_form_field(&mut self, forward: bool) {
        match self.ui.focus {
            Focus::Minter => {
                self.forms.minter.field = if forward {
                    self.forms.minter.field.next()
                } else {
                    self.forms.minter.field.prev()
                };
            }
            Focus::Sender => {
                self.forms.sender.field = if forward {
                    self.forms.sender.field.next()
                } else {
                    self.forms.sender.field.prev()
                };
            }
            _ => {}
        }
    }

    fn form_input(&mut self, c: char) {
        match self.ui.focus {
            Focus::Minter => self.forms.minter.input_char(c),
            Focus::Sender => self.forms.sender.input_char(c),
            _ => {}
        }
    }

    fn form_backspace(&mut self) {
        match self.ui.focus {
            Focus::Minter => self.forms.minter.backspace(),
            Focus::Sender => self.forms.sender.backspace(),
            _ => {}
        }
    }

    // ========================================================================
    // Submissions
    // ========================================================================

    fn handle_submit(&mut self) {
        match self.ui.focus {
            Focus::Creator => self.submit_create(),
            Focus::Minter => self.submit_mint(),
            Focus::Sender => self.submit_send(),
            _ => {}
        }
    }

    /// Submits the token creation transaction.
    pub(crate) fn submit_create(&mut self) {
        if self.forms.creator.loading {
            return;
        }
        let Some(session) = self.session.clone() else {
            self.ui.show_message("Wallet not connected.");
            return;
        };

        self.forms.creator.begin_submit();

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = perform_create(&client, &session)
                .await
                .map_err(|e| e.to_string());
            finish(&message_tx, FormKind::Create, result);
        });
    }

    /// Submits the mint-supply transaction.
    pub(crate) fn submit_mint(&mut self) {
        if self.forms.minter.loading {
            return;
        }
        let Some(session) = self.session.clone() else {
            self.ui.show_message("Wallet not connected.");
            return;
        };
        if let Err(msg) = self.forms.minter.validate() {
            self.forms.minter.error = Some(msg);
            return;
        }

        self.forms.minter.begin_submit();

        let mint_address = self.forms.minter.mint_address.clone();
        let amount = self.forms.minter.amount.clone();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = perform_mint(&client, &session, &mint_address, &amount)
                .await
                .map_err(|e| e.to_string());
            finish(&message_tx, FormKind::Mint, result);
        });
    }

    /// Submits the token transfer transaction.
    pub(crate) fn submit_send(&mut self) {
        if self.forms.sender.loading {
            return;
        }
        let Some(session) = self.session.clone() else {
            self.ui.show_message("Wallet not connected.");
            return;
        };
        if let Err(msg) = self.forms.sender.validate() {
            self.forms.sender.error = Some(msg);
            return;
        }

        self.forms.sender.begin_submit();

        let mint_address = self.forms.sender.mint_address.clone();
        let recipient = self.forms.sender.recipient.clone();
        let amount = self.forms.sender.amount.clone();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = perform_send(&client, &session, &mint_address, &recipient, &amount)
                .await
                .map_err(|e| e.to_string());
            finish(&message_tx, FormKind::Send, result);
        });
    }

    // ========================================================================
    // Clipboard & Browser
    // ========================================================================

    /// The value the focused panel offers for copying.
    fn focused_copy_value(&self) -> Option<String> {
        match self.ui.focus {
            Focus::Wallet => self.session.as_ref().map(|s| s.address().to_string()),
            Focus::Creator => self.forms.creator.mint_address.clone(),
            Focus::Minter => self.forms.minter.signature.clone(),
            Focus::Sender => self.forms.sender.signature.clone(),
            Focus::History => self.data.latest_history_signature().map(str::to_string),
        }
    }

    /// The signature whose explorer link the focused panel points at.
    fn focused_signature(&self) -> Option<String> {
        match self.ui.focus {
            Focus::Creator => self.forms.creator.signature.clone(),
            Focus::Minter => self.forms.minter.signature.clone(),
            Focus::Sender => self.forms.sender.signature.clone(),
            Focus::History | Focus::Wallet => {
                self.data.latest_history_signature().map(str::to_string)
            }
        }
    }

    fn copy_focused(&mut self) {
        let Some(value) = self.focused_copy_value() else {
            self.notifier.info("Nothing to copy yet.");
            return;
        };

        match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(value.clone()) {
                Ok(()) => {
                    self.notifier
                        .success(format!("Copied: {}", truncate_prefix(&value, 16)));
                }
                Err(e) => {
                    self.notifier.error(format!("Clipboard error: {e}"));
                }
            },
            None => {
                self.notifier.error("Clipboard not available");
            }
        }
    }

    fn open_focused_explorer_link(&mut self) {
        let Some(signature) = self.focused_signature() else {
            self.notifier.info("No transaction to open yet.");
            return;
        };

        let url = self.cluster.explorer_tx_url(&signature);
        match open::that(&url) {
            Ok(()) => self.notifier.success("Opened in browser"),
            Err(e) => self.notifier.error(format!("Failed to open browser: {e}")),
        }
    }
}

// ============================================================================
// Submission Tasks
// ============================================================================

fn finish(
    message_tx: &mpsc::UnboundedSender<AppMessage>,
    form: FormKind,
    result: Result<SubmitOutcome, String>,
) {
    // Receiver may be dropped during shutdown - safe to ignore.
    let _ = message_tx.send(AppMessage::SubmitFinished { form, result });
}

/// Creates a mint: allocate the mint account and initialize it, co-signed
/// by the fresh mint keypair, in one atomic transaction.
async fn perform_create(
    client: &RpcClient,
    session: &Arc<WalletSession>,
) -> Result<SubmitOutcome, ForgeError> {
    let payer = session.pubkey();
    let mint_keypair = Keypair::generate();
    let mint = mint_keypair.pubkey();

    let rent = client
        .get_minimum_balance_for_rent_exemption(MINT_ACCOUNT_SIZE)
        .await?;
    let blockhash = client.get_latest_blockhash().await?;

    let instructions = bundles::create_token(payer, mint, rent)?;
    let tx = compile_transaction(&instructions, payer, blockhash)?;
    let wire = sign_transaction(&tx, &[session.keypair(), &mint_keypair])?;

    let signature = client.send_and_confirm(&wire).await?;

    Ok(SubmitOutcome {
        signature,
        mint: Some(mint.to_base58()),
    })
}

/// Mints supply into the session's associated token account, creating the
/// account first when it does not exist yet.
async fn perform_mint(
    client: &RpcClient,
    session: &Arc<WalletSession>,
    mint_address: &str,
    amount: &str,
) -> Result<SubmitOutcome, ForgeError> {
    let payer = session.pubkey();
    let mint = Pubkey::from_base58(mint_address)?;
    let amount = ui_amount_to_base_units(amount)?;

    let token_account = derive_associated_token_address(payer, mint)?;
    let exists = client.account_exists(&token_account.to_base58()).await?;
    let blockhash = client.get_latest_blockhash().await?;

    let instructions = bundles::mint_tokens(payer, mint, token_account, amount, exists);
    let tx = compile_transaction(&instructions, payer, blockhash)?;
    let wire = sign_transaction(&tx, &[session.keypair()])?;

    let signature = client.send_and_confirm(&wire).await?;

    Ok(SubmitOutcome {
        signature,
        mint: None,
    })
}

/// Transfers tokens to a recipient, creating the recipient's associated
/// token account inside the same bundle when it is missing.
async fn perform_send(
    client: &RpcClient,
    session: &Arc<WalletSession>,
    mint_address: &str,
    recipient: &str,
    amount: &str,
) -> Result<SubmitOutcome, ForgeError> {
    let payer = session.pubkey();
    let mint = Pubkey::from_base58(mint_address)?;
    let recipient = Pubkey::from_base58(recipient)?;
    let amount = ui_amount_to_base_units(amount)?;

    let sender_account = derive_associated_token_address(payer, mint)?;
    let recipient_account = derive_associated_token_address(recipient, mint)?;

    let exists = client
        .account_exists(&recipient_account.to_base58())
        .await?;
    let blockhash = client.get_latest_blockhash().await?;

    let instructions = bundles::send_tokens(
        payer,
        mint,
        sender_account,
        recipient,
        recipient_account,
        amount,
        exists,
    );
    let tx = compile_transaction(&instructions, payer, blockhash)?;
    let wire = sign_transaction(&tx, &[session.keypair()])?;

    let signature = client.send_and_confirm(&wire).await?;

    Ok(SubmitOutcome {
        signature,
        mint: None,
    })
}
