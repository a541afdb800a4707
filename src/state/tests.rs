//! Tests for the state module.

use std::sync::Arc;

use super::{App, AppMessage, Focus, HistoryState, PopupState, SubmitOutcome};
use crate::commands::AppCommand;
use crate::domain::{SignatureRecord, TokenBalance, WalletSnapshot};
use crate::state::FormKind;
use crate::wallet::{Keypair, WalletSession};

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App instance without network operations.
fn create_test_app() -> App {
    App::new_for_tests()
}

/// Attaches a deterministic wallet session to a test app.
fn attach_test_session(app: &mut App) {
    let session = WalletSession::from_keypair(Keypair::from_seed([0x42u8; 32]));
    app.session = Some(Arc::new(session));
}

fn snapshot(lamports: u64, tokens: Vec<TokenBalance>) -> WalletSnapshot {
    WalletSnapshot {
        lamports,
        tokens,
        recent: Vec::new(),
    }
}

// ========================================================================
// Form Validation Guards
// ========================================================================

#[test]
fn test_empty_fields_never_reach_the_network() {
    struct TestCase {
        name: &'static str,
        mint: &'static str,
        recipient: &'static str,
        amount: &'static str,
    }

    let cases = [
        TestCase {
            name: "all empty",
            mint: "",
            recipient: "",
            amount: "",
        },
        TestCase {
            name: "amount missing",
            mint: "SomeMint",
            recipient: "SomeRecipient",
            amount: "",
        },
        TestCase {
            name: "whitespace only",
            mint: "   ",
            recipient: "SomeRecipient",
            amount: "5",
        },
    ];

    for case in cases {
        let mut app = create_test_app();
        attach_test_session(&mut app);

        app.forms.minter.mint_address = case.mint.to_string();
        app.forms.minter.amount = case.amount.to_string();
        app.submit_mint();

        assert!(!app.forms.minter.loading, "{}: no submission", case.name);
        assert_eq!(
            app.forms.minter.error.as_deref(),
            Some("Please provide all fields."),
            "{}: validation error set",
            case.name
        );
        assert!(
            app.message_rx.try_recv().is_err(),
            "{}: nothing spawned",
            case.name
        );

        app.forms.sender.mint_address = case.mint.to_string();
        app.forms.sender.recipient = case.recipient.to_string();
        app.forms.sender.amount = case.amount.to_string();
        app.submit_send();

        assert!(!app.forms.sender.loading, "{}: sender untouched", case.name);
        assert_eq!(
            app.forms.sender.error.as_deref(),
            Some("Please provide all fields."),
            "{}: sender validation error set",
            case.name
        );
    }
}

#[test]
fn test_submit_without_wallet_is_blocked() {
    let mut app = create_test_app();
    app.forms.minter.mint_address = "SomeMint".to_string();
    app.forms.minter.amount = "5".to_string();

    app.submit_mint();

    assert!(!app.forms.minter.loading);
    assert_eq!(
        app.ui.popup_state,
        PopupState::Message("Wallet not connected.".to_string())
    );

    app.submit_create();
    assert!(!app.forms.creator.loading);
}

#[test]
fn test_submit_while_pending_is_a_noop() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    app.forms.minter.mint_address = "SomeMint".to_string();
    app.forms.minter.amount = "5".to_string();
    app.forms.minter.loading = true;

    app.submit_mint();

    // Still the single in-flight submission; nothing new happened.
    assert!(app.forms.minter.loading);
    assert!(app.forms.minter.error.is_none());
    assert!(app.message_rx.try_recv().is_err());

    app.forms.creator.loading = true;
    app.submit_create();
    assert!(app.forms.creator.error.is_none());

    app.forms.sender.loading = true;
    app.forms.sender.mint_address = "M".to_string();
    app.forms.sender.recipient = "R".to_string();
    app.forms.sender.amount = "1".to_string();
    app.submit_send();
    assert!(app.forms.sender.error.is_none());
}

// ========================================================================
// Refresh Scheduling
// ========================================================================

#[test]
fn test_no_refresh_after_disconnect() {
    let mut app = create_test_app();

    // Ticks and watcher events arriving after the session is gone must
    // not schedule a fetch.
    app.message_tx.send(AppMessage::RefreshTick).unwrap();
    app.message_tx.send(AppMessage::TokenAccountChanged).unwrap();
    app.process_messages();

    assert_eq!(app.next_fetch_seq, 0, "no fetch was scheduled");
}

#[test]
fn test_snapshot_for_dead_session_is_dropped() {
    let mut app = create_test_app();

    app.message_tx
        .send(AppMessage::SnapshotFetched {
            seq: 0,
            result: Ok(snapshot(1_000_000_000, vec![])),
        })
        .unwrap();
    app.process_messages();

    assert!(app.data.snapshot.is_none());
    assert!(app.ui.toast.is_none());
}

// ========================================================================
// Snapshot Application
// ========================================================================

#[test]
fn test_snapshot_last_successful_fetch_wins() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    // A newer fetch lands first, then a stale one limps in.
    app.message_tx
        .send(AppMessage::SnapshotFetched {
            seq: 2,
            result: Ok(snapshot(2_000_000_000, vec![])),
        })
        .unwrap();
    app.message_tx
        .send(AppMessage::SnapshotFetched {
            seq: 1,
            result: Ok(snapshot(1_000_000_000, vec![])),
        })
        .unwrap();
    app.process_messages();

    assert_eq!(app.data.snapshot.as_ref().unwrap().lamports, 2_000_000_000);
}

#[test]
fn test_repeated_reconciling_refreshes_are_invisible() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    let tokens = vec![TokenBalance {
        mint: "MintA".to_string(),
        account: "AcctA".to_string(),
        amount: 3.5,
    }];

    // The watcher fired N times; every refresh reads the same ledger
    // state. After the first reconciliation the display never changes.
    for seq in 0..4 {
        app.message_tx
            .send(AppMessage::SnapshotFetched {
                seq,
                result: Ok(snapshot(500_000_000, tokens.clone())),
            })
            .unwrap();
    }
    app.process_messages();

    let result = app.data.snapshot.clone().unwrap();
    assert_eq!(result, snapshot(500_000_000, tokens));
}

#[test]
fn test_balance_scenario_two_and_a_half_sol_no_tokens() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    app.message_tx
        .send(AppMessage::SnapshotFetched {
            seq: 0,
            result: Ok(snapshot(2_500_000_000, vec![])),
        })
        .unwrap();
    app.process_messages();

    let snap = app.data.snapshot.as_ref().unwrap();
    assert_eq!(snap.sol_display(), "2.5");
    assert!(snap.tokens.is_empty());

    let (toast, _) = app.ui.toast.as_ref().unwrap();
    assert_eq!(toast, "[+] SOL balance updated: 2.5 SOL");
}

#[test]
fn test_failed_refresh_shows_toast_and_keeps_snapshot() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    app.message_tx
        .send(AppMessage::SnapshotFetched {
            seq: 0,
            result: Ok(snapshot(100, vec![])),
        })
        .unwrap();
    app.message_tx
        .send(AppMessage::SnapshotFetched {
            seq: 1,
            result: Err("connection reset".to_string()),
        })
        .unwrap();
    app.process_messages();

    // The stale-but-successful snapshot stays; the failure only toasts.
    assert_eq!(app.data.snapshot.as_ref().unwrap().lamports, 100);
    let (toast, _) = app.ui.toast.as_ref().unwrap();
    assert_eq!(toast, "[x] Failed to fetch wallet details");
}

// ========================================================================
// History States
// ========================================================================

#[test]
fn test_history_empty_is_distinct_from_failure() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    app.message_tx
        .send(AppMessage::HistoryFetched(Ok(vec![])))
        .unwrap();
    app.process_messages();
    assert_eq!(app.data.history, HistoryState::Empty);

    app.message_tx
        .send(AppMessage::HistoryFetched(Err("timeout".to_string())))
        .unwrap();
    app.process_messages();
    assert_eq!(
        app.data.history,
        HistoryState::Failed("Failed to fetch transactions.".to_string())
    );
}

#[test]
fn test_history_loads_most_recent_first() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    let records = vec![
        SignatureRecord {
            signature: "newest".to_string(),
            block_time: Some(200),
        },
        SignatureRecord {
            signature: "older".to_string(),
            block_time: None,
        },
    ];

    app.message_tx
        .send(AppMessage::HistoryFetched(Ok(records.clone())))
        .unwrap();
    app.process_messages();

    assert_eq!(app.data.history, HistoryState::Loaded(records));
    assert_eq!(app.data.latest_history_signature(), Some("newest"));
}

// ========================================================================
// Submission Results
// ========================================================================

#[test]
fn test_successful_mint_stores_signature_and_clears_inputs() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    app.forms.minter.mint_address = "SomeMint".to_string();
    app.forms.minter.amount = "5".to_string();
    app.forms.minter.loading = true;

    app.message_tx
        .send(AppMessage::SubmitFinished {
            form: FormKind::Mint,
            result: Ok(SubmitOutcome {
                signature: "5GqSig".to_string(),
                mint: None,
            }),
        })
        .unwrap();
    app.process_messages();

    assert!(!app.forms.minter.loading);
    assert_eq!(app.forms.minter.signature.as_deref(), Some("5GqSig"));
    assert!(app.forms.minter.mint_address.is_empty());
    assert!(app.forms.minter.amount.is_empty());
}

#[test]
fn test_failed_submission_keeps_inputs_for_retry() {
    let mut app = create_test_app();
    attach_test_session(&mut app);

    app.forms.sender.mint_address = "SomeMint".to_string();
    app.forms.sender.recipient = "SomeRecipient".to_string();
    app.forms.sender.amount = "5".to_string();
    app.forms.sender.loading = true;

    app.message_tx
        .send(AppMessage::SubmitFinished {
            form: FormKind::Send,
            result: Err("RPC error: insufficient funds".to_string()),
        })
        .unwrap();
    app.process_messages();

    assert!(!app.forms.sender.loading);
    assert_eq!(
        app.forms.sender.error.as_deref(),
        Some("RPC error: insufficient funds")
    );
    // Inputs untouched so the user can correct and resubmit.
    assert_eq!(app.forms.sender.mint_address, "SomeMint");
    assert_eq!(app.forms.sender.recipient, "SomeRecipient");
    assert_eq!(app.forms.sender.amount, "5");
}

#[test]
fn test_created_token_records_mint_address() {
    let mut app = create_test_app();
    attach_test_session(&mut app);
    app.forms.creator.loading = true;

    let mint = "4Nd1mYvM6kdLXUnyjWdJQCDqjLVVGR9LoUK1Rv6ZvLhN";
    app.message_tx
        .send(AppMessage::SubmitFinished {
            form: FormKind::Create,
            result: Ok(SubmitOutcome {
                signature: "5GqSig".to_string(),
                mint: Some(mint.to_string()),
            }),
        })
        .unwrap();
    app.process_messages();

    assert!(!app.forms.creator.loading);
    assert_eq!(app.forms.creator.mint_address.as_deref(), Some(mint));
    assert_eq!(app.forms.creator.signature.as_deref(), Some("5GqSig"));

    // Display format and explorer link for the recorded outcome.
    assert_eq!(
        crate::constants::truncate_middle(mint, 8, 8),
        "4Nd1mYvM...Rv6ZvLhN"
    );
    assert_eq!(
        app.cluster.explorer_tx_url("5GqSig"),
        "https://explorer.solana.com/tx/5GqSig?cluster=devnet"
    );
}

// ========================================================================
// Command Handling
// ========================================================================

#[test]
fn test_focus_cycling_commands() {
    let mut app = create_test_app();
    assert_eq!(app.ui.focus, Focus::Wallet);

    app.handle_command(AppCommand::CycleFocus);
    assert_eq!(app.ui.focus, Focus::Creator);

    app.handle_command(AppCommand::CycleFocusBack);
    assert_eq!(app.ui.focus, Focus::Wallet);
}

#[test]
fn test_typed_input_routes_to_focused_form() {
    let mut app = create_test_app();
    app.ui.focus = Focus::Minter;

    for c in "Mint".chars() {
        app.handle_command(AppCommand::Input(c));
    }
    assert_eq!(app.forms.minter.mint_address, "Mint");

    app.handle_command(AppCommand::FieldNext);
    app.handle_command(AppCommand::Input('7'));
    assert_eq!(app.forms.minter.amount, "7");

    app.handle_command(AppCommand::Backspace);
    assert_eq!(app.forms.minter.amount, "");

    // Typing never leaks into the other form.
    assert!(app.forms.sender.mint_address.is_empty());
}

#[test]
fn test_refresh_without_session_shows_connect_prompt() {
    let mut app = create_test_app();
    app.handle_command(AppCommand::Refresh);

    assert_eq!(
        app.ui.popup_state,
        PopupState::Message("Please connect your wallet.".to_string())
    );
    assert_eq!(app.next_fetch_seq, 0);
}

#[test]
fn test_dismiss_closes_popup() {
    let mut app = create_test_app();
    app.ui.show_message("Wallet not connected.");

    app.handle_command(AppCommand::Dismiss);
    assert!(!app.ui.has_active_popup());
}

#[test]
fn test_quit_command_sets_exit() {
    let mut app = create_test_app();
    app.handle_command(AppCommand::Quit);
    assert!(app.exit);
}
