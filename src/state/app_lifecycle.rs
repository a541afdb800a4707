//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - creates a new application instance
//! - `run()` - main event loop
//! - session connect/disconnect
//! - background refresh scheduling and snapshot fetching

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;

use crate::client::RpcClient;
use crate::commands::map_key;
use crate::constants::{HISTORY_LIMIT, REFRESH_INTERVAL_SECS, truncate_middle};
use crate::domain::{Pubkey, TokenBalance, WalletSnapshot};
use crate::notify::Notifier;
use crate::tui::Tui;
use crate::ui;
use crate::wallet::{WalletSession, default_keypair_path};
use crate::watcher::spawn_transfer_watcher;

use super::{App, AppConfig, AppMessage, DataState, FormsState, HistoryState, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// Command-line overrides win over persisted settings; the keypair
    /// path falls back to the Solana CLI default.
    ///
    /// # Errors
    ///
    /// Returns an error if no keypair location can be resolved at all.
    pub fn new(startup: StartupOptions) -> Result<Self> {
        let config = AppConfig::load();

        let cluster = startup.cluster.unwrap_or(config.cluster);
        let keypair_path = match startup.keypair_path.or_else(|| config.keypair_path.clone()) {
            Some(path) => path,
            None => default_keypair_path()?,
        };

        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (session_tx, _session_rx) = watch::channel(None);
        let notifier = Notifier::new(message_tx.clone());

        let client = RpcClient::new(cluster);

        // Try initializing clipboard, but don't panic if it fails.
        let clipboard = arboard::Clipboard::new().ok();

        Ok(Self {
            forms: FormsState::default(),
            data: DataState::new(),
            ui: UiState::new(),
            cluster,
            session: None,
            exit: false,
            animation_tick: 0,
            keypair_path,
            message_tx,
            message_rx,
            session_tx,
            notifier,
            client,
            next_fetch_seq: 0,
            clipboard,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_refresh_ticker();

        // Surface an unreachable cluster early instead of failing on the
        // first read.
        {
            let client = self.client.clone();
            let notifier = self.notifier.clone();
            tokio::spawn(async move {
                if let Err(e) = client.get_health().await {
                    tracing::debug!("health check failed: {e}");
                    notifier.error(format!("Cluster unreachable: {e}"));
                }
            });
        }

        // Auto-connect when a keypair file is already in place, mirroring
        // the instant reconnect a returning user expects.
        if self.keypair_path.exists() {
            self.connect_session();
        } else {
            self.notifier
                .info("No wallet connected - press w to connect");
        }

        let tick_rate = Duration::from_millis(100);
        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        if let Some(command) = map_key(key, self.input_context()) {
                            self.handle_command(command);
                        }
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Session Management
    // ========================================================================

    /// Connects the wallet session from the configured keypair file and
    /// starts the session-scoped background work.
    pub(crate) fn connect_session(&mut self) {
        match WalletSession::from_file(&self.keypair_path) {
            Ok(session) => {
                let session = Arc::new(session);
                let owner = session.pubkey();

                self.session = Some(session);
                // Watch channel sends: receivers subscribe later, ok if no
                // subscribers yet.
                let _ = self.session_tx.send(Some(owner));

                spawn_transfer_watcher(
                    self.client.clone(),
                    owner,
                    self.session_tx.subscribe(),
                    self.message_tx.clone(),
                );

                self.spawn_snapshot_refresh();
                self.spawn_history_fetch();

                self.notifier.success(format!(
                    "Wallet connected: {}",
                    truncate_middle(&owner.to_base58(), 6, 6)
                ));
            }
            Err(e) => {
                self.ui.show_message(format!(
                    "Failed to connect wallet from {}:\n{e}",
                    self.keypair_path.display()
                ));
            }
        }
    }

    /// Disconnects the session; the refresh interval and the transfer
    /// watcher observe the address change and stop.
    pub(crate) fn disconnect_session(&mut self) {
        self.session = None;
        let _ = self.session_tx.send(None);
        self.data.clear();
        self.notifier.info("Wallet disconnected");
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    /// Starts the periodic refresh ticker. Ticks only produce work while a
    /// session address is broadcast on the watch channel.
    fn start_refresh_ticker(&self) {
        let message_tx = self.message_tx.clone();
        let mut session_rx = self.session_tx.subscribe();

        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(REFRESH_INTERVAL_SECS));

            loop {
                tokio::select! {
                    changed = session_rx.changed() => {
                        if changed.is_err() {
                            // App dropped; nothing left to tick for.
                            return;
                        }
                    }

                    _ = ticker.tick() => {
                        if session_rx.borrow().is_some() {
                            // Receiver may be dropped during shutdown.
                            let _ = message_tx.send(AppMessage::RefreshTick);
                        }
                    }
                }
            }
        });
    }

    /// Spawns one wallet snapshot refresh, tagged with the next fetch
    /// sequence number. Does nothing when no session is connected, which
    /// is what stops refreshes after disconnect.
    pub(crate) fn spawn_snapshot_refresh(&mut self) {
        let Some(owner) = self.session_pubkey() else {
            return;
        };

        let seq = self.next_fetch_seq;
        self.next_fetch_seq += 1;

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = fetch_wallet_snapshot(&client, owner)
                .await
                .map_err(|e| e.to_string());
            // Receiver may be dropped during shutdown - safe to ignore.
            let _ = message_tx.send(AppMessage::SnapshotFetched { seq, result });
        });
    }

    /// Spawns the transaction history fetch for the connected address.
    pub(crate) fn spawn_history_fetch(&mut self) {
        let Some(owner) = self.session_pubkey() else {
            return;
        };

        self.data.history = HistoryState::Loading;

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client
                .get_signatures_for_address(owner, HISTORY_LIMIT)
                .await
                .map_err(|e| e.to_string());
            // Receiver may be dropped during shutdown - safe to ignore.
            let _ = message_tx.send(AppMessage::HistoryFetched(result));
        });
    }
}

// ============================================================================
// Snapshot Fetching
// ============================================================================

/// Performs the three independent reads of a refresh and assembles the
/// replacement snapshot: native balance, token accounts with their
/// balances, and recent signatures.
async fn fetch_wallet_snapshot(
    client: &RpcClient,
    owner: Pubkey,
) -> Result<WalletSnapshot, crate::domain::ForgeError> {
    let (balance, accounts, recent) = tokio::join!(
        client.get_balance(owner),
        client.get_token_accounts_by_owner(owner),
        client.get_signatures_for_address(owner, HISTORY_LIMIT),
    );

    let lamports = balance?;
    let accounts = accounts?;
    let recent = recent?;

    let mut tokens = Vec::with_capacity(accounts.len());
    for account in accounts {
        let amount = client.get_token_account_balance(&account.account).await?;
        tokens.push(TokenBalance {
            mint: account.mint,
            account: account.account,
            amount,
        });
    }

    Ok(WalletSnapshot {
        lamports,
        tokens,
        recent,
    })
}
