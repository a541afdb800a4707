//! Message processing for the SolForge application.
//!
//! Drains the app message channel each loop iteration and folds results
//! from background tasks into the state: snapshot replacement (guarded by
//! the fetch sequence), history state transitions, submission outcomes and
//! toast notifications.

use crate::constants::TOAST_TICKS;

use super::{App, AppMessage, FormKind, HistoryState, SubmitOutcome};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::RefreshTick | AppMessage::TokenAccountChanged => {
                    // Both triggers funnel into the same idempotent refresh;
                    // spawn_snapshot_refresh is a no-op when disconnected.
                    self.spawn_snapshot_refresh();
                }
                AppMessage::SnapshotFetched { seq, result } => {
                    self.handle_snapshot_fetched(seq, result);
                }
                AppMessage::HistoryFetched(result) => {
                    self.handle_history_fetched(result);
                }
                AppMessage::SubmitFinished { form, result } => {
                    self.handle_submit_finished(form, result);
                }
                AppMessage::Toast(message) => {
                    self.ui.show_toast(message, TOAST_TICKS);
                }
            }
        }
    }

    // ========================================================================
    // Refresh Results
    // ========================================================================

    fn handle_snapshot_fetched(
        &mut self,
        seq: u64,
        result: Result<crate::domain::WalletSnapshot, String>,
    ) {
        match result {
            Ok(snapshot) => {
                if self.session.is_none() {
                    // Result of a refresh that outlived its session.
                    return;
                }
                let sol = snapshot.sol_display();
                if self.data.apply_snapshot(seq, snapshot) {
                    self.notifier
                        .success(format!("SOL balance updated: {sol} SOL"));
                }
            }
            Err(e) => {
                tracing::debug!("snapshot refresh failed: {e}");
                if self.session.is_some() {
                    self.notifier.error("Failed to fetch wallet details");
                }
            }
        }
    }

    fn handle_history_fetched(
        &mut self,
        result: Result<Vec<crate::domain::SignatureRecord>, String>,
    ) {
        if self.session.is_none() {
            return;
        }

        match result {
            Ok(records) if records.is_empty() => {
                self.data.history = HistoryState::Empty;
            }
            Ok(records) => {
                self.data.history = HistoryState::Loaded(records);
            }
            Err(e) => {
                tracing::debug!("history fetch failed: {e}");
                self.data.history =
                    HistoryState::Failed("Failed to fetch transactions.".to_string());
                self.notifier.error("Failed to fetch transactions.");
            }
        }
    }

    // ========================================================================
    // Submission Results
    // ========================================================================

    fn handle_submit_finished(&mut self, form: FormKind, result: Result<SubmitOutcome, String>) {
        match form {
            FormKind::Create => {
                self.forms.creator.loading = false;
                match result {
                    Ok(outcome) => {
                        self.forms.creator.mint_address = outcome.mint;
                        self.forms.creator.signature = Some(outcome.signature);
                        self.forms.creator.error = None;
                        self.notifier.success("Token created!");
                    }
                    Err(e) => {
                        self.forms.creator.error = Some(e);
                    }
                }
            }
            FormKind::Mint => {
                self.forms.minter.loading = false;
                match result {
                    Ok(outcome) => {
                        self.forms.minter.signature = Some(outcome.signature);
                        self.forms.minter.error = None;
                        self.forms.minter.clear_inputs();
                        self.notifier.success("Tokens minted successfully!");
                    }
                    Err(e) => {
                        // Inputs stay untouched for correction and retry.
                        self.forms.minter.error = Some(e);
                    }
                }
            }
            FormKind::Send => {
                self.forms.sender.loading = false;
                match result {
                    Ok(outcome) => {
                        self.forms.sender.signature = Some(outcome.signature);
                        self.forms.sender.error = None;
                        self.forms.sender.clear_inputs();
                        self.notifier.success("Tokens sent successfully!");
                    }
                    Err(e) => {
                        self.forms.sender.error = Some(e);
                    }
                }
            }
        }
    }
}
