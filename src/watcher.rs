//! Transfer watcher.
//!
//! On connect, every token account owned by the session address under the
//! SPL token program is enumerated and watched at the confirmed tier. When
//! any watched account's observable state (lamports or data) changes, one
//! [`AppMessage::TokenAccountChanged`] is sent per changed account, with
//! no de-duplication; the receiving refresh is idempotent.
//!
//! The watcher's lifetime is scoped to the session: the task observes the
//! connected-address watch channel and stops as soon as the session it was
//! started for is gone. Discovery failures are logged, never surfaced:
//! the watcher is a best-effort feature.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::client::{AccountState, RpcClient};
use crate::constants::WATCH_POLL_INTERVAL_SECS;
use crate::domain::Pubkey;
use crate::state::AppMessage;

// ============================================================================
// Change Tracking
// ============================================================================

/// Tracks the last observed state per watched account.
#[derive(Debug, Default)]
struct WatchState {
    accounts: Vec<(String, Option<AccountState>)>,
}

impl WatchState {
    fn new(accounts: Vec<String>) -> Self {
        Self {
            accounts: accounts.into_iter().map(|a| (a, None)).collect(),
        }
    }

    fn addresses(&self) -> Vec<String> {
        self.accounts.iter().map(|(a, _)| a.clone()).collect()
    }

    /// Records an observation; returns `true` when the account changed
    /// since the previous successful read. The first observation is the
    /// baseline and never counts as a change.
    fn observe(&mut self, account: &str, state: AccountState) -> bool {
        let Some(entry) = self.accounts.iter_mut().find(|(a, _)| a == account) else {
            return false;
        };

        let changed = matches!(&entry.1, Some(previous) if *previous != state);
        entry.1 = Some(state);
        changed
    }
}

// ============================================================================
// Watcher Task
// ============================================================================

/// Starts the transfer watcher for a freshly connected session.
///
/// Returns immediately; all work happens on a spawned task that ends when
/// the session address leaves the watch channel.
pub fn spawn_transfer_watcher(
    client: RpcClient,
    owner: Pubkey,
    mut session_rx: watch::Receiver<Option<Pubkey>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    tokio::spawn(async move {
        // Discovery is fire-and-forget: a failure here only disables the
        // event-driven refresh, the periodic refresh still runs.
        let accounts = match client.get_token_accounts_by_owner(owner).await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::debug!("token account discovery failed: {e}");
                return;
            }
        };

        if accounts.is_empty() {
            tracing::debug!("no token accounts to watch for {owner}");
            return;
        }

        let mut state =
            WatchState::new(accounts.into_iter().map(|a| a.account).collect());
        let mut poll = tokio::time::interval(Duration::from_secs(WATCH_POLL_INTERVAL_SECS));

        loop {
            tokio::select! {
                changed = session_rx.changed() => {
                    // Channel closed or session replaced: stop watching.
                    if changed.is_err() || *session_rx.borrow() != Some(owner) {
                        tracing::debug!("transfer watcher for {owner} stopped");
                        return;
                    }
                }

                _ = poll.tick() => {
                    for address in state.addresses() {
                        match client.get_account_state(&address).await {
                            Ok(Some(current)) => {
                                if state.observe(&address, current) {
                                    // Receiver may be dropped during shutdown.
                                    let _ = message_tx.send(AppMessage::TokenAccountChanged);
                                }
                            }
                            Ok(None) => {}
                            Err(e) => {
                                tracing::debug!("watch read for {address} failed: {e}");
                            }
                        }
                    }
                }
            }
        }
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn account_state(lamports: u64, data: &str) -> AccountState {
        AccountState {
            lamports,
            data: data.to_string(),
        }
    }

    #[test]
    fn test_first_observation_is_baseline() {
        let mut state = WatchState::new(vec!["acct".to_string()]);
        assert!(!state.observe("acct", account_state(100, "aa")));
    }

    #[test]
    fn test_changed_state_fires() {
        let mut state = WatchState::new(vec!["acct".to_string()]);
        state.observe("acct", account_state(100, "aa"));

        assert!(state.observe("acct", account_state(200, "aa")));
        assert!(state.observe("acct", account_state(200, "bb")));
    }

    #[test]
    fn test_unchanged_state_does_not_fire() {
        let mut state = WatchState::new(vec!["acct".to_string()]);
        state.observe("acct", account_state(100, "aa"));

        assert!(!state.observe("acct", account_state(100, "aa")));
        assert!(!state.observe("acct", account_state(100, "aa")));
    }

    #[test]
    fn test_accounts_fire_independently() {
        let mut state = WatchState::new(vec!["a".to_string(), "b".to_string()]);
        state.observe("a", account_state(1, ""));
        state.observe("b", account_state(1, ""));

        // Only account "a" changed; "b" stays quiet.
        assert!(state.observe("a", account_state(2, "")));
        assert!(!state.observe("b", account_state(1, "")));
    }

    #[test]
    fn test_unknown_account_is_ignored() {
        let mut state = WatchState::new(vec!["a".to_string()]);
        assert!(!state.observe("stranger", account_state(1, "")));
    }
}
