//! Data state for the SolForge TUI.
//!
//! Holds the wallet snapshot and the transaction history view. Snapshots
//! arrive from background refreshes tagged with a fetch sequence number;
//! because overlapping refreshes may complete out of order, a result older
//! than the newest applied one is discarded rather than letting a stale
//! read overwrite a fresher snapshot.

use crate::domain::{SignatureRecord, WalletSnapshot};

// ============================================================================
// History State
// ============================================================================

/// State of the transaction history panel.
///
/// An empty result is distinguished from a fetch failure: both render a
/// message, but they are different states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryState {
    /// No session connected; nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Signatures were fetched, most-recent-first.
    Loaded(Vec<SignatureRecord>),
    /// The fetch succeeded but returned nothing.
    Empty,
    /// The fetch failed with a display message.
    Failed(String),
}

// ============================================================================
// Data State
// ============================================================================

/// Data owned by the application: snapshot, history and the fetch-sequence
/// bookkeeping that serializes concurrent refresh results.
#[derive(Debug, Default)]
pub struct DataState {
    /// The last successfully applied wallet snapshot.
    pub snapshot: Option<WalletSnapshot>,
    /// Transaction history panel state.
    pub history: HistoryState,
    /// Highest fetch sequence applied so far.
    applied_fetch_seq: Option<u64>,
}

impl DataState {
    /// Creates an empty data state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a fetched snapshot unless a newer one already landed.
    ///
    /// Returns `true` when the snapshot was applied. The last successful
    /// fetch wins; results arriving out of sequence are dropped.
    pub fn apply_snapshot(&mut self, seq: u64, snapshot: WalletSnapshot) -> bool {
        if matches!(self.applied_fetch_seq, Some(applied) if seq <= applied) {
            tracing::debug!("discarding stale snapshot (seq {seq})");
            return false;
        }
        self.applied_fetch_seq = Some(seq);
        self.snapshot = Some(snapshot);
        true
    }

    /// Drops all session-derived data on disconnect.
    pub fn clear(&mut self) {
        self.snapshot = None;
        self.history = HistoryState::Idle;
    }

    /// The most recent signature known to the history panel, if any.
    #[must_use]
    pub fn latest_history_signature(&self) -> Option<&str> {
        match &self.history {
            HistoryState::Loaded(records) => records.first().map(|r| r.signature.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(lamports: u64) -> WalletSnapshot {
        WalletSnapshot {
            lamports,
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_snapshot_in_order() {
        let mut data = DataState::new();
        assert!(data.apply_snapshot(1, snapshot(100)));
        assert!(data.apply_snapshot(2, snapshot(200)));
        assert_eq!(data.snapshot.as_ref().unwrap().lamports, 200);
    }

    #[test]
    fn test_stale_snapshot_is_discarded() {
        let mut data = DataState::new();
        assert!(data.apply_snapshot(5, snapshot(500)));

        // A slower, older fetch completes after a newer one: dropped.
        assert!(!data.apply_snapshot(3, snapshot(300)));
        assert_eq!(data.snapshot.as_ref().unwrap().lamports, 500);

        // Same sequence twice is also dropped.
        assert!(!data.apply_snapshot(5, snapshot(999)));
        assert_eq!(data.snapshot.as_ref().unwrap().lamports, 500);
    }

    #[test]
    fn test_reapplying_equal_snapshot_yields_same_state() {
        let mut data = DataState::new();
        data.apply_snapshot(1, snapshot(100));
        let first = data.snapshot.clone();

        // A reconciling refresh that observed no ledger change produces an
        // identical snapshot; applying it changes nothing visible.
        data.apply_snapshot(2, snapshot(100));
        assert_eq!(data.snapshot, first);
    }

    #[test]
    fn test_clear_drops_session_data() {
        let mut data = DataState::new();
        data.apply_snapshot(1, snapshot(100));
        data.history = HistoryState::Loaded(vec![]);

        data.clear();
        assert!(data.snapshot.is_none());
        assert_eq!(data.history, HistoryState::Idle);
    }

    #[test]
    fn test_latest_history_signature() {
        let mut data = DataState::new();
        assert!(data.latest_history_signature().is_none());

        data.history = HistoryState::Loaded(vec![
            SignatureRecord {
                signature: "newest".to_string(),
                block_time: None,
            },
            SignatureRecord {
                signature: "older".to_string(),
                block_time: None,
            },
        ]);
        assert_eq!(data.latest_history_signature(), Some("newest"));

        data.history = HistoryState::Empty;
        assert!(data.latest_history_signature().is_none());
    }
}
