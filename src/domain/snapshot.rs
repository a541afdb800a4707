//! Wallet snapshot data.
//!
//! A [`WalletSnapshot`] is the state of the connected wallet as of its last
//! successful fetch: native balance, token holdings and recent signatures.
//! Snapshots are rebuilt wholesale on every refresh and replaced atomically;
//! they are never patched incrementally, so applying the same snapshot twice
//! yields the same displayed state.

use crate::constants::format_sol;

// ============================================================================
// Token Balance
// ============================================================================

/// A single token holding of the wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalance {
    /// The mint address defining the token type.
    pub mint: String,
    /// The token account holding the balance.
    pub account: String,
    /// Display amount, already scaled by the mint's decimals.
    pub amount: f64,
}

// ============================================================================
// Signature Record
// ============================================================================

/// A recent transaction signature with its best-effort timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureRecord {
    /// Opaque signature identifier, usable for explorer lookups.
    pub signature: String,
    /// Unix block time in seconds, when the node reports one.
    pub block_time: Option<i64>,
}

impl SignatureRecord {
    /// Formats the block time for display, or "Unknown" when absent.
    #[must_use]
    pub fn display_time(&self) -> String {
        match self.block_time.and_then(|t| chrono::DateTime::from_timestamp(t, 0)) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "Unknown".to_string(),
        }
    }
}

// ============================================================================
// Wallet Snapshot
// ============================================================================

/// The full wallet view as of one successful refresh.
///
/// Reflects the ledger state at fetch time, not necessarily the current
/// state; the periodic refresh and transfer-watcher events reconcile it
/// over time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletSnapshot {
    /// Native balance in lamports.
    pub lamports: u64,
    /// Token holdings, one entry per token account.
    pub tokens: Vec<TokenBalance>,
    /// Most-recent-first transaction signatures, capped by the fetch limit.
    pub recent: Vec<SignatureRecord>,
}

impl WalletSnapshot {
    /// Formats the native balance in SOL for display.
    #[must_use]
    pub fn sol_display(&self) -> String {
        format_sol(self.lamports)
    }
}

// ============================================================================
// Tests
// ============================================================================
