//! Domain types for the SolForge TUI.
//!
//! This module groups the data the rest of the application operates on:
//!
//! - [`Cluster`] - which Solana network the client talks to
//! - [`Pubkey`] - 32-byte base-58 addresses
//! - [`WalletSnapshot`] - the wallet view as of its last successful fetch
//! - [`ForgeError`] - the shared error type for client and chain operations

pub mod error;
pub mod network;
pub mod pubkey;
pub mod snapshot;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::ForgeError;
pub use network::Cluster;
pub use pubkey::Pubkey;
pub use snapshot::{SignatureRecord, TokenBalance, WalletSnapshot};
