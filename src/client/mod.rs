//! HTTP clients for Solana cluster APIs.
//!
//! This module provides the JSON-RPC client used for every ledger read and
//! write, layered over a pooled reqwest HTTP client.

pub mod http;
pub mod rpc;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpClient, HttpConfig};
pub use rpc::{AccountState, OwnedTokenAccount, RpcClient};
