//! Error types for Solana client operations.
//!
//! This module defines the custom error types used throughout the RPC
//! client, transaction building and wallet handling, providing structured
//! error handling with helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for SolForge operations.
///
/// This enum provides specific error variants for different failure modes
/// encountered when talking to a Solana cluster or assembling transactions.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// An error object returned by the RPC node itself.
    #[error("RPC error: {message}")]
    Rpc {
        /// The `error.message` field of the JSON-RPC response.
        message: String,
    },

    /// A string that is not a valid base-58 32-byte address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// An amount field that cannot be converted to token base units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Keypair file could not be read or decoded.
    #[error("Keypair error: {0}")]
    Keypair(String),

    /// Transaction assembly failed before submission.
    #[error("Transaction build error: {0}")]
    TransactionBuild(String),

    /// The cluster did not confirm a submitted transaction in time.
    #[error("Transaction {signature} was not confirmed")]
    Unconfirmed {
        /// Signature of the submitted transaction.
        signature: String,
    },

    /// An operation required a connected wallet session.
    #[error("Wallet not connected")]
    WalletDisconnected,
}

impl ForgeError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new RPC-node error with the given message.
    #[must_use]
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            message: message.into(),
        }
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    ///
    /// This allows `ForgeError` to be used with color_eyre's error handling
    /// infrastructure while preserving the error message.
    #[must_use = "this converts the error into a Report for display"]
    #[allow(dead_code)] // Part of the error API
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let parse_err = ForgeError::parse("bad json");
        assert_eq!(format!("{}", parse_err), "Parse error: bad json");

        let rpc_err = ForgeError::rpc("blockhash not found");
        assert_eq!(format!("{}", rpc_err), "RPC error: blockhash not found");

        let addr_err = ForgeError::InvalidAddress("xyz".to_string());
        assert_eq!(format!("{}", addr_err), "Invalid address: xyz");

        let unconfirmed = ForgeError::Unconfirmed {
            signature: "5Gq".to_string(),
        };
        assert_eq!(
            format!("{}", unconfirmed),
            "Transaction 5Gq was not confirmed"
        );

        assert_eq!(
            format!("{}", ForgeError::WalletDisconnected),
            "Wallet not connected"
        );
    }

    #[test]
    fn test_parse_error_creation() {
        let err = ForgeError::parse("invalid JSON");
        match err {
            ForgeError::Parse { message } => assert_eq!(message, "invalid JSON"),
            _ => panic!("Expected Parse variant"),
        }
    }

    #[test]
    fn test_rpc_error_creation() {
        let err = ForgeError::rpc("node unavailable");
        match err {
            ForgeError::Rpc { message } => assert_eq!(message, "node unavailable"),
            _ => panic!("Expected Rpc variant"),
        }
    }

    #[test]
    fn test_error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(ForgeError::WalletDisconnected);
        assert!(err.to_string().contains("not connected"));
    }
}
