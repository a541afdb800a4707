//! Solana public keys.
//!
//! A Solana address is the base-58 encoding of a raw 32-byte Ed25519 public
//! key (or an off-curve program-derived address). There is no hashing step:
//! the key bytes ARE the address bytes.

use std::fmt;

use crate::domain::error::ForgeError;

// ============================================================================
// Pubkey
// ============================================================================

/// A 32-byte Solana public key.
///
/// Opaque and immutable once parsed or derived. Comparison and hashing work
/// on the raw bytes; display uses base-58.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
    /// Wraps raw key bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses a base-58 address string.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::InvalidAddress`] if the string is not valid
    /// base-58 or does not decode to exactly 32 bytes.
    pub fn from_base58(address: &str) -> Result<Self, ForgeError> {
        let bytes = bs58::decode(address.trim())
            .into_vec()
            .map_err(|e| ForgeError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            ForgeError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(Self(arr))
    }

    /// Encodes the key as a base-58 address string.
    #[must_use]
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes, which encodes to
    /// "11111111111111111111111111111111" in base-58.
    #[test]
    fn test_system_program_address() {
        let zeros = Pubkey::new([0u8; 32]);
        assert_eq!(zeros.to_base58(), "11111111111111111111111111111111");
    }

    #[test]
    fn test_roundtrip_encode_decode() {
        // Known Solana address (the SPL Token Program).
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let key = Pubkey::from_base58(address).unwrap();
        assert_eq!(key.to_base58(), address);
        assert_eq!(format!("{key}"), address);
    }

    #[test]
    fn test_from_base58_trims_whitespace() {
        let key = Pubkey::from_base58("  11111111111111111111111111111111  ").unwrap();
        assert_eq!(key, Pubkey::new([0u8; 32]));
    }

    #[test]
    fn test_garbage_returns_error() {
        assert!(Pubkey::from_base58("not-a-valid-address!!!").is_err());
    }

    #[test]
    fn test_too_short_returns_error() {
        // "1" decodes to a single zero byte, which is not 32 bytes.
        assert!(Pubkey::from_base58("1").is_err());
    }

    #[test]
    fn test_equality_on_bytes() {
        let a = Pubkey::new([7u8; 32]);
        let b = Pubkey::new([7u8; 32]);
        let c = Pubkey::new([8u8; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
