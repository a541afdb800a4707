//! Wallet session and keypair handling.
//!
//! The browser-wallet equivalent of this application is a local keypair
//! session: an Ed25519 keypair loaded from a Solana-CLI-format JSON file
//! (an array of 64 bytes, seed followed by public key) that authorizes
//! every submitted transaction. Fresh throwaway keypairs (mint accounts)
//! are generated in-process.

use std::path::{Path, PathBuf};

use ed25519_dalek::{Signer, SigningKey};

use crate::domain::{ForgeError, Pubkey};

// ============================================================================
// Keypair
// ============================================================================

/// An Ed25519 keypair able to co-sign transactions.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Builds a keypair from a 32-byte Ed25519 seed.
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Generates a fresh random keypair (used for new mint accounts).
    #[must_use]
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::rngs::OsRng),
        }
    }

    /// Returns the public key of this keypair.
    #[must_use]
    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new(self.signing_key.verifying_key().to_bytes())
    }

    /// Signs a message, returning the raw 64-byte Ed25519 signature.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("Keypair")
            .field("pubkey", &self.pubkey().to_base58())
            .finish()
    }
}

// ============================================================================
// Wallet Session
// ============================================================================

/// The connected identity: a keypair plus its display address.
///
/// A session exists only while the user is "connected"; the application
/// models disconnect by dropping the session.
#[derive(Debug)]
pub struct WalletSession {
    keypair: Keypair,
    address: String,
}

impl WalletSession {
    /// Opens a session from a keypair file.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Keypair`] if the file cannot be read or does
    /// not contain a valid 64-byte Solana keypair array.
    pub fn from_file(path: &Path) -> Result<Self, ForgeError> {
        Ok(Self::from_keypair(load_keypair(path)?))
    }

    /// Opens a session over an already-loaded keypair.
    #[must_use]
    pub fn from_keypair(keypair: Keypair) -> Self {
        let address = keypair.pubkey().to_base58();
        Self { keypair, address }
    }

    /// Returns the session's public key.
    #[must_use]
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Returns the session's base-58 address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the signing keypair for transaction authorization.
    #[must_use]
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

// ============================================================================
// Keypair Files
// ============================================================================

/// Returns the Solana CLI default keypair path (`~/.config/solana/id.json`).
///
/// # Errors
///
/// Returns [`ForgeError::Keypair`] if the home directory cannot be found.
pub fn default_keypair_path() -> Result<PathBuf, ForgeError> {
    let mut path = dirs::home_dir()
        .ok_or_else(|| ForgeError::Keypair("could not find home directory".to_string()))?;
    path.push(".config");
    path.push("solana");
    path.push("id.json");
    Ok(path)
}

/// Loads a keypair from a Solana-CLI-format JSON file.
///
/// The file holds a JSON array of 64 bytes: the 32-byte seed followed by
/// the 32-byte public key. Only the seed is used; the embedded public key
/// is re-derived and ignored.
///
/// # Errors
///
/// Returns [`ForgeError::Keypair`] on read, decode or length failures.
pub fn load_keypair(path: &Path) -> Result<Keypair, ForgeError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ForgeError::Keypair(format!("failed to read {}: {e}", path.display()))
    })?;

    let bytes: Vec<u8> = serde_json::from_str(&raw)
        .map_err(|e| ForgeError::Keypair(format!("not a JSON byte array: {e}")))?;

    if bytes.len() != 64 {
        return Err(ForgeError::Keypair(format!(
            "expected 64 bytes, got {}",
            bytes.len()
        )));
    }

    let seed: [u8; 32] = bytes[..32]
        .try_into()
        .map_err(|_| ForgeError::Keypair("seed slice conversion failed".to_string()))?;

    Ok(Keypair::from_seed(seed))
}

// ============================================================================
// Tests
// ============================================================================
