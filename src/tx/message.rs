//! Transaction compilation, serialization and signing.
//!
//! Solana transactions are a compact binary layout:
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        (see below)
//!
//! Instruction:
//!   program_id_index        u8
//!   num_accounts            compact-u16
//!   account_indices         u8 * num_accounts
//!   data_len                compact-u16
//!   data                    u8 * data_len
//! ```
//!
//! Instructions are compiled in caller order, so a setup instruction placed
//! before the primary instruction stays ordered inside the atomic bundle.

use crate::domain::{ForgeError, Pubkey};
use crate::tx::instruction::{AccountMeta, Instruction, encode_compact_u16};
use crate::wallet::Keypair;

// ============================================================================
// Compiled Transaction
// ============================================================================

/// A compiled instruction where account references are replaced by u8
/// indices into the transaction's `account_keys` array.
#[derive(Debug, Clone)]
pub struct CompiledInstruction {
    /// Index into `account_keys` for the program to invoke.
    pub program_id_index: u8,
    /// Indices into `account_keys` for each account the instruction uses.
    pub account_indices: Vec<u8>,
    /// Opaque instruction data.
    pub data: Vec<u8>,
}

/// A complete transaction, ready for signing.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// All account keys referenced by this transaction, in canonical order:
    ///   1. writable signers (fee payer first)
    ///   2. read-only signers
    ///   3. writable non-signers
    ///   4. read-only non-signers
    pub account_keys: Vec<Pubkey>,

    /// Number of required signatures (the first N accounts are signers).
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned: u8,

    /// Recent blockhash the transaction is anchored to.
    pub recent_blockhash: [u8; 32],

    /// Compiled instructions in caller order.
    pub instructions: Vec<CompiledInstruction>,
}

// ============================================================================
// Compilation
// ============================================================================

/// Compile a set of instructions into a transaction with a single fee payer.
///
/// The fee payer is always the first signer and sits at index 0 in the
/// account keys. Duplicate account references are merged, keeping the union
/// of their signer/writable permissions.
///
/// # Errors
///
/// Returns [`ForgeError::TransactionBuild`] if an instruction references an
/// account that failed to land in the key table (cannot happen for inputs
/// built by this crate, but kept as a hard check).
pub fn compile_transaction(
    instructions: &[Instruction],
    fee_payer: Pubkey,
    recent_blockhash: [u8; 32],
) -> Result<Transaction, ForgeError> {
    struct AccountEntry {
        pubkey: Pubkey,
        is_signer: bool,
        is_writable: bool,
    }

    // Instruction account lists are tiny; a Vec scan keeps this simple.
    let mut entries: Vec<AccountEntry> = Vec::new();

    let mut upsert = |meta: &AccountMeta| {
        if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == meta.pubkey) {
            entry.is_signer |= meta.is_signer;
            entry.is_writable |= meta.is_writable;
        } else {
            entries.push(AccountEntry {
                pubkey: meta.pubkey,
                is_signer: meta.is_signer,
                is_writable: meta.is_writable,
            });
        }
    };

    // Fee payer is always signer + writable.
    upsert(&AccountMeta::writable(fee_payer, true));

    for ix in instructions {
        for meta in &ix.accounts {
            upsert(meta);
        }
        // Program IDs are non-signer, read-only accounts.
        upsert(&AccountMeta::readonly(ix.program_id, false));
    }

    // Sort into canonical order, keeping insertion order within a category
    // so the fee payer stays first among writable signers.
    fn rank(e: &AccountEntry) -> u8 {
        match (e.is_signer, e.is_writable) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }
    entries.sort_by_key(rank);

    let num_required_signatures = entries.iter().filter(|e| e.is_signer).count() as u8;
    let num_readonly_signed = entries
        .iter()
        .filter(|e| e.is_signer && !e.is_writable)
        .count() as u8;
    let num_readonly_unsigned = entries
        .iter()
        .filter(|e| !e.is_signer && !e.is_writable)
        .count() as u8;

    let account_keys: Vec<Pubkey> = entries.iter().map(|e| e.pubkey).collect();

    let index_of = |key: Pubkey| -> Result<u8, ForgeError> {
        account_keys
            .iter()
            .position(|k| *k == key)
            .map(|i| i as u8)
            .ok_or_else(|| ForgeError::TransactionBuild("account not in key table".to_string()))
    };

    let mut compiled = Vec::with_capacity(instructions.len());
    for ix in instructions {
        let program_id_index = index_of(ix.program_id)?;
        let mut account_indices = Vec::with_capacity(ix.accounts.len());
        for meta in &ix.accounts {
            account_indices.push(index_of(meta.pubkey)?);
        }
        compiled.push(CompiledInstruction {
            program_id_index,
            account_indices,
            data: ix.data.clone(),
        });
    }

    Ok(Transaction {
        account_keys,
        num_required_signatures,
        num_readonly_signed,
        num_readonly_unsigned,
        recent_blockhash,
        instructions: compiled,
    })
}

// ============================================================================
// Serialization & Signing
// ============================================================================

/// Serialize the transaction message (the bytes that get signed).
#[must_use]
pub fn serialize_message(tx: &Transaction) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);

    // Header: 3 bytes.
    buf.push(tx.num_required_signatures);
    buf.push(tx.num_readonly_signed);
    buf.push(tx.num_readonly_unsigned);

    // Account keys.
    buf.extend_from_slice(&encode_compact_u16(tx.account_keys.len() as u16));
    for key in &tx.account_keys {
        buf.extend_from_slice(key.as_bytes());
    }

    // Recent blockhash.
    buf.extend_from_slice(&tx.recent_blockhash);

    // Instructions.
    buf.extend_from_slice(&encode_compact_u16(tx.instructions.len() as u16));
    for ix in &tx.instructions {
        buf.push(ix.program_id_index);

        buf.extend_from_slice(&encode_compact_u16(ix.account_indices.len() as u16));
        buf.extend_from_slice(&ix.account_indices);

        buf.extend_from_slice(&encode_compact_u16(ix.data.len() as u16));
        buf.extend_from_slice(&ix.data);
    }

    buf
}

/// Sign and serialize a transaction into its wire format.
///
/// Every required signer slot must be covered by one of `signers`; the
/// signature array follows the order of the transaction's account keys, so
/// multi-signer bundles (e.g. fee payer plus a fresh mint keypair) work
/// without further bookkeeping. The returned bytes are ready to be
/// base64-encoded and submitted via `sendTransaction`.
///
/// # Errors
///
/// Returns [`ForgeError::TransactionBuild`] when a required signer has no
/// matching keypair.
pub fn sign_transaction(tx: &Transaction, signers: &[&Keypair]) -> Result<Vec<u8>, ForgeError> {
    let message_bytes = serialize_message(tx);

    let num_signers = tx.num_required_signatures as usize;
    let mut signatures: Vec<[u8; 64]> = Vec::with_capacity(num_signers);

    for signer_key in tx.account_keys.iter().take(num_signers) {
        let keypair = signers
            .iter()
            .find(|kp| kp.pubkey() == *signer_key)
            .ok_or_else(|| {
                ForgeError::TransactionBuild(format!(
                    "missing keypair for required signer {signer_key}"
                ))
            })?;
        signatures.push(keypair.sign(&message_bytes));
    }

    let mut wire = Vec::with_capacity(1 + 64 * signatures.len() + message_bytes.len());
    wire.extend_from_slice(&encode_compact_u16(signatures.len() as u16));
    for signature in &signatures {
        wire.extend_from_slice(signature);
    }
    wire.extend_from_slice(&message_bytes);

    Ok(wire)
}

// ============================================================================
// Tests
// ============================================================================
