//! Solana transaction assembly.
//!
//! This module implements the compact binary transaction wire format by
//! hand: instruction encodings for the system and SPL token programs,
//! associated token account derivation, message compilation and Ed25519
//! signing. Submitting the resulting bytes is the RPC client's job.

pub mod bundles;
pub mod instruction;
pub mod message;
pub mod token;

// ============================================================================
// Re-exports
// ============================================================================

pub use instruction::{AccountMeta, Instruction, encode_compact_u16};
pub use message::{CompiledInstruction, Transaction, compile_transaction, sign_transaction};
