//! Instruction primitives and the compact-u16 wire encoding.
//!
//! Solana's transaction wire format length-prefixes arrays with a variable
//! width "compact-u16": 7 bits of payload per byte, high bit set on all but
//! the last byte.

use crate::domain::Pubkey;

// ============================================================================
// Compact-u16
// ============================================================================

/// Encode a `u16` value in Solana's compact-u16 format.
///
/// - Values 0..=0x7f      -> 1 byte
/// - Values 0x80..=0x3fff -> 2 bytes
/// - Larger values        -> 3 bytes
#[must_use]
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = u32::from(value);
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

// ============================================================================
// Account Meta
// ============================================================================

/// A single account reference in an instruction.
#[derive(Debug, Clone)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account reference.
    #[must_use]
    pub const fn writable(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account reference.
    #[must_use]
    pub const fn readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

// ============================================================================
// Instruction
// ============================================================================

/// A single instruction before it is compiled into a transaction.
#[derive(Debug, Clone)]
pub struct Instruction {
    /// The program invoked by this instruction.
    pub program_id: Pubkey,
    /// Accounts the instruction reads or writes, in the program's order.
    pub accounts: Vec<AccountMeta>,
    /// Opaque instruction data.
    pub data: Vec<u8>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![0x00])]
    #[case(0x7f, vec![0x7f])]
    #[case(128, vec![0x80, 0x01])]
    #[case(16383, vec![0xff, 0x7f])]
    #[case(16384, vec![0x80, 0x80, 0x01])]
    #[case(u16::MAX, vec![0xff, 0xff, 0x03])]
    fn test_compact_u16_encoding(#[case] value: u16, #[case] expected: Vec<u8>) {
        assert_eq!(encode_compact_u16(value), expected);
    }

    #[test]
    fn test_account_meta_constructors() {
        let key = Pubkey::new([1u8; 32]);

        let w = AccountMeta::writable(key, true);
        assert!(w.is_writable);
        assert!(w.is_signer);

        let r = AccountMeta::readonly(key, false);
        assert!(!r.is_writable);
        assert!(!r.is_signer);
    }
}
