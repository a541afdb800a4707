//! SPL token and system-program instruction builders.
//!
//! Implements the instruction encodings needed by the forge workflow
//! (account creation, mint initialization, minting, transfers, associated
//! token account handling) plus ATA address derivation, without pulling
//! in `solana-sdk` or `spl-token`.

use sha2::{Digest, Sha256};

use crate::domain::{ForgeError, Pubkey};
use crate::tx::instruction::{AccountMeta, Instruction};

// ============================================================================
// Well-known Program IDs
// ============================================================================

/// The System Program public key: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey([0u8; 32]);

/// SPL Token Program ID: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
]);

/// Associated Token Account Program ID:
/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = Pubkey([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
]);

/// Base58 address of the rent sysvar, required by `InitializeMint`.
const SYSVAR_RENT_ADDRESS: &str = "SysvarRent111111111111111111111111111111111";

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// System Program `CreateAccount` instruction index (little-endian u32).
const SYSTEM_CREATE_ACCOUNT_IX: u32 = 0;

/// SPL Token instruction indices used by this module.
const TOKEN_IX_INITIALIZE_MINT: u8 = 0;
const TOKEN_IX_TRANSFER: u8 = 3;
const TOKEN_IX_MINT_TO: u8 = 7;

// ============================================================================
// System Program
// ============================================================================

/// Build a System Program `CreateAccount` instruction.
///
/// Allocates `space` bytes funded with `lamports` (rent exemption) and
/// assigns ownership to `owner`. The new account co-signs the transaction,
/// which is how a fresh mint keypair enters the creation bundle.
///
/// # Wire format
///
/// u32 LE instruction index (0) + u64 LE lamports + u64 LE space +
/// 32-byte owner program id. Total data: 52 bytes.
#[must_use]
pub fn create_account(
    funder: Pubkey,
    new_account: Pubkey,
    lamports: u64,
    space: u64,
    owner: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(52);
    data.extend_from_slice(&SYSTEM_CREATE_ACCOUNT_IX.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());
    data.extend_from_slice(&space.to_le_bytes());
    data.extend_from_slice(owner.as_bytes());

    Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(funder, true),
            AccountMeta::writable(new_account, true),
        ],
        data,
    }
}

// ============================================================================
// SPL Token Instructions
// ============================================================================

/// Build an SPL Token `InitializeMint` instruction.
///
/// The mint is initialized with the given decimals; the freeze authority is
/// always set (COption tag 1).
///
/// # Wire format
///
/// [0] + decimals + 32-byte mint authority + [1] + 32-byte freeze authority.
/// Total data: 67 bytes.
///
/// # Errors
///
/// Returns an error if the rent sysvar address fails to decode (a
/// constant, so only reachable if the binary is corrupted).
pub fn initialize_mint(
    mint: Pubkey,
    decimals: u8,
    mint_authority: Pubkey,
    freeze_authority: Pubkey,
) -> Result<Instruction, ForgeError> {
    let rent_sysvar = Pubkey::from_base58(SYSVAR_RENT_ADDRESS)?;

    let mut data = Vec::with_capacity(67);
    data.push(TOKEN_IX_INITIALIZE_MINT);
    data.push(decimals);
    data.extend_from_slice(mint_authority.as_bytes());
    data.push(1); // COption::Some for the freeze authority
    data.extend_from_slice(freeze_authority.as_bytes());

    Ok(Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(mint, false),
            AccountMeta::readonly(rent_sysvar, false),
        ],
        data,
    })
}

/// Build an SPL Token `MintTo` instruction.
///
/// Mints `amount` base units of `mint` into `destination`, authorized by
/// the mint authority.
///
/// # Wire format
///
/// [7] + u64 LE amount. Total data: 9 bytes.
#[must_use]
pub fn mint_to(mint: Pubkey, destination: Pubkey, authority: Pubkey, amount: u64) -> Instruction {
    let mut data = Vec::with_capacity(9);
    data.push(TOKEN_IX_MINT_TO);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(mint, false),
            AccountMeta::writable(destination, false),
            AccountMeta::readonly(authority, true),
        ],
        data,
    }
}

/// Build an SPL Token `Transfer` instruction.
///
/// Moves `amount` base units between two token accounts, authorized by the
/// owner of the source account.
///
/// # Wire format
///
/// [3] + u64 LE amount. Total data: 9 bytes.
#[must_use]
pub fn transfer(source: Pubkey, destination: Pubkey, owner: Pubkey, amount: u64) -> Instruction {
    let mut data = Vec::with_capacity(9);
    data.push(TOKEN_IX_TRANSFER);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(source, false),
            AccountMeta::writable(destination, false),
            AccountMeta::readonly(owner, true),
        ],
        data,
    }
}

/// Build an Associated Token Account Program `Create` instruction.
///
/// Creates the deterministic token account for `(owner, mint)`, funded by
/// `funder`. Empty instruction data selects `Create` in the ATA program.
#[must_use]
pub fn create_associated_token_account(
    funder: Pubkey,
    associated_account: Pubkey,
    owner: Pubkey,
    mint: Pubkey,
) -> Instruction {
    Instruction {
        program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(funder, true),
            AccountMeta::writable(associated_account, false),
            AccountMeta::readonly(owner, false),
            AccountMeta::readonly(mint, false),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: Vec::new(),
    }
}

// ============================================================================
// Associated Token Account Derivation
// ============================================================================

/// Derive the associated token account address for a wallet + mint pair.
///
/// The ATA is a Program Derived Address (PDA) with seeds
/// `[wallet, token_program_id, mint]` under the ATA program. The derivation
/// searches bump seeds 255 down to 0 for a result that is NOT on the
/// Ed25519 curve.
///
/// # Errors
///
/// Returns [`ForgeError::InvalidAddress`] if no bump seed yields an
/// off-curve point (astronomically unlikely).
pub fn derive_associated_token_address(
    wallet: Pubkey,
    mint: Pubkey,
) -> Result<Pubkey, ForgeError> {
    find_program_address(
        &[
            wallet.as_bytes(),
            TOKEN_PROGRAM_ID.as_bytes(),
            mint.as_bytes(),
        ],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Find a valid PDA for the given seeds and program.
fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ForgeError> {
    for bump in (0u8..=255).rev() {
        if let Some(address) = try_create_program_address(seeds, &[bump], program_id) {
            return Ok((address, bump));
        }
    }

    Err(ForgeError::InvalidAddress(
        "could not find valid PDA bump seed".to_string(),
    ))
}

/// Attempt to create a PDA from seeds + bump + program id.
///
/// Returns `Some(address)` if the derived point is OFF the Ed25519 curve,
/// `None` if it falls on the curve (invalid PDA, try the next bump).
fn try_create_program_address(
    seeds: &[&[u8]],
    bump_seed: &[u8],
    program_id: &Pubkey,
) -> Option<Pubkey> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(bump_seed);
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);

    let hash: [u8; 32] = hasher.finalize().into();

    if is_on_curve(&hash) {
        return None;
    }

    Some(Pubkey::new(hash))
}

/// Check whether 32 bytes decompress to a valid Ed25519 curve point.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

// ============================================================================
// Tests
// ============================================================================
