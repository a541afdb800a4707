//! Instruction bundles for the three forge operations.
//!
//! Each operation is zero or more setup instructions followed by exactly
//! one primary instruction, submitted as a single atomic transaction. The
//! assembly here is pure: existence checks happen before calling in, so
//! the bundle shape is fully determined by its arguments.

use crate::constants::{MINT_ACCOUNT_SIZE, TOKEN_DECIMALS};
use crate::domain::{ForgeError, Pubkey};
use crate::tx::instruction::Instruction;
use crate::tx::token;

// ============================================================================
// Bundle Assembly
// ============================================================================

/// Instructions for creating a new token mint.
///
/// Allocates the mint account (rent-exempt, owned by the token program)
/// and initializes it with 6 decimals; the session address becomes both
/// mint and freeze authority.
///
/// # Errors
///
/// Propagates instruction-encoding failures from the token builders.
pub fn create_token(
    payer: Pubkey,
    mint: Pubkey,
    mint_rent: u64,
) -> Result<Vec<Instruction>, ForgeError> {
    Ok(vec![
        token::create_account(
            payer,
            mint,
            mint_rent,
            MINT_ACCOUNT_SIZE,
            token::TOKEN_PROGRAM_ID,
        ),
        token::initialize_mint(mint, TOKEN_DECIMALS, payer, payer)?,
    ])
}

/// Instructions for minting supply into the session's own token account.
///
/// When the associated token account does not exist yet, its creation is
/// ordered before the mint-to so the whole bundle lands atomically.
#[must_use]
pub fn mint_tokens(
    payer: Pubkey,
    mint: Pubkey,
    token_account: Pubkey,
    amount: u64,
    account_exists: bool,
) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(2);

    if !account_exists {
        instructions.push(token::create_associated_token_account(
            payer,
            token_account,
            payer,
            mint,
        ));
    }

    instructions.push(token::mint_to(mint, token_account, payer, amount));
    instructions
}

/// Instructions for sending tokens to a recipient.
///
/// A recipient lacking an associated token account gets one created first,
/// funded by the sender, inside the same atomic bundle as the transfer.
#[must_use]
pub fn send_tokens(
    payer: Pubkey,
    mint: Pubkey,
    sender_account: Pubkey,
    recipient: Pubkey,
    recipient_account: Pubkey,
    amount: u64,
    recipient_account_exists: bool,
) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(2);

    if !recipient_account_exists {
        instructions.push(token::create_associated_token_account(
            payer,
            recipient_account,
            recipient,
            mint,
        ));
    }

    instructions.push(token::transfer(sender_account, recipient_account, payer, amount));
    instructions
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PAYER: Pubkey = Pubkey([1u8; 32]);
    const MINT: Pubkey = Pubkey([2u8; 32]);
    const ACCOUNT: Pubkey = Pubkey([3u8; 32]);
    const RECIPIENT: Pubkey = Pubkey([4u8; 32]);
    const RECIPIENT_ACCOUNT: Pubkey = Pubkey([5u8; 32]);

    #[test]
    fn test_create_token_bundle_shape() {
        let bundle = create_token(PAYER, MINT, 1_461_600).unwrap();

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle[0].program_id, token::SYSTEM_PROGRAM_ID);
        assert_eq!(bundle[1].program_id, token::TOKEN_PROGRAM_ID);
        // InitializeMint with 6 decimals.
        assert_eq!(bundle[1].data[0], 0);
        assert_eq!(bundle[1].data[1], TOKEN_DECIMALS);
    }

    #[test]
    fn test_mint_bundle_with_existing_account() {
        let bundle = mint_tokens(PAYER, MINT, ACCOUNT, 1_000_000, true);

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle[0].program_id, token::TOKEN_PROGRAM_ID);
        assert_eq!(bundle[0].data[0], 7); // MintTo
    }

    #[test]
    fn test_mint_bundle_creates_missing_account_first() {
        let bundle = mint_tokens(PAYER, MINT, ACCOUNT, 1_000_000, false);

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle[0].program_id, token::ASSOCIATED_TOKEN_PROGRAM_ID);
        assert_eq!(bundle[1].data[0], 7);
    }

    #[test]
    fn test_send_bundle_with_existing_recipient_account() {
        let bundle = send_tokens(
            PAYER,
            MINT,
            ACCOUNT,
            RECIPIENT,
            RECIPIENT_ACCOUNT,
            500_000,
            true,
        );

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle[0].data[0], 3); // Transfer
    }

    #[test]
    fn test_send_bundle_places_account_creation_before_transfer() {
        let bundle = send_tokens(
            PAYER,
            MINT,
            ACCOUNT,
            RECIPIENT,
            RECIPIENT_ACCOUNT,
            500_000,
            false,
        );

        assert_eq!(bundle.len(), 2);
        // Account creation strictly precedes the transfer.
        assert_eq!(bundle[0].program_id, token::ASSOCIATED_TOKEN_PROGRAM_ID);
        assert_eq!(bundle[1].program_id, token::TOKEN_PROGRAM_ID);
        assert_eq!(bundle[1].data[0], 3);

        // The created account is owned by the recipient, funded by sender.
        assert_eq!(bundle[0].accounts[0].pubkey, PAYER);
        assert_eq!(bundle[0].accounts[2].pubkey, RECIPIENT);
    }
}
