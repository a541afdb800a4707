//! Application constants for the SolForge TUI.
//!
//! This module provides centralized constants for token math, refresh
//! cadence and display formatting used throughout the application.

// ============================================================================
// Token Math Constants
// ============================================================================

/// Lamports per SOL.
///
/// Solana uses lamports as the base unit, where 1 SOL = 1,000,000,000
/// lamports. This constant is used for converting between display values
/// and raw amounts.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimals used for every mint created by this application.
pub const TOKEN_DECIMALS: u8 = 6;

/// Base units per whole token at [`TOKEN_DECIMALS`] decimals.
pub const TOKEN_BASE_UNITS: f64 = 1_000_000.0;

/// Size in bytes of an SPL token mint account.
pub const MINT_ACCOUNT_SIZE: u64 = 82;

// ============================================================================
// Timing Constants
// ============================================================================

/// How often the wallet snapshot is refreshed while a session is connected.
pub const REFRESH_INTERVAL_SECS: u64 = 10;

/// How often the transfer watcher re-reads watched token accounts.
pub const WATCH_POLL_INTERVAL_SECS: u64 = 5;

/// Delay between confirmation-status polls after submitting a transaction.
pub const CONFIRM_POLL_INTERVAL_MS: u64 = 500;

/// How long to keep polling before a submitted transaction counts as
/// unconfirmed.
pub const CONFIRM_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Display Constants
// ============================================================================

/// Maximum number of recent signatures fetched per history request.
pub const HISTORY_LIMIT: usize = 5;

/// How many ticks a toast notification stays on screen (at 100ms per tick).
pub const TOAST_TICKS: u8 = 30;

// ============================================================================
// Helper Functions
// ============================================================================

/// Converts lamports to a SOL display string.
///
/// Trailing zeros are trimmed so 2,500,000,000 lamports renders as "2.5"
/// and exactly zero renders as "0".
///
/// # Example
///
/// ```rust
/// use solforge::constants::format_sol;
///
/// assert_eq!(format_sol(2_500_000_000), "2.5");
/// ```
#[must_use]
pub fn format_sol(lamports: u64) -> String {
    let sol = lamports as f64 / LAMPORTS_PER_SOL as f64;
    trim_decimal(format!("{sol:.9}"))
}

/// Formats a token display amount, trimming trailing zeros.
#[must_use]
pub fn format_token_amount(amount: f64) -> String {
    trim_decimal(format!("{amount:.6}"))
}

/// Converts a user-entered amount string to token base units.
///
/// The amount is scaled by 10^6 (the fixed decimal factor every mint in
/// this application is created with) using native float conversion, with
/// no additional rounding policy.
///
/// # Errors
///
/// Returns [`crate::domain::ForgeError::InvalidAmount`] when the string is
/// not a finite non-negative number.
pub fn ui_amount_to_base_units(amount: &str) -> Result<u64, crate::domain::ForgeError> {
    let parsed: f64 = amount
        .trim()
        .parse()
        .map_err(|_| crate::domain::ForgeError::InvalidAmount(amount.trim().to_string()))?;

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(crate::domain::ForgeError::InvalidAmount(
            amount.trim().to_string(),
        ));
    }

    Ok((parsed * TOKEN_BASE_UNITS) as u64)
}

/// Truncates the middle of a long identifier, keeping `front` leading and
/// `back` trailing characters: `XXXXXXXX...XXXXXXXX`.
///
/// Strings short enough to show whole are returned unchanged.
#[must_use]
pub fn truncate_middle(s: &str, front: usize, back: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= front + back + 3 {
        return s.to_string();
    }
    let head: String = chars[..front].iter().collect();
    let tail: String = chars[chars.len() - back..].iter().collect();
    format!("{head}...{tail}")
}

/// Keeps the first `n` characters of an identifier followed by an ellipsis.
#[must_use]
pub fn truncate_prefix(s: &str, n: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= n {
        return s.to_string();
    }
    let head: String = chars[..n].iter().collect();
    format!("{head}...")
}

fn trim_decimal(formatted: String) -> String {
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_numeric_constants() {
        assert_eq!(LAMPORTS_PER_SOL, 1_000_000_000);
        assert_eq!(TOKEN_DECIMALS, 6);
        assert_eq!(TOKEN_BASE_UNITS, 1_000_000.0);
        assert_eq!(MINT_ACCOUNT_SIZE, 82);
        assert_eq!(HISTORY_LIMIT, 5);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(2_500_000_000, "2.5")]
    #[case(1_000_000_000, "1")]
    #[case(1, "0.000000001")]
    #[case(12_345_678_900, "12.3456789")]
    fn test_format_sol(#[case] lamports: u64, #[case] expected: &str) {
        assert_eq!(format_sol(lamports), expected);
    }

    #[rstest]
    #[case("1", 1_000_000)]
    #[case("2.5", 2_500_000)]
    #[case("0.000001", 1)]
    #[case(" 100 ", 100_000_000)]
    fn test_ui_amount_to_base_units(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(ui_amount_to_base_units(input).unwrap(), expected);
    }

    #[test]
    fn test_ui_amount_rejects_garbage() {
        assert!(ui_amount_to_base_units("ten").is_err());
        assert!(ui_amount_to_base_units("-1").is_err());
        assert!(ui_amount_to_base_units("").is_err());
        assert!(ui_amount_to_base_units("inf").is_err());
    }

    #[test]
    fn test_truncate_middle_matches_display_format() {
        // Mint addresses render as eight leading and eight trailing chars.
        let mint = "4Nd1mYvM6kdLXUnyjWdJQCDqjLVVGR9LoUK1Rv6ZvLhN";
        assert_eq!(truncate_middle(mint, 8, 8), "4Nd1mYvM...Rv6ZvLhN");
    }

    #[test]
    fn test_truncate_middle_keeps_short_strings() {
        assert_eq!(truncate_middle("short", 8, 8), "short");
    }

    #[test]
    fn test_truncate_prefix() {
        let sig = "5j7s6NiJS3JAkvgkoc18WVAsiSaci2pxB2A6ueCJP4tprA2TFg9wSyTLeYouxPBJEMzJinENTkpA52YStRW5Dia7";
        assert_eq!(truncate_prefix(sig, 10), "5j7s6NiJS3...");
        assert_eq!(truncate_prefix("short", 10), "short");
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(1.5), "1.5");
        assert_eq!(format_token_amount(0.0), "0");
        assert_eq!(format_token_amount(12.0), "12");
    }
}
