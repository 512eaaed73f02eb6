//! Boundary validation
//!
//! Checks applied to anything entering the system from the network or the
//! wallet provider. A failed check rejects the whole operation.

use crate::error::{ChainError, Result};

/// Number of hex digits in a wallet address after the `0x` prefix
pub const ADDRESS_HEX_LEN: usize = 40;

/// Amounts must be finite and strictly positive
pub fn validate_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ChainError::InvalidAmount(amount))
    }
}

/// Addresses must be `0x` followed by exactly 40 hex characters
pub fn validate_wallet_address(address: &str) -> Result<()> {
    let valid = address.strip_prefix("0x").is_some_and(|hex| {
        hex.len() == ADDRESS_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit())
    });

    if valid {
        Ok(())
    } else {
        Err(ChainError::InvalidAddress(address.to_string()))
    }
}

/// Fields a track upload cannot do without
pub fn validate_track_fields(title: &str, album: &str, duration: &str) -> Result<()> {
    let missing: Vec<&str> = [("title", title), ("album", album), ("duration", duration)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ChainError::invalid_input(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_must_be_positive_and_finite() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-0.5).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn address_format() {
        assert!(validate_wallet_address("0x1234567890123456789012345678901234567890").is_ok());
        assert!(validate_wallet_address("0xABCDEFabcdef1234567890123456789012345678").is_ok());

        // Wrong prefix, wrong length, non-hex
        assert!(validate_wallet_address("1234567890123456789012345678901234567890").is_err());
        assert!(validate_wallet_address("0x12345").is_err());
        assert!(validate_wallet_address("0x123456789012345678901234567890123456789g").is_err());
        assert!(validate_wallet_address("0x12345678901234567890123456789012345678901").is_err());
    }

    #[test]
    fn track_fields_report_every_missing_name() {
        let err = validate_track_fields("", "Album", " ").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("title"));
        assert!(message.contains("duration"));
        assert!(!message.contains("album"));

        assert!(validate_track_fields("Title", "Album", "3:00").is_ok());
    }
}
