//! Unit and display helpers for wallet values

use crate::error::{ClientError, Result};

const WEI_PER_ETH: f64 = 1e18;

/// Parse a `0x` hex wei amount into ETH rounded to 4 decimals
pub fn wei_hex_to_eth(hex: &str) -> Result<f64> {
    let digits = hex.trim_start_matches("0x");
    let wei = if digits.is_empty() {
        0
    } else {
        u128::from_str_radix(digits, 16)
            .map_err(|e| ClientError::ParseError(format!("invalid wei amount {hex}: {e}")))?
    };

    Ok(((wei as f64 / WEI_PER_ETH) * 10_000.0).round() / 10_000.0)
}

/// Convert an ETH amount into a `0x` hex wei string
pub fn eth_to_wei_hex(amount: f64) -> String {
    let wei = (amount * WEI_PER_ETH).round() as u128;
    format!("{wei:#x}")
}

/// Human-readable name of a chain id
pub fn chain_name(chain_id: &str) -> String {
    match chain_id {
        "0x1" => "Ethereum Mainnet".to_string(),
        "0xaa36a7" => "Sepolia Testnet".to_string(),
        "0x5" => "Goerli Testnet".to_string(),
        other => format!("Unknown Network ({other})"),
    }
}

/// Shorten an address to `0x1234...abcd`
pub fn format_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
