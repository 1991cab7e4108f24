//! EVM address helpers
//!
//! The trusted authority holds an EVM-style secp256k1 key, so its identity is
//! the usual 20-byte address (keccak256 of the public key, last 20 bytes).
//! These helpers move between that byte form and the 0x-hex wire form.

use cosmwasm_std::{StdError, StdResult};

/// Parse a hex EVM address (with or without 0x prefix) to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; 20]> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to a lowercase EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_encode_roundtrip() {
        let addr = "0x55d398326f99059ff775485246999027b3197955";
        let bytes = parse_evm_address(addr).unwrap();
        assert_eq!(encode_evm_address(&bytes), addr);
    }

    #[test]
    fn test_parse_without_prefix() {
        let bytes = parse_evm_address("55d398326f99059ff775485246999027b3197955").unwrap();
        assert_eq!(bytes[0], 0x55);
        assert_eq!(bytes[19], 0x55);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let upper = parse_evm_address("0x55D398326F99059FF775485246999027B3197955").unwrap();
        let lower = parse_evm_address("0x55d398326f99059ff775485246999027b3197955").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(
            encode_evm_address(&upper),
            "0x55d398326f99059ff775485246999027b3197955"
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_evm_address("0x1234").is_err());
        assert!(parse_evm_address(&"g".repeat(40)).is_err());
        assert!(parse_evm_address("").is_err());
    }
}
