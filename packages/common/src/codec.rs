//! Canonical authorization encoding
//!
//! A redeem authorization is bound to exactly one (recipient, amount, nonce,
//! chain) tuple by hashing a fixed 128-byte encoding of those fields. The
//! trusted authority signs the prefixed digest of that hash; the contract
//! rebuilds the same digest from the caller-supplied parameters and the chain
//! id of its own execution environment, so any tampered field produces a
//! different digest and a failed recovery.
//!
//! # Byte Layout (128 bytes total)
//! - Bytes 0-31:   recipient word (canonical address, left-padded)
//! - Bytes 32-63:  amount (uint256, big-endian, left-padded)
//! - Bytes 64-95:  nonce (uint256, big-endian, left-padded)
//! - Bytes 96-127: chain word (keccak256 of the environment chain id)

use tiny_keccak::{Hasher, Keccak};

/// Prefix applied to the canonical hash before signing, so an authorization
/// signature can never double as a signature over raw transaction data.
pub const SIGNING_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Fold an execution-environment chain id into a fixed 32-byte word
pub fn chain_word(chain_id: &str) -> [u8; 32] {
    keccak256(chain_id.as_bytes())
}

/// Compute the canonical authorization hash for a redeem
///
/// # Arguments
/// * `recipient_word` - 32-byte recipient word (canonical address, left-padded)
/// * `amount` - redeem amount (u128, left-padded into a uint256 word)
/// * `nonce` - single-use nonce (u64, left-padded into a uint256 word)
/// * `chain_word` - 32-byte chain word from [`chain_word`]
///
/// # Returns
/// 32-byte keccak256 hash over the 128-byte canonical encoding
pub fn authorization_hash(
    recipient_word: &[u8; 32],
    amount: u128,
    nonce: u64,
    chain_word: &[u8; 32],
) -> [u8; 32] {
    // Pre-allocate exact size: 4 * 32 = 128 bytes
    let mut data = [0u8; 128];

    data[0..32].copy_from_slice(recipient_word);

    // uint256 amount - left-padded to 32 bytes, big-endian
    // u128 (16 bytes) goes into bytes 48-63, bytes 32-47 remain zero
    let amount_bytes = amount.to_be_bytes();
    data[32 + 16..64].copy_from_slice(&amount_bytes);

    // uint256 nonce - left-padded to 32 bytes, big-endian
    // u64 (8 bytes) goes into bytes 88-95, bytes 64-87 remain zero
    let nonce_bytes = nonce.to_be_bytes();
    data[64 + 24..96].copy_from_slice(&nonce_bytes);

    data[96..128].copy_from_slice(chain_word);

    keccak256(&data)
}

/// Apply the signed-message prefix to a canonical hash
///
/// This is the digest the trusted authority actually signs and the digest
/// signature recovery runs against.
pub fn signing_digest(hash: &[u8; 32]) -> [u8; 32] {
    let mut data = Vec::with_capacity(SIGNING_PREFIX.len() + 32);
    data.extend_from_slice(SIGNING_PREFIX);
    data.extend_from_slice(hash);
    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to 32-byte array
pub fn hex_to_bytes32(hex_str: &str) -> Result<[u8; 32], &'static str> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }

    let bytes = hex::decode(hex_str).map_err(|_| "Invalid hex character")?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&bytes);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_known_vectors() {
        // keccak256("") and keccak256("hello") are fixed by the function
        let empty = keccak256(b"");
        assert_eq!(
            bytes32_to_hex(&empty),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );

        let hello = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&hello),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_amount_padding() {
        let mut recipient = [0u8; 32];
        recipient[31] = 1;
        let chain = chain_word("testing");

        // The u128 payload occupies the low 16 bytes of its word; the high
        // 16 bytes stay zero, so two amounts differing only in the low bytes
        // must hash differently while a zero amount leaves the word blank.
        let zero = authorization_hash(&recipient, 0, 7, &chain);
        let one = authorization_hash(&recipient, 1, 7, &chain);
        let max = authorization_hash(&recipient, u128::MAX, 7, &chain);

        assert_ne!(zero, one);
        assert_ne!(one, max);
        assert_ne!(zero, max);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let recipient = [0xAB; 32];
        let chain = chain_word("columbus-5");

        let a = authorization_hash(&recipient, 1_000_000_000_000, 42, &chain);
        let b = authorization_hash(&recipient, 1_000_000_000_000, 42, &chain);
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_field_changes_hash() {
        let recipient = [0x11; 32];
        let other_recipient = [0x22; 32];
        let chain = chain_word("chain-a");
        let other_chain = chain_word("chain-b");

        let base = authorization_hash(&recipient, 1000, 1, &chain);

        assert_ne!(base, authorization_hash(&other_recipient, 1000, 1, &chain));
        assert_ne!(base, authorization_hash(&recipient, 1001, 1, &chain));
        assert_ne!(base, authorization_hash(&recipient, 1000, 2, &chain));
        assert_ne!(base, authorization_hash(&recipient, 1000, 1, &other_chain));
    }

    #[test]
    fn test_signing_digest_differs_from_hash() {
        let hash = keccak256(b"payload");
        let digest = signing_digest(&hash);
        assert_ne!(digest, hash);

        // Prefixing is deterministic too
        assert_eq!(digest, signing_digest(&hash));
    }

    #[test]
    fn test_chain_word_separates_chains() {
        assert_ne!(chain_word("columbus-5"), chain_word("phoenix-1"));
        assert_ne!(chain_word("chain-1"), chain_word("chain-10"));
    }

    #[test]
    fn test_hex_roundtrip() {
        let value = keccak256(b"roundtrip");
        let hex = bytes32_to_hex(&value);
        assert_eq!(hex_to_bytes32(&hex).unwrap(), value);
        // Also without 0x prefix
        assert_eq!(hex_to_bytes32(&hex[2..]).unwrap(), value);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(hex_to_bytes32("0x1234").is_err());
        assert!(hex_to_bytes32(&"zz".repeat(32)).is_err());
    }
}
