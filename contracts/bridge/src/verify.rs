//! Signature verification for redeem authorizations
//!
//! Recovery is total over arbitrary input: malformed signatures yield `None`
//! rather than an error, so a bad signature fails the authority comparison
//! the same way a wrong signer does.

use cosmwasm_std::{Addr, Api, Deps, Env, StdResult, Uint128};

use common::codec::{authorization_hash, chain_word, keccak256, signing_digest};

/// Recover the 20-byte EVM address that signed `digest`
///
/// Accepts 65-byte r‖s‖v signatures with v in {0, 1} or {27, 28}.
/// Returns `None` for any malformed or unrecoverable input.
pub fn recover_signer(api: &dyn Api, digest: &[u8; 32], signature: &[u8]) -> Option<[u8; 20]> {
    if signature.len() != 65 {
        return None;
    }

    let v = signature[64];
    let recovery_id = if v >= 27 { v - 27 } else { v };
    if recovery_id >= 4 {
        return None;
    }

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature[..64], recovery_id)
        .ok()?;

    // Uncompressed SEC1 key: 0x04 tag + 64 bytes of point data.
    // The EVM address is the last 20 bytes of keccak256 over the point data.
    if pubkey.len() != 65 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Rebuild the canonical hash and signing digest for a redeem
///
/// The chain word comes from the execution environment, never from caller
/// input, which is what binds an authorization to this deployment.
pub fn authorization_digest(
    deps: Deps,
    env: &Env,
    recipient: &Addr,
    amount: Uint128,
    nonce: u64,
) -> StdResult<([u8; 32], [u8; 32])> {
    let recipient_word = encode_recipient(deps, recipient)?;
    let chain = chain_word(&env.block.chain_id);
    let hash = authorization_hash(&recipient_word, amount.u128(), nonce, &chain);
    let digest = signing_digest(&hash);
    Ok((hash, digest))
}

/// Encode a recipient address as a 32-byte word
///
/// The canonical form is folded through keccak256, same as the chain id, so
/// the word width is fixed regardless of the address format in use.
pub fn encode_recipient(deps: Deps, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = deps.api.addr_canonicalize(addr.as_str())?;
    Ok(keccak256(canonical.as_slice()))
}
