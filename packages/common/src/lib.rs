//! Common - Shared Codec Utilities for the wZNN Bridge Contracts
//!
//! This package provides the canonical authorization encoding and the
//! EVM-address helpers shared between the bridge contract and off-chain
//! signer tooling.

pub mod codec;
pub mod eth;

pub use codec::{authorization_hash, chain_word, keccak256, signing_digest};
pub use eth::{encode_evm_address, parse_evm_address};
