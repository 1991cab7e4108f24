//! wZNN Custody Bridge Contract
//!
//! This contract holds wrapped ZNN in custody and moves it in two directions:
//!
//! # Redeem (incoming)
//! 1. The off-chain bridge operator observes a burn on the counterpart chain
//! 2. The operator signs (recipient, amount, nonce, chain id) with its key
//! 3. The user submits `Redeem` with that signature; the contract rebuilds
//!    the digest, recovers the signer, and releases custodied tokens
//!
//! # Swap (outgoing)
//! 1. The user grants the bridge an allowance on the wrapped token
//! 2. The user submits `Swap`; the contract pulls the tokens into custody
//!    and emits an event binding (sender, amount, destination) for the
//!    off-chain relay to act on
//!
//! # Security
//! - Single trusted authority fixed at instantiation
//! - Every signature is bound to this chain's id, so an authorization for
//!   one deployment cannot be replayed on another
//! - Nonce tracking to prevent replay attacks
//! - All-or-nothing call semantics: a failed transfer rolls back the nonce

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
