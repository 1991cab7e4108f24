//! Error types for the wZNN bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Wrong signature")]
    WrongSignature,

    #[error("Nonce already used: {nonce}")]
    NonceAlreadyUsed { nonce: u64 },

    #[error("Invalid authority address: {reason}")]
    InvalidAuthority { reason: String },

    // ========================================================================
    // Fund Movement Errors
    // ========================================================================

    #[error("Insufficient custody balance: available {available}, requested {requested}")]
    InsufficientCustodyBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Insufficient caller balance: available {available}, requested {requested}")]
    InsufficientCallerBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Insufficient allowance: available {available}, requested {requested}")]
    InsufficientAllowance {
        available: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Destination address must not be empty")]
    EmptyDestination,
}
