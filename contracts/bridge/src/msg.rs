//! Message types for the wZNN bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Wrapped-token (CW20) contract address this bridge holds in custody
    pub token: String,
    /// Trusted authority (20-byte EVM-style address as 0x-hex) whose
    /// signatures authorize redemptions
    pub authority: String,
}

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Release custodied tokens to `recipient`
    ///
    /// Authorization: a signature from the trusted authority over the
    /// canonical encoding of (recipient, amount, nonce, this chain's id).
    /// Each nonce is consumable exactly once.
    Redeem {
        /// Recipient address on this chain
        recipient: String,
        /// Amount to release
        amount: Uint128,
        /// Single-use nonce from the authorization
        nonce: u64,
        /// 65-byte r‖s‖v signature over the prefixed authorization digest
        signature: Binary,
    },

    /// Lock `amount` of the caller's tokens into bridge custody
    ///
    /// Requires a prior allowance for the bridge on the wrapped token.
    /// Emits an event binding (sender, amount, destination) for the
    /// off-chain relay; `destination` is an opaque counterpart-chain
    /// address and is only checked for non-emptiness.
    Swap {
        /// Amount to lock
        amount: Uint128,
        /// Recipient address on the counterpart chain
        destination: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Check if a redeem nonce has been consumed
    #[returns(NonceUsedResponse)]
    NonceUsed { nonce: u64 },

    /// Compute the digest the authority must sign for these redeem
    /// parameters on this chain (without touching state)
    #[returns(DigestResponse)]
    RedeemDigest {
        recipient: String,
        amount: Uint128,
        nonce: u64,
    },

    /// Returns a recorded swap by id
    #[returns(SwapResponse)]
    Swap { id: u64 },

    /// Returns recorded swaps with cursor-based pagination
    #[returns(SwapsResponse)]
    Swaps {
        /// Cursor: the id of the last item from the previous page
        start_after: Option<u64>,
        /// Max entries to return (default 10, max 30)
        limit: Option<u32>,
    },

    /// Returns the number of swaps recorded so far
    #[returns(SwapCountResponse)]
    SwapCount {},

    /// Returns the bridge's current balance on the wrapped token
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub authority: String,
}

#[cw_serde]
pub struct NonceUsedResponse {
    pub nonce: u64,
    pub used: bool,
}

#[cw_serde]
pub struct DigestResponse {
    /// Canonical authorization hash over (recipient, amount, nonce, chain)
    pub hash: Binary,
    /// Prefixed digest the authority signs
    pub digest: Binary,
}

#[cw_serde]
pub struct SwapResponse {
    pub id: u64,
    pub sender: Addr,
    pub amount: Uint128,
    pub destination: String,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct SwapsResponse {
    pub swaps: Vec<SwapResponse>,
}

#[cw_serde]
pub struct SwapCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub token: Addr,
    pub amount: Uint128,
}
