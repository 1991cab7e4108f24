//! State definitions for the wZNN bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration, immutable after instantiation
#[cw_serde]
pub struct Config {
    /// Wrapped-token (CW20) contract held in custody
    pub token: Addr,
    /// Trusted authority whose signatures release custody
    /// (20-byte EVM-style address, normalized lowercase 0x-hex)
    pub authority: String,
}

/// Outgoing swap record, observed by the off-chain relay
#[cw_serde]
pub struct SwapRecord {
    /// Sequential swap id
    pub id: u64,
    /// Caller whose tokens were pulled into custody
    pub sender: Addr,
    /// Amount locked
    pub amount: Uint128,
    /// Counterpart-chain address that should receive the native asset
    pub destination: String,
    /// Block time of the swap
    pub timestamp: Timestamp,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wznn-bridge";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Consumed redeem nonces (to prevent replay attacks)
/// Key: nonce, Value: whether consumed. Global to the instance, never pruned.
pub const USED_NONCES: Map<u64, bool> = Map::new("used_nonces");

/// Outgoing swap history
/// Key: swap id, Value: SwapRecord
pub const SWAPS: Map<u64, SwapRecord> = Map::new("swaps");

/// Number of swaps recorded so far (also the next swap id)
pub const SWAP_COUNT: Item<u64> = Item::new("swap_count");
