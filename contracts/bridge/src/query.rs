//! Query handlers for the wZNN bridge contract

use cosmwasm_std::{Binary, Deps, Env, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, CustodyBalanceResponse, DigestResponse, NonceUsedResponse, SwapCountResponse,
    SwapResponse, SwapsResponse,
};
use crate::state::{SwapRecord, CONFIG, SWAPS, SWAP_COUNT, USED_NONCES};
use crate::verify::authorization_digest;

/// Default page size for the Swaps query
const DEFAULT_LIMIT: u32 = 10;
/// Maximum page size for the Swaps query
const MAX_LIMIT: u32 = 30;

/// Query contract configuration
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
        authority: config.authority,
    })
}

/// Query whether a redeem nonce has been consumed
pub fn query_nonce_used(deps: Deps, nonce: u64) -> StdResult<NonceUsedResponse> {
    let used = USED_NONCES.may_load(deps.storage, nonce)?.unwrap_or(false);
    Ok(NonceUsedResponse { nonce, used })
}

/// Compute the authorization hash and signing digest for redeem parameters
///
/// This is the off-chain signer's input contract: the returned digest is
/// exactly what verification will reconstruct for these parameters on this
/// chain.
pub fn query_redeem_digest(
    deps: Deps,
    env: &Env,
    recipient: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<DigestResponse> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let (hash, digest) = authorization_digest(deps, env, &recipient, amount, nonce)?;
    Ok(DigestResponse {
        hash: Binary::from(hash.to_vec()),
        digest: Binary::from(digest.to_vec()),
    })
}

/// Query a recorded swap by id
pub fn query_swap(deps: Deps, id: u64) -> StdResult<SwapResponse> {
    let record = SWAPS.load(deps.storage, id)?;
    Ok(swap_response(record))
}

/// Query recorded swaps with cursor-based pagination
pub fn query_swaps(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<SwapsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let swaps = SWAPS
        .range(deps.storage, start, None, cosmwasm_std::Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, record) = item?;
            Ok(swap_response(record))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SwapsResponse { swaps })
}

/// Query the number of swaps recorded so far
pub fn query_swap_count(deps: Deps) -> StdResult<SwapCountResponse> {
    let count = SWAP_COUNT.load(deps.storage)?;
    Ok(SwapCountResponse { count })
}

/// Query the bridge's current balance on the wrapped token
pub fn query_custody_balance(deps: Deps, env: &Env) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    Ok(CustodyBalanceResponse {
        token: config.token,
        amount: balance.balance,
    })
}

fn swap_response(record: SwapRecord) -> SwapResponse {
    SwapResponse {
        id: record.id,
        sender: record.sender,
        amount: record.amount,
        destination: record.destination,
        timestamp: record.timestamp,
    }
}
