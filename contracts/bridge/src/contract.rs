//! wZNN Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::eth::{encode_evm_address, parse_evm_address};

use crate::error::ContractError;
use crate::execute::{execute_redeem, execute_swap};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_custody_balance, query_nonce_used, query_redeem_digest, query_swap,
    query_swap_count, query_swaps,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, SWAP_COUNT};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;

    // Normalize the authority to lowercase hex; verification compares the
    // parsed bytes, so the stored form is purely presentational
    let authority_bytes =
        parse_evm_address(&msg.authority).map_err(|err| ContractError::InvalidAuthority {
            reason: err.to_string(),
        })?;
    let authority = encode_evm_address(&authority_bytes);

    let config = Config {
        token,
        authority,
    };
    CONFIG.save(deps.storage, &config)?;

    SWAP_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token", config.token)
        .add_attribute("authority", config.authority))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Redeem {
            recipient,
            amount,
            nonce,
            signature,
        } => execute_redeem(deps, env, info, recipient, amount, nonce, signature),
        ExecuteMsg::Swap {
            amount,
            destination,
        } => execute_swap(deps, env, info, amount, destination),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::NonceUsed { nonce } => to_json_binary(&query_nonce_used(deps, nonce)?),
        QueryMsg::RedeemDigest {
            recipient,
            amount,
            nonce,
        } => to_json_binary(&query_redeem_digest(deps, &env, recipient, amount, nonce)?),
        QueryMsg::Swap { id } => to_json_binary(&query_swap(deps, id)?),
        QueryMsg::Swaps { start_after, limit } => {
            to_json_binary(&query_swaps(deps, start_after, limit)?)
        }
        QueryMsg::SwapCount {} => to_json_binary(&query_swap_count(deps)?),
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps, &env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
