//! Swap handler: lock caller tokens into custody for the counterpart chain

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{SwapRecord, CONFIG, SWAPS, SWAP_COUNT};

/// Pull `amount` of the caller's tokens into custody and record the swap
///
/// The caller must have granted the bridge an allowance beforehand.
/// `destination` is an opaque address on the counterpart chain; it is
/// recorded and emitted for the off-chain relay, with no format checking
/// beyond non-emptiness.
pub fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    if destination.is_empty() {
        return Err(ContractError::EmptyDestination);
    }

    // Balance before allowance, matching the ledger's own check order
    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Balance {
            address: info.sender.to_string(),
        },
    )?;
    if balance.balance < amount {
        return Err(ContractError::InsufficientCallerBalance {
            available: balance.balance,
            requested: amount,
        });
    }

    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Allowance {
            owner: info.sender.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;
    if allowance.allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            available: allowance.allowance,
            requested: amount,
        });
    }

    let id = SWAP_COUNT.load(deps.storage)?;
    SWAP_COUNT.save(deps.storage, &(id + 1))?;

    let record = SwapRecord {
        id,
        sender: info.sender.clone(),
        amount,
        destination: destination.clone(),
        timestamp: env.block.time,
    };
    SWAPS.save(deps.storage, id, &record)?;

    let pull = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("method", "swap")
        .add_attribute("swap_id", id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("destination", destination))
}
