//! Redeem handler: release custodied tokens against a signed authorization

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use common::codec::bytes32_to_hex;
use common::eth::parse_evm_address;

use crate::error::ContractError;
use crate::state::{CONFIG, USED_NONCES};
use crate::verify::{authorization_digest, recover_signer};

/// Release `amount` of custodied tokens to `recipient`
///
/// Order is fixed: signature check, then nonce gate, then the ledger check.
/// The custody check runs before the transfer message is emitted, so a
/// redeem that fails on funds rolls back with its nonce unconsumed and can
/// be retried once custody is replenished.
pub fn execute_redeem(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    recipient: String,
    amount: Uint128,
    nonce: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    // Rebuild the digest from the claimed parameters and this chain's id
    let (hash, digest) = authorization_digest(deps.as_ref(), &env, &recipient, amount, nonce)?;

    // Authority hex was normalized at instantiation
    let authority = parse_evm_address(&config.authority)?;
    match recover_signer(deps.api, &digest, signature.as_slice()) {
        Some(signer) if signer == authority => {}
        _ => return Err(ContractError::WrongSignature),
    }

    if USED_NONCES.may_load(deps.storage, nonce)?.unwrap_or(false) {
        return Err(ContractError::NonceAlreadyUsed { nonce });
    }
    USED_NONCES.save(deps.storage, nonce, &true)?;

    // Ledger check comes last: failing here reverts the nonce mark with the
    // rest of the call
    let custody: BalanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if custody.balance < amount {
        return Err(ContractError::InsufficientCustodyBalance {
            available: custody.balance,
            requested: amount,
        });
    }

    let transfer = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "redeem")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("authorization", bytes32_to_hex(&hash)))
}
