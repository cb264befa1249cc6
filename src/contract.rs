#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::handlers::get_alliance_fee::get_alliance_fee_handler;
use crate::handlers::get_alliance_fees::get_alliance_fees_handler;
use crate::handlers::get_collected_fee::get_collected_fee_handler;
use crate::handlers::get_collected_fees::get_collected_fees_handler;
use crate::handlers::get_world_config::get_world_config_handler;
use crate::handlers::remove_alliance_fee::remove_alliance_fee_handler;
use crate::handlers::remove_collected_fee::remove_collected_fee_handler;
use crate::handlers::set_alliance_fee::set_alliance_fee_handler;
use crate::handlers::set_collected_fee::set_collected_fee_handler;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::world::initialise_world;

pub const CONTRACT_NAME: &str = "crates.io:alliance-fee";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let world = initialise_world(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("namespace", world.namespace))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let world = initialise_world(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("namespace", world.namespace))
}

// the registered system is open access, no sender assertions on any path
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetAllianceFee {
            alliance_entity,
            alliance_owner,
            entrance_fee,
        } => set_alliance_fee_handler(deps, alliance_entity, alliance_owner, entrance_fee),
        ExecuteMsg::RemoveAllianceFee { alliance_entity } => {
            remove_alliance_fee_handler(deps, alliance_entity)
        }
        ExecuteMsg::SetCollectedFee {
            alliance_entity,
            collected_entrance_fee,
        } => set_collected_fee_handler(deps, alliance_entity, collected_entrance_fee),
        ExecuteMsg::RemoveCollectedFee { alliance_entity } => {
            remove_collected_fee_handler(deps, alliance_entity)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetWorldConfig {} => to_binary(&get_world_config_handler(deps)?),
        QueryMsg::GetAllianceFee { alliance_entity } => {
            to_binary(&get_alliance_fee_handler(deps, alliance_entity)?)
        }
        QueryMsg::GetAllianceFees { start_after, limit } => {
            to_binary(&get_alliance_fees_handler(deps, start_after, limit)?)
        }
        QueryMsg::GetCollectedFee { alliance_entity } => {
            to_binary(&get_collected_fee_handler(deps, alliance_entity)?)
        }
        QueryMsg::GetCollectedFees { start_after, limit } => {
            to_binary(&get_collected_fees_handler(deps, start_after, limit)?)
        }
    }
}
