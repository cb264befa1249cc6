use cosmwasm_std::{Addr, DepsMut, Response, Uint256};

use crate::error::ContractError;
use crate::state::alliance_fees::save_alliance_fee;
use crate::types::alliance_entity::AllianceEntity;
use crate::types::alliance_fee::AllianceFee;
use crate::validation_helpers::{assert_entity_id_is_valid, assert_owner_address_is_valid};

pub fn set_alliance_fee_handler(
    deps: DepsMut,
    alliance_entity: AllianceEntity,
    alliance_owner: Addr,
    entrance_fee: Uint256,
) -> Result<Response, ContractError> {
    assert_entity_id_is_valid(&alliance_entity)?;
    assert_owner_address_is_valid(deps.as_ref(), &alliance_owner)?;

    let alliance_fee = AllianceFee {
        alliance_entity: alliance_entity.clone(),
        alliance_owner: alliance_owner.clone(),
        entrance_fee,
    };

    save_alliance_fee(deps.storage, &alliance_fee)?;

    Ok(Response::new()
        .add_attribute("method", "set_alliance_fee")
        .add_attribute("alliance_entity", alliance_entity.to_string())
        .add_attribute("alliance_owner", alliance_owner.to_string())
        .add_attribute("entrance_fee", entrance_fee.to_string()))
}
