use cosmwasm_std::{DepsMut, Response};

use crate::error::ContractError;
use crate::state::alliance_fees::remove_alliance_fee;
use crate::types::alliance_entity::AllianceEntity;
use crate::validation_helpers::assert_entity_id_is_valid;

pub fn remove_alliance_fee_handler(
    deps: DepsMut,
    alliance_entity: AllianceEntity,
) -> Result<Response, ContractError> {
    assert_entity_id_is_valid(&alliance_entity)?;

    remove_alliance_fee(deps.storage, &alliance_entity);

    Ok(Response::new()
        .add_attribute("method", "remove_alliance_fee")
        .add_attribute("alliance_entity", alliance_entity.to_string()))
}
