use cosmwasm_std::{DepsMut, Response, Uint256};

use crate::error::ContractError;
use crate::state::collected_fees::save_collected_fee;
use crate::types::alliance_collected_fee::AllianceCollectedFee;
use crate::types::alliance_entity::AllianceEntity;
use crate::validation_helpers::assert_entity_id_is_valid;

pub fn set_collected_fee_handler(
    deps: DepsMut,
    alliance_entity: AllianceEntity,
    collected_entrance_fee: Uint256,
) -> Result<Response, ContractError> {
    assert_entity_id_is_valid(&alliance_entity)?;

    let collected_fee = AllianceCollectedFee {
        alliance_entity: alliance_entity.clone(),
        collected_entrance_fee,
    };

    save_collected_fee(deps.storage, &collected_fee)?;

    Ok(Response::new()
        .add_attribute("method", "set_collected_fee")
        .add_attribute("alliance_entity", alliance_entity.to_string())
        .add_attribute(
            "collected_entrance_fee",
            collected_entrance_fee.to_string(),
        ))
}
