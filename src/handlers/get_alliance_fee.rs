use cosmwasm_std::{Deps, StdResult};

use crate::msg::AllianceFeeResponse;
use crate::state::alliance_fees::find_alliance_fee;
use crate::types::alliance_entity::AllianceEntity;

pub fn get_alliance_fee_handler(
    deps: Deps,
    alliance_entity: AllianceEntity,
) -> StdResult<AllianceFeeResponse> {
    Ok(AllianceFeeResponse {
        alliance_fee: find_alliance_fee(deps.storage, &alliance_entity)?,
    })
}
