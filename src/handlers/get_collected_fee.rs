use cosmwasm_std::{Deps, StdResult};

use crate::msg::CollectedFeeResponse;
use crate::state::collected_fees::find_collected_fee;
use crate::types::alliance_entity::AllianceEntity;

pub fn get_collected_fee_handler(
    deps: Deps,
    alliance_entity: AllianceEntity,
) -> StdResult<CollectedFeeResponse> {
    Ok(CollectedFeeResponse {
        collected_fee: find_collected_fee(deps.storage, &alliance_entity)?,
    })
}
