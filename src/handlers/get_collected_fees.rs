use cosmwasm_std::{Deps, StdResult};

use crate::msg::CollectedFeesResponse;
use crate::state::collected_fees::get_collected_fees;
use crate::types::alliance_entity::AllianceEntity;
use crate::validation_helpers::assert_page_limit_is_valid;

pub fn get_collected_fees_handler(
    deps: Deps,
    start_after: Option<AllianceEntity>,
    limit: Option<u16>,
) -> StdResult<CollectedFeesResponse> {
    assert_page_limit_is_valid(limit)?;

    Ok(CollectedFeesResponse {
        collected_fees: get_collected_fees(deps.storage, start_after, limit),
    })
}
