use cosmwasm_std::{Deps, StdResult};

use crate::msg::AllianceFeesResponse;
use crate::state::alliance_fees::get_alliance_fees;
use crate::types::alliance_entity::AllianceEntity;
use crate::validation_helpers::assert_page_limit_is_valid;

pub fn get_alliance_fees_handler(
    deps: Deps,
    start_after: Option<AllianceEntity>,
    limit: Option<u16>,
) -> StdResult<AllianceFeesResponse> {
    assert_page_limit_is_valid(limit)?;

    Ok(AllianceFeesResponse {
        alliance_fees: get_alliance_fees(deps.storage, start_after, limit),
    })
}
