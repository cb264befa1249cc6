use cosmwasm_std::{Deps, StdResult};

use crate::msg::WorldConfigResponse;
use crate::state::world::get_world_config;

pub fn get_world_config_handler(deps: Deps) -> StdResult<WorldConfigResponse> {
    Ok(WorldConfigResponse {
        world: get_world_config(deps.storage)?,
    })
}
