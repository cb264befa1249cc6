use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;
use crate::types::world_config::{world_config, WorldConfig};

const WORLD: Item<WorldConfig> = Item::new("world_v1");

pub fn initialise_world(storage: &mut dyn Storage) -> Result<WorldConfig, ContractError> {
    let world = world_config();
    world.validate()?;
    WORLD.save(storage, &world)?;
    Ok(world)
}

pub fn get_world_config(storage: &dyn Storage) -> StdResult<WorldConfig> {
    WORLD.load(storage)
}

#[cfg(test)]
mod world_state_tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn initialise_world_persists_the_canonical_declaration() {
        let mut deps = mock_dependencies();

        let world = initialise_world(deps.as_mut().storage).unwrap();

        let saved = get_world_config(&deps.storage).unwrap();
        assert_eq!(saved, world);
        assert_eq!(saved, world_config());
    }
}
