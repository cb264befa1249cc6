use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::types::alliance_entity::AllianceEntity;
use crate::types::alliance_fee::AllianceFee;

const ALLIANCE_FEES: Map<Vec<u8>, AllianceFee> = Map::new("alliance_fees_v1");

pub fn save_alliance_fee(storage: &mut dyn Storage, fee: &AllianceFee) -> StdResult<()> {
    ALLIANCE_FEES.save(storage, fee.alliance_entity.to_vec(), fee)
}

pub fn find_alliance_fee(
    storage: &dyn Storage,
    alliance_entity: &AllianceEntity,
) -> StdResult<Option<AllianceFee>> {
    ALLIANCE_FEES.may_load(storage, alliance_entity.to_vec())
}

pub fn get_alliance_fees(
    storage: &dyn Storage,
    start_after: Option<AllianceEntity>,
    limit: Option<u16>,
) -> Vec<AllianceFee> {
    ALLIANCE_FEES
        .range(
            storage,
            start_after.map(|entity| Bound::exclusive(entity.to_vec())),
            None,
            Order::Ascending,
        )
        .take(limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize)
        .flat_map(|result| result.map(|(_, fee)| fee))
        .collect::<Vec<AllianceFee>>()
}

pub fn remove_alliance_fee(storage: &mut dyn Storage, alliance_entity: &AllianceEntity) {
    ALLIANCE_FEES.remove(storage, alliance_entity.to_vec());
}

#[cfg(test)]
mod alliance_fees_state_tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::{Addr, Uint256};

    fn fee(seed: u8) -> AllianceFee {
        AllianceFee {
            alliance_entity: AllianceEntity::new([seed; 32]),
            alliance_owner: Addr::unchecked("owner"),
            entrance_fee: Uint256::from(1000000u128),
        }
    }

    #[test]
    fn saves_and_finds_alliance_fee() {
        let mut deps = mock_dependencies();
        let fee = fee(1);

        save_alliance_fee(deps.as_mut().storage, &fee).unwrap();

        let saved_fee = find_alliance_fee(&deps.storage, &fee.alliance_entity).unwrap();
        assert_eq!(saved_fee, Some(fee));
    }

    #[test]
    fn find_alliance_fee_that_does_not_exist_returns_none() {
        let deps = mock_dependencies();

        let result = find_alliance_fee(&deps.storage, &AllianceEntity::new([9; 32])).unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn saving_same_entity_overwrites_existing_fee() {
        let mut deps = mock_dependencies();
        let original = fee(1);

        save_alliance_fee(deps.as_mut().storage, &original).unwrap();

        let updated = AllianceFee {
            entrance_fee: Uint256::from(5000000u128),
            ..original.clone()
        };

        save_alliance_fee(deps.as_mut().storage, &updated).unwrap();

        let fees = get_alliance_fees(&deps.storage, None, None);
        assert_eq!(fees, vec![updated]);
    }

    #[test]
    fn removes_alliance_fee() {
        let mut deps = mock_dependencies();
        let fee = fee(1);

        save_alliance_fee(deps.as_mut().storage, &fee).unwrap();
        remove_alliance_fee(deps.as_mut().storage, &fee.alliance_entity);

        let result = find_alliance_fee(&deps.storage, &fee.alliance_entity).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn removing_missing_alliance_fee_is_a_noop() {
        let mut deps = mock_dependencies();

        remove_alliance_fee(deps.as_mut().storage, &AllianceEntity::new([3; 32]));

        assert!(get_alliance_fees(&deps.storage, None, None).is_empty());
    }

    #[test]
    fn get_alliance_fees_returns_fees_in_entity_order() {
        let mut deps = mock_dependencies();

        save_alliance_fee(deps.as_mut().storage, &fee(2)).unwrap();
        save_alliance_fee(deps.as_mut().storage, &fee(1)).unwrap();
        save_alliance_fee(deps.as_mut().storage, &fee(3)).unwrap();

        let fees = get_alliance_fees(&deps.storage, None, None);

        assert_eq!(fees, vec![fee(1), fee(2), fee(3)]);
    }

    #[test]
    fn get_alliance_fees_with_start_after_skips_earlier_entities() {
        let mut deps = mock_dependencies();

        save_alliance_fee(deps.as_mut().storage, &fee(1)).unwrap();
        save_alliance_fee(deps.as_mut().storage, &fee(2)).unwrap();
        save_alliance_fee(deps.as_mut().storage, &fee(3)).unwrap();

        let fees = get_alliance_fees(&deps.storage, Some(AllianceEntity::new([1; 32])), None);

        assert_eq!(fees, vec![fee(2), fee(3)]);
    }

    #[test]
    fn get_alliance_fees_with_limit_returns_limited_fees() {
        let mut deps = mock_dependencies();

        save_alliance_fee(deps.as_mut().storage, &fee(1)).unwrap();
        save_alliance_fee(deps.as_mut().storage, &fee(2)).unwrap();
        save_alliance_fee(deps.as_mut().storage, &fee(3)).unwrap();

        let fees = get_alliance_fees(&deps.storage, None, Some(2));

        assert_eq!(fees, vec![fee(1), fee(2)]);
    }
}
