use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::types::alliance_collected_fee::AllianceCollectedFee;
use crate::types::alliance_entity::AllianceEntity;

const COLLECTED_FEES: Map<Vec<u8>, AllianceCollectedFee> = Map::new("collected_fees_v1");

pub fn save_collected_fee(
    storage: &mut dyn Storage,
    collected_fee: &AllianceCollectedFee,
) -> StdResult<()> {
    COLLECTED_FEES.save(
        storage,
        collected_fee.alliance_entity.to_vec(),
        collected_fee,
    )
}

pub fn find_collected_fee(
    storage: &dyn Storage,
    alliance_entity: &AllianceEntity,
) -> StdResult<Option<AllianceCollectedFee>> {
    COLLECTED_FEES.may_load(storage, alliance_entity.to_vec())
}

pub fn get_collected_fees(
    storage: &dyn Storage,
    start_after: Option<AllianceEntity>,
    limit: Option<u16>,
) -> Vec<AllianceCollectedFee> {
    COLLECTED_FEES
        .range(
            storage,
            start_after.map(|entity| Bound::exclusive(entity.to_vec())),
            None,
            Order::Ascending,
        )
        .take(limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize)
        .flat_map(|result| result.map(|(_, collected_fee)| collected_fee))
        .collect::<Vec<AllianceCollectedFee>>()
}

pub fn remove_collected_fee(storage: &mut dyn Storage, alliance_entity: &AllianceEntity) {
    COLLECTED_FEES.remove(storage, alliance_entity.to_vec());
}
