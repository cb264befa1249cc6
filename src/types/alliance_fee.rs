use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};

use super::alliance_entity::AllianceEntity;

/// The currently configured entrance fee for one alliance. The fee is
/// denominated in the smallest unit of the native currency.
#[cw_serde]
pub struct AllianceFee {
    pub alliance_entity: AllianceEntity,
    pub alliance_owner: Addr,
    pub entrance_fee: Uint256,
}
