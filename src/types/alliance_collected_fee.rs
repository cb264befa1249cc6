use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

use super::alliance_entity::AllianceEntity;

/// Running total of entrance fees collected for one alliance.
#[cw_serde]
pub struct AllianceCollectedFee {
    pub alliance_entity: AllianceEntity,
    pub collected_entrance_fee: Uint256,
}
