use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};

use crate::types::alliance_collected_fee::AllianceCollectedFee;
use crate::types::alliance_entity::AllianceEntity;
use crate::types::alliance_fee::AllianceFee;
use crate::types::world_config::WorldConfig;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    SetAllianceFee {
        alliance_entity: AllianceEntity,
        alliance_owner: Addr,
        entrance_fee: Uint256,
    },
    RemoveAllianceFee {
        alliance_entity: AllianceEntity,
    },
    SetCollectedFee {
        alliance_entity: AllianceEntity,
        collected_entrance_fee: Uint256,
    },
    RemoveCollectedFee {
        alliance_entity: AllianceEntity,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(WorldConfigResponse)]
    GetWorldConfig {},
    #[returns(AllianceFeeResponse)]
    GetAllianceFee { alliance_entity: AllianceEntity },
    #[returns(AllianceFeesResponse)]
    GetAllianceFees {
        start_after: Option<AllianceEntity>,
        limit: Option<u16>,
    },
    #[returns(CollectedFeeResponse)]
    GetCollectedFee { alliance_entity: AllianceEntity },
    #[returns(CollectedFeesResponse)]
    GetCollectedFees {
        start_after: Option<AllianceEntity>,
        limit: Option<u16>,
    },
}

#[cw_serde]
pub struct WorldConfigResponse {
    pub world: WorldConfig,
}

#[cw_serde]
pub struct AllianceFeeResponse {
    pub alliance_fee: Option<AllianceFee>,
}

#[cw_serde]
pub struct AllianceFeesResponse {
    pub alliance_fees: Vec<AllianceFee>,
}

#[cw_serde]
pub struct CollectedFeeResponse {
    pub collected_fee: Option<AllianceCollectedFee>,
}

#[cw_serde]
pub struct CollectedFeesResponse {
    pub collected_fees: Vec<AllianceCollectedFee>,
}
