use cosmwasm_std::{DepsMut, Env, MessageInfo};
use rand::Rng;

use crate::contract::instantiate;
use crate::msg::InstantiateMsg;
use crate::types::alliance_entity::AllianceEntity;

pub const USER: &str = "user";

pub fn instantiate_contract(deps: DepsMut, env: Env, info: MessageInfo) {
    instantiate(deps, env, info, InstantiateMsg {}).unwrap();
}

pub fn entity_id(seed: u8) -> AllianceEntity {
    AllianceEntity::new([seed; 32])
}

pub fn random_entity_id() -> AllianceEntity {
    AllianceEntity::new(rand::thread_rng().gen::<[u8; 32]>())
}
