pub mod alliance_collected_fee;
pub mod alliance_entity;
pub mod alliance_fee;
pub mod world_config;
