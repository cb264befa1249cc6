pub mod get_alliance_fee;
pub mod get_alliance_fees;
pub mod get_collected_fee;
pub mod get_collected_fees;
pub mod get_world_config;
pub mod remove_alliance_fee;
pub mod remove_collected_fee;
pub mod set_alliance_fee;
pub mod set_collected_fee;
