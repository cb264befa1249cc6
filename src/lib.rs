pub mod constants;
pub mod contract;
mod error;
pub mod handlers;
pub mod msg;
pub mod state;
pub mod tests;
pub mod types;
pub mod validation_helpers;

pub use crate::error::ContractError;
