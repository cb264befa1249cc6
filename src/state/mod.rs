pub mod alliance_fees;
pub mod collected_fees;
pub mod world;
