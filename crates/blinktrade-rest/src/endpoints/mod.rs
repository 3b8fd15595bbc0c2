//! API endpoint implementations

pub mod market;
pub mod trading;

pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;
