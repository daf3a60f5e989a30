//! Opportunity detection module
//!
//! Pure, synchronous passes over a store snapshot: cross-bookmaker surebets
//! per fixture and market, and single-quote value bets.

mod arbitrage;
mod types;
mod value;

pub use arbitrage::{best_prices, detect_surebets};
pub use types::{ArbitrageOpportunity, DetectError, ValueOpportunity};
pub use value::{detect_value_bets, ValueConfig, ValueDetector};
