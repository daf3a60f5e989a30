//! Opportunity types

use crate::quote::{EventKey, Quote};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A cross-bookmaker surebet on one market of one fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    /// Unique opportunity identifier
    pub id: Uuid,
    /// Fixture the market belongs to
    pub event: EventKey,
    /// Canonical market token
    pub market: String,
    /// Sum of implied probabilities of the legs, below 1
    pub implied_sum: Decimal,
    /// Guaranteed profit as a percentage of the total stake
    pub profit_pct: Decimal,
    /// Best-priced quote per selection, with bookmaker attribution
    pub legs: Vec<Quote>,
    /// Detection timestamp
    pub detected_at: DateTime<Utc>,
}

impl ArbitrageOpportunity {
    /// Split `total_stake` across the legs so every outcome pays the same.
    ///
    /// Leg `i` gets `total * (1 / price_i) / implied_sum`, in leg order.
    pub fn stake_split(&self, total_stake: Decimal) -> Option<Vec<Decimal>> {
        self.legs
            .iter()
            .map(|leg| {
                leg.implied_probability()?
                    .checked_mul(total_stake)?
                    .checked_div(self.implied_sum)
            })
            .collect()
    }

    /// Payout of any outcome when staking per [`stake_split`](Self::stake_split)
    pub fn guaranteed_return(&self, total_stake: Decimal) -> Option<Decimal> {
        total_stake.checked_div(self.implied_sum)
    }

    /// Bookmakers involved, in leg order
    pub fn bookmakers(&self) -> Vec<&str> {
        self.legs.iter().map(|leg| leg.bookmaker.as_str()).collect()
    }
}

/// A single quote priced more generously than the reference probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueOpportunity {
    /// Unique opportunity identifier
    pub id: Uuid,
    /// The flagged quote
    pub quote: Quote,
    /// `1 / price`
    pub implied_probability: Decimal,
    /// `(reference - implied) * 100`
    pub expected_value_pct: Decimal,
    /// Detection timestamp
    pub detected_at: DateTime<Utc>,
}

/// Numeric faults that invalidate one event cluster
#[derive(Debug, Error, PartialEq)]
pub enum DetectError {
    /// A quote with a zero or negative price reached detection
    #[error("Non-positive price {price} from {bookmaker} on {selection}")]
    NonPositivePrice {
        bookmaker: String,
        selection: String,
        price: Decimal,
    },
    /// Decimal arithmetic overflowed while summing implied probabilities
    #[error("Arithmetic overflow evaluating market {0}")]
    Overflow(String),
}
