//! Value bet detection
//!
//! A heuristic flag, not a guaranteed-profit signal: each quote's implied
//! probability is compared against a fixed reference probability that does
//! not depend on the market.

use super::ValueOpportunity;
use crate::quote::Quote;
use crate::telemetry::{increment_counter, record_latency, CounterMetric, LatencyMetric};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Value detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueConfig {
    /// Assumed fair probability of every outcome
    pub reference_probability: Decimal,
    /// Quotes priced below this are ignored
    pub min_price: Decimal,
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            reference_probability: dec!(0.5),
            min_price: dec!(2.0),
        }
    }
}

/// Flags individual quotes priced above the reference probability
#[derive(Debug, Clone, Default)]
pub struct ValueDetector {
    config: ValueConfig,
}

impl ValueDetector {
    pub fn new(config: ValueConfig) -> Self {
        Self { config }
    }

    /// Flag quotes whose expected value is at least `min_ev_pct`
    pub fn detect(&self, quotes: &[Quote], min_ev_pct: Decimal) -> Vec<ValueOpportunity> {
        let started = Instant::now();

        let found: Vec<ValueOpportunity> = quotes
            .iter()
            .filter(|q| q.price >= self.config.min_price)
            .filter_map(|q| self.evaluate(q, min_ev_pct))
            .collect();

        record_latency(LatencyMetric::ValueDetection, started.elapsed());
        increment_counter(CounterMetric::ValueBetsFound, found.len() as u64);
        found
    }

    fn evaluate(&self, quote: &Quote, min_ev_pct: Decimal) -> Option<ValueOpportunity> {
        let implied_probability = quote.implied_probability()?;
        let Some(expected_value_pct) = self
            .config
            .reference_probability
            .checked_sub(implied_probability)
            .and_then(|edge| edge.checked_mul(Decimal::ONE_HUNDRED))
        else {
            tracing::warn!(
                bookmaker = %quote.bookmaker,
                selection = %quote.selection,
                reference_probability = %self.config.reference_probability,
                "Expected value overflowed, skipping quote"
            );
            return None;
        };

        if expected_value_pct < min_ev_pct {
            return None;
        }

        Some(ValueOpportunity {
            id: Uuid::new_v4(),
            quote: quote.clone(),
            implied_probability,
            expected_value_pct,
            detected_at: Utc::now(),
        })
    }

    pub fn config(&self) -> &ValueConfig {
        &self.config
    }
}

/// Flag value bets with the default reference model
pub fn detect_value_bets(quotes: &[Quote], min_ev_pct: Decimal) -> Vec<ValueOpportunity> {
    ValueDetector::default().detect(quotes, min_ev_pct)
}
