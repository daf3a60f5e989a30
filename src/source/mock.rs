//! Deterministic demo source

use super::OddsSource;
use crate::quote::{RawPrice, RawQuote};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixtures generated per day
const MATCHES_PER_DAY: u32 = 2;
/// Furthest day generated, regardless of the requested horizon
const MAX_DAYS: u32 = 7;

/// Generates two 1x2 fixtures per upcoming day with home and away prices
///
/// Several mocks with different names and price offsets quote the same
/// fixtures, which is enough to exercise cross-bookmaker detection.
#[derive(Debug, Clone)]
pub struct MockSource {
    name: String,
    price_offset: Decimal,
    anchor: Option<DateTime<Utc>>,
}

impl MockSource {
    /// Create a mock bookmaker
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_offset: Decimal::ZERO,
            anchor: None,
        }
    }

    /// Shift every generated price by `offset`
    pub fn with_price_offset(mut self, offset: Decimal) -> Self {
        self.price_offset = offset;
        self
    }

    /// Fix the instant fixtures are scheduled from (midnight UTC today by default)
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    fn generate(&self, days_ahead: u32) -> Vec<RawQuote> {
        let anchor = self
            .anchor
            .unwrap_or_else(|| Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc());
        let observed_at = Utc::now();

        let mut out = Vec::new();
        for day in 1..=days_ahead.min(MAX_DAYS) {
            let start = anchor + Duration::days(i64::from(day)) + Duration::hours(19);
            for match_i in 1..=MATCHES_PER_DAY {
                let step = Decimal::from(match_i);
                let prices = [
                    ("home", dec!(1.8) + dec!(0.05) * step),
                    ("away", dec!(3.1) + dec!(0.1) * step),
                ];
                for (selection, price) in prices {
                    out.push(RawQuote {
                        home_team: Some(format!("MockHome{day}{match_i}")),
                        away_team: Some(format!("MockAway{day}{match_i}")),
                        league: Some("Mock League".to_string()),
                        sport: Some("soccer".to_string()),
                        market: Some("1X2".to_string()),
                        selection: Some(selection.to_string()),
                        price: Some(RawPrice::Text((price + self.price_offset).to_string())),
                        bookmaker: Some(self.name.clone()),
                        observed_at: Some(observed_at),
                        start_time: Some(start),
                    });
                }
            }
        }
        out
    }
}

#[async_trait]
impl OddsSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_upcoming(&self, days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
        let quotes = self.generate(days_ahead);
        tracing::debug!(source = %self.name, quotes = quotes.len(), "Mock quotes generated");
        Ok(quotes)
    }
}
