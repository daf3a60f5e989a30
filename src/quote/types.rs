//! Quote types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Price as delivered by a source: a JSON number or a text field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Number(value)
    }
}

/// A quote exactly as a source adapter produced it, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub league: Option<String>,
    pub sport: Option<String>,
    pub market: Option<String>,
    pub selection: Option<String>,
    /// Decimal odds
    #[serde(alias = "odds")]
    pub price: Option<RawPrice>,
    pub bookmaker: Option<String>,
    /// When the source observed the price; ingestion time if absent
    #[serde(default, alias = "timestamp")]
    pub observed_at: Option<DateTime<Utc>>,
    /// Fixture kickoff time
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

/// A validated, canonicalized quote
///
/// One price offered by one bookmaker for one outcome of one market of one
/// fixture. All text fields hold canonical tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub sport: String,
    pub market: String,
    pub selection: String,
    /// Decimal odds, always positive
    pub price: Decimal,
    pub bookmaker: String,
    pub observed_at: DateTime<Utc>,
    pub start_time: Option<DateTime<Utc>>,
}

/// Reasons a raw quote is rejected at ingestion
#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    /// A required text field is absent or blank after canonicalization
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    /// Price is not a finite number
    #[error("Non-numeric price: {0}")]
    NonNumericPrice(String),
    /// Price is zero or negative
    #[error("Non-positive price: {0}")]
    NonPositivePrice(Decimal),
}
