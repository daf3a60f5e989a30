//! Quote model
//!
//! Raw quotes from sources, canonical quotes held by the store, and the keys
//! used for deduplication and event grouping. Validation happens once, in
//! [`Quote::from_raw`], so nothing downstream re-checks shape.

mod types;

pub use types::{Quote, QuoteError, RawPrice, RawQuote};

use crate::normalize::{
    canonicalize_league, canonicalize_market, canonicalize_selection, canonicalize_team,
    canonicalize_token,
};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sport assumed when a source leaves it out
pub const DEFAULT_SPORT: &str = "soccer";

/// Identifies one bookmaker's current price for one canonical outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub market: String,
    pub selection: String,
    pub bookmaker: String,
}

/// Identifies a fixture across bookmakers and markets
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventKey {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub start_time: Option<DateTime<Utc>>,
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {} ({})", self.home_team, self.away_team, self.league)?;
        if let Some(start) = self.start_time {
            write!(f, " @ {}", start.format("%Y-%m-%d %H:%M"))?;
        }
        Ok(())
    }
}

impl Quote {
    /// Validate and canonicalize a raw quote.
    ///
    /// `now` stands in for `observed_at` when the source did not stamp it.
    pub fn from_raw(raw: RawQuote, now: DateTime<Utc>) -> Result<Self, QuoteError> {
        let home_team = required(raw.home_team.as_deref(), "home_team", canonicalize_team)?;
        let away_team = required(raw.away_team.as_deref(), "away_team", canonicalize_team)?;
        let league = required(raw.league.as_deref(), "league", canonicalize_league)?;
        let market = required(raw.market.as_deref(), "market", canonicalize_market)?;
        let selection = required(raw.selection.as_deref(), "selection", canonicalize_selection)?;
        let bookmaker = required(raw.bookmaker.as_deref(), "bookmaker", canonicalize_token)?;

        let sport = raw
            .sport
            .as_deref()
            .map(canonicalize_token)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SPORT.to_string());

        let price = raw
            .price
            .as_ref()
            .ok_or(QuoteError::MissingField("price"))
            .and_then(parse_price)?;

        Ok(Self {
            home_team,
            away_team,
            league,
            sport,
            market,
            selection,
            price,
            bookmaker,
            observed_at: raw.observed_at.unwrap_or(now),
            start_time: raw.start_time,
        })
    }

    /// Dedup key for the store
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            league: self.league.clone(),
            market: self.market.clone(),
            selection: self.selection.clone(),
            bookmaker: self.bookmaker.clone(),
        }
    }

    /// Fixture key for event grouping
    pub fn event_key(&self) -> EventKey {
        EventKey {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            league: self.league.clone(),
            start_time: self.start_time,
        }
    }

    /// Implied probability `1 / price`, `None` for a zero price
    pub fn implied_probability(&self) -> Option<Decimal> {
        Decimal::ONE.checked_div(self.price)
    }
}

fn required(
    value: Option<&str>,
    field: &'static str,
    canonicalize: fn(&str) -> String,
) -> Result<String, QuoteError> {
    let token = canonicalize(value.unwrap_or_default());
    if token.is_empty() {
        return Err(QuoteError::MissingField(field));
    }
    Ok(token)
}

fn parse_price(raw: &RawPrice) -> Result<Decimal, QuoteError> {
    let price = match raw {
        RawPrice::Number(value) => {
            Decimal::from_f64(*value).ok_or_else(|| QuoteError::NonNumericPrice(value.to_string()))?
        }
        RawPrice::Text(text) => Decimal::from_str(&text.trim().replace(',', "."))
            .map_err(|_| QuoteError::NonNumericPrice(text.clone()))?,
    };

    if price <= Decimal::ZERO {
        return Err(QuoteError::NonPositivePrice(price));
    }
    Ok(price)
}
