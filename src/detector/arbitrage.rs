//! Surebet detection
//!
//! For every fixture and market, takes the best price per selection across
//! bookmakers. When the implied probabilities of those best prices sum below
//! one, staking all of them guarantees a profit of `(1 - sum) * 100` percent.

use super::{ArbitrageOpportunity, DetectError};
use crate::grouping::group_by_event;
use crate::quote::{EventKey, Quote};
use crate::telemetry::{increment_counter, record_latency, CounterMetric, LatencyMetric};
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;
use uuid::Uuid;

/// Find every surebet in `quotes` whose profit is at least `min_profit_pct`.
///
/// A cluster holding a malformed quote is skipped on its own; detection
/// carries on over the remaining clusters.
pub fn detect_surebets(quotes: &[Quote], min_profit_pct: Decimal) -> Vec<ArbitrageOpportunity> {
    let started = Instant::now();
    let clusters = group_by_event(quotes);

    let mut found = Vec::new();
    for (event, cluster) in &clusters {
        match evaluate_cluster(event, cluster, min_profit_pct) {
            Ok(opportunities) => found.extend(opportunities),
            Err(e) => {
                tracing::warn!(event = %event, error = %e, "Skipping malformed event cluster");
                increment_counter(CounterMetric::ClustersSkipped, 1);
            }
        }
    }

    record_latency(LatencyMetric::SurebetDetection, started.elapsed());
    increment_counter(CounterMetric::SurebetsFound, found.len() as u64);
    tracing::debug!(
        clusters = clusters.len(),
        surebets = found.len(),
        "Surebet detection pass complete"
    );
    found
}

/// Best-priced quote per selection, in first-seen selection order.
///
/// Equal prices keep the quote encountered first.
pub fn best_prices<'a>(quotes: &[&'a Quote]) -> Vec<&'a Quote> {
    let mut best: Vec<&'a Quote> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for &quote in quotes {
        match slots.get(quote.selection.as_str()) {
            Some(&slot) => {
                if quote.price > best[slot].price {
                    best[slot] = quote;
                }
            }
            None => {
                slots.insert(quote.selection.as_str(), best.len());
                best.push(quote);
            }
        }
    }
    best
}

fn evaluate_cluster(
    event: &EventKey,
    quotes: &[&Quote],
    min_profit_pct: Decimal,
) -> Result<Vec<ArbitrageOpportunity>, DetectError> {
    if let Some(bad) = quotes.iter().find(|q| q.price <= Decimal::ZERO) {
        return Err(DetectError::NonPositivePrice {
            bookmaker: bad.bookmaker.clone(),
            selection: bad.selection.clone(),
            price: bad.price,
        });
    }

    let mut markets: BTreeMap<&str, Vec<&Quote>> = BTreeMap::new();
    for &quote in quotes {
        markets.entry(quote.market.as_str()).or_default().push(quote);
    }

    let mut opportunities = Vec::new();
    for (market, market_quotes) in markets {
        if let Some(opportunity) = evaluate_market(event, market, &market_quotes, min_profit_pct)? {
            opportunities.push(opportunity);
        }
    }
    Ok(opportunities)
}

fn evaluate_market(
    event: &EventKey,
    market: &str,
    quotes: &[&Quote],
    min_profit_pct: Decimal,
) -> Result<Option<ArbitrageOpportunity>, DetectError> {
    let legs = best_prices(quotes);
    if legs.len() < 2 {
        return Ok(None);
    }

    let mut implied_sum = Decimal::ZERO;
    for leg in &legs {
        implied_sum = leg
            .implied_probability()
            .and_then(|p| implied_sum.checked_add(p))
            .ok_or_else(|| DetectError::Overflow(market.to_string()))?;
    }

    if implied_sum >= Decimal::ONE {
        return Ok(None);
    }

    let profit_pct = (Decimal::ONE - implied_sum) * Decimal::ONE_HUNDRED;
    if profit_pct < min_profit_pct {
        tracing::debug!(
            event = %event,
            market,
            profit_pct = %profit_pct,
            min_profit_pct = %min_profit_pct,
            "Surebet below threshold"
        );
        return Ok(None);
    }

    tracing::info!(
        event = %event,
        market,
        legs = legs.len(),
        implied_sum = %implied_sum,
        profit_pct = %profit_pct,
        "Surebet detected"
    );

    Ok(Some(ArbitrageOpportunity {
        id: Uuid::new_v4(),
        event: event.clone(),
        market: market.to_string(),
        implied_sum,
        profit_pct,
        legs: legs.into_iter().cloned().collect(),
        detected_at: Utc::now(),
    }))
}
