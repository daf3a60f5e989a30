//! Odds source module
//!
//! Adapters that produce raw, not yet canonicalized quotes. The scanner only
//! depends on the [`OddsSource`] trait.

mod file;
mod http;
mod mock;

pub use file::JsonFileSource;
pub use http::HttpFeedSource;
pub use mock::MockSource;

use crate::config::SourcesConfig;
use crate::quote::RawQuote;
use crate::telemetry::{increment_counter, CounterMetric};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Trait for odds source implementations
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Source name, used as the bookmaker when quotes omit one
    fn name(&self) -> &str;
    /// Fetch quotes for fixtures starting within `days_ahead` days
    async fn fetch_upcoming(&self, days_ahead: u32) -> anyhow::Result<Vec<RawQuote>>;
}

/// Build every source named in configuration, mocks first
pub fn build_sources(config: &SourcesConfig) -> anyhow::Result<Vec<Arc<dyn OddsSource>>> {
    let mut sources: Vec<Arc<dyn OddsSource>> = Vec::new();

    for book in &config.mock {
        sources.push(Arc::new(
            MockSource::new(book.name.clone()).with_price_offset(book.price_offset),
        ));
    }

    for path in &config.json_files {
        sources.push(Arc::new(JsonFileSource::new(path.clone())));
    }

    for feed in &config.http_feeds {
        let source = match feed.timeout_secs {
            Some(secs) => HttpFeedSource::with_timeout(
                feed.name.clone(),
                feed.url.clone(),
                std::time::Duration::from_secs(secs),
            )?,
            None => HttpFeedSource::new(feed.name.clone(), feed.url.clone())?,
        };
        sources.push(Arc::new(source));
    }

    tracing::debug!(count = sources.len(), "Odds sources configured");
    Ok(sources)
}

/// Whether a quote's fixture starts within the horizon. Undated quotes pass,
/// and so does everything when the horizon lies beyond the representable range.
pub fn within_horizon(quote: &RawQuote, now: DateTime<Utc>, days_ahead: u32) -> bool {
    let Some(limit) = now.checked_add_signed(Duration::days(i64::from(days_ahead))) else {
        return true;
    };
    quote.start_time.map_or(true, |start| start <= limit)
}

/// Decode a JSON array payload record by record.
///
/// A record that does not fit [`RawQuote`] is logged and skipped; the rest of
/// the payload is kept.
pub(crate) fn decode_records(records: Vec<serde_json::Value>, source: &str) -> Vec<RawQuote> {
    let mut quotes = Vec::with_capacity(records.len());
    let mut skipped: u64 = 0;

    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<RawQuote>(record) {
            Ok(quote) => quotes.push(quote),
            Err(e) => {
                skipped += 1;
                tracing::warn!(source, position, error = %e, "Skipping undecodable quote record");
            }
        }
    }

    if skipped > 0 {
        increment_counter(CounterMetric::QuotesRejected, skipped);
    }
    quotes
}

/// Drop quotes beyond the horizon and attribute unlabeled ones to `source`
pub(crate) fn prepare(quotes: Vec<RawQuote>, source: &str, days_ahead: u32) -> Vec<RawQuote> {
    let now = Utc::now();
    quotes
        .into_iter()
        .filter(|q| within_horizon(q, now, days_ahead))
        .map(|mut q| {
            if q.bookmaker.as_deref().map_or(true, |b| b.trim().is_empty()) {
                q.bookmaker = Some(source.to_string());
            }
            q
        })
        .collect()
}
