//! Scanner service
//!
//! The in-process boundary used by the CLI and any serving or scheduling
//! layer: ingestion into the shared store plus on-demand opportunity
//! queries over store snapshots.

use crate::config::Config;
use crate::detector::{
    detect_surebets, ArbitrageOpportunity, ValueConfig, ValueDetector, ValueOpportunity,
};
use crate::ingest::{collect, SourceStatus};
use crate::normalize::{canonicalize_league, canonicalize_token};
use crate::quote::{Quote, RawQuote};
use crate::source::OddsSource;
use crate::store::CanonicalStore;
use crate::telemetry::{increment_counter, CounterMetric};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Result of ingesting one batch of raw quotes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Raw quotes handed in
    pub received: usize,
    /// Quotes rejected as malformed
    pub rejected: usize,
    /// Quotes that created a new identity key
    pub added: usize,
}

impl IngestReport {
    fn absorb(&mut self, other: IngestReport) {
        self.received += other.received;
        self.rejected += other.rejected;
        self.added += other.added;
    }
}

/// Per-source line of a refresh
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub status: SourceStatus,
    pub ingest: IngestReport,
}

/// Result of one full refresh cycle
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshReport {
    pub sources: Vec<SourceSummary>,
    pub total: IngestReport,
}

/// Optional predicates for [`Scanner::query_odds`]
#[derive(Debug, Clone, Default)]
pub struct OddsFilter {
    pub sport: Option<String>,
    pub league: Option<String>,
}

impl OddsFilter {
    /// Filter on sport only
    pub fn sport(sport: impl Into<String>) -> Self {
        Self {
            sport: Some(sport.into()),
            league: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.sport.is_none() && self.league.is_none()
    }

    /// Canonical form of the predicates, so raw names match stored tokens
    fn canonical(&self) -> (Option<String>, Option<String>) {
        (
            self.sport.as_deref().map(canonicalize_token),
            self.league.as_deref().map(canonicalize_league),
        )
    }
}

/// Ingestion and detection over one shared canonical store
pub struct Scanner {
    store: Arc<CanonicalStore>,
    value_detector: ValueDetector,
    days_ahead: u32,
    source_timeout: Duration,
}

impl Scanner {
    /// Create a scanner over `store` with default settings
    pub fn new(store: Arc<CanonicalStore>) -> Self {
        Self {
            store,
            value_detector: ValueDetector::default(),
            days_ahead: 7,
            source_timeout: Duration::from_secs(20),
        }
    }

    /// Create a scanner and its store from configuration
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(CanonicalStore::new(config.store.merge_policy));
        Self::new(store)
            .with_value_config(config.detection.value_config())
            .with_horizon(config.ingest.days_ahead)
            .with_source_timeout(Duration::from_secs(config.ingest.source_timeout_secs))
    }

    pub fn with_value_config(mut self, config: ValueConfig) -> Self {
        self.value_detector = ValueDetector::new(config);
        self
    }

    /// Days ahead requested from sources on refresh
    pub fn with_horizon(mut self, days_ahead: u32) -> Self {
        self.days_ahead = days_ahead;
        self
    }

    /// Time budget per source on refresh
    pub fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout = timeout;
        self
    }

    /// The shared store
    pub fn store(&self) -> &Arc<CanonicalStore> {
        &self.store
    }

    /// Validate, canonicalize and upsert a batch of raw quotes.
    ///
    /// Malformed quotes are logged and skipped without affecting the rest of
    /// the batch; valid ones are applied atomically.
    pub fn ingest(&self, raw: Vec<RawQuote>) -> IngestReport {
        let now = Utc::now();
        let received = raw.len();
        let mut rejected = 0;
        let mut valid = Vec::with_capacity(received);

        for (position, quote) in raw.into_iter().enumerate() {
            match Quote::from_raw(quote, now) {
                Ok(quote) => valid.push(quote),
                Err(e) => {
                    rejected += 1;
                    tracing::warn!(position, error = %e, "Rejected malformed quote");
                }
            }
        }

        let added = self.store.upsert(valid);

        increment_counter(CounterMetric::QuotesReceived, received as u64);
        increment_counter(CounterMetric::QuotesRejected, rejected as u64);
        increment_counter(CounterMetric::QuotesAdded, added as u64);

        IngestReport {
            received,
            rejected,
            added,
        }
    }

    /// Fetch from every source and ingest each source's batch
    pub async fn refresh(&self, sources: &[Arc<dyn OddsSource>]) -> RefreshReport {
        let batches = collect(sources, self.days_ahead, self.source_timeout).await;

        let mut report = RefreshReport::default();
        for batch in batches {
            let ingest = self.ingest(batch.quotes);
            tracing::info!(
                source = %batch.source,
                received = ingest.received,
                rejected = ingest.rejected,
                added = ingest.added,
                "Source batch ingested"
            );
            report.total.absorb(ingest);
            report.sources.push(SourceSummary {
                source: batch.source,
                status: batch.status,
                ingest,
            });
        }

        tracing::info!(
            sources = report.sources.len(),
            added = report.total.added,
            store_size = self.store.len(),
            "Refresh complete"
        );
        report
    }

    /// Surebets over the current snapshot, restricted by `filter`
    pub fn query_surebets(
        &self,
        min_profit_pct: Decimal,
        filter: &OddsFilter,
    ) -> Vec<ArbitrageOpportunity> {
        detect_surebets(&self.filtered_snapshot(filter), min_profit_pct)
    }

    /// [`query_surebets`](Self::query_surebets) computed on a blocking worker
    pub async fn scan_surebets(
        &self,
        min_profit_pct: Decimal,
        filter: &OddsFilter,
    ) -> anyhow::Result<Vec<ArbitrageOpportunity>> {
        let snapshot = self.filtered_snapshot(filter);
        let found =
            tokio::task::spawn_blocking(move || detect_surebets(&snapshot, min_profit_pct)).await?;
        Ok(found)
    }

    /// Value bets over the current snapshot, restricted by `filter`
    pub fn query_value_bets(&self, min_ev_pct: Decimal, filter: &OddsFilter) -> Vec<ValueOpportunity> {
        self.value_detector
            .detect(&self.filtered_snapshot(filter), min_ev_pct)
    }

    /// Snapshot filtered by optional sport and league
    pub fn query_odds(&self, filter: &OddsFilter) -> Vec<Quote> {
        self.filtered_snapshot(filter)
    }

    fn filtered_snapshot(&self, filter: &OddsFilter) -> Vec<Quote> {
        let snapshot = self.store.snapshot();
        if filter.is_empty() {
            return snapshot;
        }
        let (sport, league) = filter.canonical();
        snapshot
            .into_iter()
            .filter(|q| sport.as_ref().map_or(true, |s| &q.sport == s))
            .filter(|q| league.as_ref().map_or(true, |l| &q.league == l))
            .collect()
    }
}
