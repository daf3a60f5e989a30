//! Ingestion coordinator
//!
//! Runs every source concurrently under its own time budget. A source that
//! errors, panics or times out contributes zero quotes for the cycle and
//! never holds up the others.

use crate::quote::RawQuote;
use crate::source::OddsSource;
use crate::telemetry::{increment_counter, record_latency, CounterMetric, LatencyMetric};
use futures_util::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of one source's fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SourceStatus {
    /// Fetched this many quotes
    Ok(usize),
    /// The source returned an error or its task failed
    Failed(String),
    /// The source exceeded its time budget
    TimedOut,
}

/// Quotes contributed by one source in one cycle
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub source: String,
    pub status: SourceStatus,
    pub quotes: Vec<RawQuote>,
    pub elapsed: Duration,
}

impl SourceBatch {
    fn empty(source: &str, status: SourceStatus, elapsed: Duration) -> Self {
        Self {
            source: source.to_string(),
            status,
            quotes: Vec::new(),
            elapsed,
        }
    }
}

/// Fetch from every source in parallel, one batch per source in input order
pub async fn collect(
    sources: &[Arc<dyn OddsSource>],
    days_ahead: u32,
    timeout: Duration,
) -> Vec<SourceBatch> {
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = Arc::clone(source);
            tokio::spawn(async move { fetch_one(source, days_ahead, timeout).await })
        })
        .collect();

    join_all(handles)
        .await
        .into_iter()
        .zip(sources)
        .map(|(joined, source)| {
            joined.unwrap_or_else(|e| {
                tracing::warn!(source = source.name(), error = %e, "Source task failed");
                increment_counter(CounterMetric::SourceFailures, 1);
                SourceBatch::empty(
                    source.name(),
                    SourceStatus::Failed(format!("task failed: {e}")),
                    Duration::ZERO,
                )
            })
        })
        .collect()
}

async fn fetch_one(source: Arc<dyn OddsSource>, days_ahead: u32, timeout: Duration) -> SourceBatch {
    let name = source.name().to_string();
    let started = Instant::now();
    let result = tokio::time::timeout(timeout, source.fetch_upcoming(days_ahead)).await;
    let elapsed = started.elapsed();
    record_latency(LatencyMetric::SourceFetch, elapsed);

    match result {
        Ok(Ok(quotes)) => {
            tracing::info!(
                source = %name,
                quotes = quotes.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Source fetched"
            );
            SourceBatch {
                source: name,
                status: SourceStatus::Ok(quotes.len()),
                quotes,
                elapsed,
            }
        }
        Ok(Err(e)) => {
            tracing::warn!(source = %name, error = %e, "Source failed, contributing no quotes");
            increment_counter(CounterMetric::SourceFailures, 1);
            SourceBatch::empty(&name, SourceStatus::Failed(format!("{e:#}")), elapsed)
        }
        Err(_) => {
            tracing::warn!(
                source = %name,
                timeout_ms = timeout.as_millis() as u64,
                "Source timed out, contributing no quotes"
            );
            increment_counter(CounterMetric::SourceTimeouts, 1);
            SourceBatch::empty(&name, SourceStatus::TimedOut, elapsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSource;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl OddsSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_upcoming(&self, _days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
            anyhow::bail!("connection reset")
        }
    }

    struct HangingSource;

    #[async_trait]
    impl OddsSource for HangingSource {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn fetch_upcoming(&self, _days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec![RawQuote::default()])
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl OddsSource for PanickingSource {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn fetch_upcoming(&self, _days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
            panic!("adapter bug")
        }
    }

    #[tokio::test]
    async fn test_failures_degrade_to_empty_batches() {
        let sources: Vec<Arc<dyn OddsSource>> = vec![
            Arc::new(FailingSource),
            Arc::new(MockSource::new("mockbook")),
            Arc::new(HangingSource),
            Arc::new(PanickingSource),
        ];

        let batches = collect(&sources, 2, Duration::from_millis(100)).await;
        assert_eq!(batches.len(), 4);

        assert!(matches!(batches[0].status, SourceStatus::Failed(ref m) if m.contains("connection reset")));
        assert!(batches[0].quotes.is_empty());

        assert_eq!(batches[1].source, "mockbook");
        assert_eq!(batches[1].status, SourceStatus::Ok(8));
        assert_eq!(batches[1].quotes.len(), 8);

        assert_eq!(batches[2].status, SourceStatus::TimedOut);
        assert!(batches[2].quotes.is_empty());

        assert_eq!(batches[3].source, "panicking");
        assert!(matches!(batches[3].status, SourceStatus::Failed(_)));
    }

    #[tokio::test]
    async fn test_no_sources() {
        assert!(collect(&[], 7, Duration::from_secs(1)).await.is_empty());
    }
}
