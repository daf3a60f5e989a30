//! Prometheus metrics

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// One source's fetch, successful or not
    SourceFetch,
    /// Full surebet detection pass
    SurebetDetection,
    /// Full value bet detection pass
    ValueDetection,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Distinct identity keys held by the store
    StoreSize,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Raw quotes handed to ingestion
    QuotesReceived,
    /// Quotes that created a new identity key
    QuotesAdded,
    /// Quotes rejected as malformed
    QuotesRejected,
    /// Sources that returned an error
    SourceFailures,
    /// Sources that exceeded their time budget
    SourceTimeouts,
    /// Event clusters skipped by detection
    ClustersSkipped,
    /// Surebets emitted
    SurebetsFound,
    /// Value bets emitted
    ValueBetsFound,
}

/// Record a latency measurement in milliseconds
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::SourceFetch => "betscanner_source_fetch_latency_ms",
        LatencyMetric::SurebetDetection => "betscanner_surebet_detection_latency_ms",
        LatencyMetric::ValueDetection => "betscanner_value_detection_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::StoreSize => "betscanner_store_quotes",
    };

    metrics::gauge!(metric_name).set(value);
}

/// Add to a counter
pub fn increment_counter(metric: CounterMetric, value: u64) {
    let metric_name = match metric {
        CounterMetric::QuotesReceived => "betscanner_quotes_received_total",
        CounterMetric::QuotesAdded => "betscanner_quotes_added_total",
        CounterMetric::QuotesRejected => "betscanner_quotes_rejected_total",
        CounterMetric::SourceFailures => "betscanner_source_failures_total",
        CounterMetric::SourceTimeouts => "betscanner_source_timeouts_total",
        CounterMetric::ClustersSkipped => "betscanner_clusters_skipped_total",
        CounterMetric::SurebetsFound => "betscanner_surebets_found_total",
        CounterMetric::ValueBetsFound => "betscanner_valuebets_found_total",
    };

    metrics::counter!(metric_name).increment(value);
}
