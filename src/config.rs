//! Configuration types for bet-scanner

use crate::detector::ValueConfig;
use crate::store::MergePolicy;
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Canonical store configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Which quote survives when an identity key repeats
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

/// Ingestion cycle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Fixture horizon requested from sources
    #[serde(default = "default_days_ahead")]
    pub days_ahead: u32,

    /// Time budget per source per cycle
    #[serde(default = "default_source_timeout_secs")]
    pub source_timeout_secs: u64,

    /// Delay between refresh cycles in `run` mode
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_days_ahead() -> u32 {
    7
}
fn default_source_timeout_secs() -> u64 {
    20
}
fn default_refresh_interval_secs() -> u64 {
    60
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            days_ahead: 7,
            source_timeout_secs: 20,
            refresh_interval_secs: 60,
        }
    }
}

/// Opportunity detection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Minimum surebet profit, in percent
    #[serde(default = "default_min_profit_pct")]
    pub min_profit_pct: Decimal,

    /// Minimum value bet expected value, in percent
    #[serde(default = "default_min_ev_pct")]
    pub min_ev_pct: Decimal,

    /// Fair probability assumed by the value heuristic
    #[serde(default = "default_reference_probability")]
    pub reference_probability: Decimal,

    /// Quotes priced below this are never value bets
    #[serde(default = "default_value_min_price")]
    pub value_min_price: Decimal,
}

fn default_min_profit_pct() -> Decimal {
    Decimal::new(5, 1) // 0.5%
}
fn default_min_ev_pct() -> Decimal {
    Decimal::new(2, 0) // 2%
}
fn default_reference_probability() -> Decimal {
    Decimal::new(5, 1) // 0.5
}
fn default_value_min_price() -> Decimal {
    Decimal::new(2, 0)
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_profit_pct: Decimal::new(5, 1),
            min_ev_pct: Decimal::new(2, 0),
            reference_probability: Decimal::new(5, 1),
            value_min_price: Decimal::new(2, 0),
        }
    }
}

impl DetectionConfig {
    /// Parameters for the value detector
    pub fn value_config(&self) -> ValueConfig {
        ValueConfig {
            reference_probability: self.reference_probability,
            min_price: self.value_min_price,
        }
    }
}

/// Which odds sources to poll
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Deterministic demo bookmakers
    #[serde(default)]
    pub mock: Vec<MockBookConfig>,

    /// JSON files of captured raw quotes
    #[serde(default)]
    pub json_files: Vec<PathBuf>,

    /// HTTP endpoints serving JSON arrays of raw quotes
    #[serde(default)]
    pub http_feeds: Vec<HttpFeedConfig>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            mock: vec![MockBookConfig {
                name: "mockbook".to_string(),
                price_offset: Decimal::ZERO,
            }],
            json_files: vec![],
            http_feeds: vec![],
        }
    }
}

/// A demo bookmaker
#[derive(Debug, Clone, Deserialize)]
pub struct MockBookConfig {
    pub name: String,
    #[serde(default)]
    pub price_offset: Decimal,
}

/// An HTTP odds feed
#[derive(Debug, Clone, Deserialize)]
pub struct HttpFeedConfig {
    pub name: String,
    pub url: String,
    /// Request timeout; the source default applies when absent
    pub timeout_secs: Option<u64>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus exporter port; no exporter when absent
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [store]
            merge_policy = "latest"

            [ingest]
            days_ahead = 3
            source_timeout_secs = 10
            refresh_interval_secs = 30

            [detection]
            min_profit_pct = 0.1
            min_ev_pct = 5.0
            reference_probability = 0.45
            value_min_price = 2.5

            [sources]
            json_files = ["./captures/kto.json"]

            [[sources.mock]]
            name = "book_a"

            [[sources.mock]]
            name = "book_b"
            price_offset = 0.15

            [[sources.http_feeds]]
            name = "feed"
            url = "http://localhost:8080/odds"
            timeout_secs = 5

            [telemetry]
            log_level = "debug"
            log_format = "json"
            metrics_port = 9100
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.store.merge_policy, MergePolicy::Latest);
        assert_eq!(config.ingest.days_ahead, 3);
        assert_eq!(config.detection.min_profit_pct, dec!(0.1));
        assert_eq!(config.detection.reference_probability, dec!(0.45));
        assert_eq!(config.sources.mock.len(), 2);
        assert_eq!(config.sources.mock[1].price_offset, dec!(0.15));
        assert_eq!(config.sources.json_files.len(), 1);
        assert_eq!(config.sources.http_feeds[0].timeout_secs, Some(5));
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.telemetry.metrics_port, Some(9100));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.store.merge_policy, MergePolicy::Highest);
        assert_eq!(config.ingest.days_ahead, 7);
        assert_eq!(config.ingest.source_timeout_secs, 20);
        assert_eq!(config.detection.min_profit_pct, dec!(0.5));
        assert_eq!(config.detection.min_ev_pct, dec!(2));
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.telemetry.metrics_port.is_none());
        assert_eq!(config.sources.mock.len(), 1);
    }

    #[test]
    fn test_sources_section_without_mocks_has_none() {
        let toml = r#"
            [sources]
            json_files = ["./captures/kto.json"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.sources.mock.is_empty());
        assert_eq!(config.sources.json_files.len(), 1);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let toml = r#"
            [detection]
            min_profit_pct = 1.5
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.detection.min_profit_pct, dec!(1.5));
        assert_eq!(config.detection.min_ev_pct, dec!(2));
        assert_eq!(config.detection.value_min_price, dec!(2));
    }

    #[test]
    fn test_default_config_has_demo_book() {
        let config = Config::default();
        assert_eq!(config.sources.mock.len(), 1);
        assert_eq!(config.sources.mock[0].name, "mockbook");
    }

    #[test]
    fn test_value_config() {
        let detection = DetectionConfig::default();
        let value = detection.value_config();
        assert_eq!(value.reference_probability, dec!(0.5));
        assert_eq!(value.min_price, dec!(2));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ingest]\ndays_ahead = 2\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ingest.days_ahead, 2);
    }

    #[test]
    fn test_unknown_merge_policy_rejected() {
        let toml = r#"
            [store]
            merge_policy = "lowest"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }
}
