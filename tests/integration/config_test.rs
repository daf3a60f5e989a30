//! Configuration integration tests

use bet_scanner::config::Config;
use bet_scanner::scanner::{OddsFilter, Scanner};
use bet_scanner::source::build_sources;
use bet_scanner::store::MergePolicy;
use rust_decimal_macros::dec;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.store.merge_policy, MergePolicy::Highest);
    assert_eq!(config.ingest.days_ahead, 7);
    assert_eq!(config.detection.min_profit_pct, dec!(0.5));
    assert_eq!(config.sources.mock.len(), 2);
    assert!(config.telemetry.metrics_port.is_none());
}

#[tokio::test]
async fn test_config_example_finds_cross_book_surebets() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    let sources = build_sources(&config.sources).unwrap();
    let scanner = Scanner::from_config(&config).with_horizon(2);

    let report = scanner.refresh(&sources).await;
    // 2 books * 2 days * 2 matches * 2 selections
    assert_eq!(report.total.added, 16);

    let surebets = scanner
        .scan_surebets(config.detection.min_profit_pct, &OddsFilter::default())
        .await
        .unwrap();
    assert_eq!(surebets.len(), 4);
    assert!(surebets.iter().all(|s| s.profit_pct > dec!(0.5)));
}
