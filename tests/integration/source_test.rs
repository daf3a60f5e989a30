//! Source isolation integration tests

use async_trait::async_trait;
use bet_scanner::quote::RawQuote;
use bet_scanner::scanner::{OddsFilter, Scanner};
use bet_scanner::source::{JsonFileSource, MockSource, OddsSource};
use bet_scanner::store::CanonicalStore;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

struct BrokenSource;

#[async_trait]
impl OddsSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    async fn fetch_upcoming(&self, _days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
        anyhow::bail!("HTTP 503")
    }
}

struct SlowSource;

#[async_trait]
impl OddsSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch_upcoming(&self, _days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
        tokio::time::sleep(Duration::from_secs(600)).await;
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_failing_and_hanging_sources_do_not_block_others() {
    let scanner = Scanner::new(Arc::new(CanonicalStore::default()))
        .with_horizon(1)
        .with_source_timeout(Duration::from_millis(200));

    let sources: Vec<Arc<dyn OddsSource>> = vec![
        Arc::new(BrokenSource),
        Arc::new(SlowSource),
        Arc::new(MockSource::new("mockbook")),
    ];

    let report = scanner.refresh(&sources).await;
    assert_eq!(report.sources.len(), 3);
    assert_eq!(report.total.added, 4);
    assert_eq!(scanner.store().len(), 4);
    assert!(scanner
        .store()
        .snapshot()
        .iter()
        .all(|q| q.bookmaker == "mockbook"));
}

#[tokio::test]
async fn test_file_capture_with_mixed_vocabulary() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"home_team": "Flamengo RJ", "away_team": "Vasco da Gama", "league": "Brasileirão",
              "market": "Resultado Final", "selection": "Casa", "price": 2.10, "bookmaker": "Betano"}},
            {{"home_team": "CR Flamengo", "away_team": "Vasco da Gama", "league": "Brasileirao",
              "market": "1X2", "selection": "Empate", "odds": "3,80", "bookmaker": "KTO"}},
            {{"home_team": "Flamengo", "away_team": "Vasco da Gama", "league": "brasileirao",
              "market": "1x2", "selection": "2", "price": 4.20, "bookmaker": "Stake"}},
            {{"home_team": "Flamengo", "away_team": "Vasco da Gama", "league": "brasileirao",
              "market": "1x2", "selection": "2", "price": "n/a", "bookmaker": "Stake"}}
        ]"#
    )
    .unwrap();

    let scanner = Scanner::new(Arc::new(CanonicalStore::default()));
    let sources: Vec<Arc<dyn OddsSource>> = vec![Arc::new(JsonFileSource::new(file.path()))];

    let report = scanner.refresh(&sources).await;
    assert_eq!(report.total.received, 4);
    assert_eq!(report.total.rejected, 1);
    assert_eq!(report.total.added, 3);

    let surebets = scanner.query_surebets(rust_decimal_macros::dec!(1), &OddsFilter::default());
    assert_eq!(surebets.len(), 1);
    assert_eq!(surebets[0].market, "1x2");
    assert_eq!(surebets[0].bookmakers(), vec!["betano", "kto", "stake"]);
}
