//! Pipeline integration tests: canonicalize, store, group, detect

use bet_scanner::detector::{detect_surebets, detect_value_bets};
use bet_scanner::grouping::group_by_event;
use bet_scanner::normalize::{
    canonicalize_league, canonicalize_market, canonicalize_selection, canonicalize_team,
};
use bet_scanner::quote::{Quote, RawPrice, RawQuote};
use bet_scanner::scanner::{IngestReport, OddsFilter, Scanner};
use bet_scanner::store::{CanonicalStore, MergePolicy};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn kickoff(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 11, 1, hour, 0, 0).unwrap()
}

fn raw(selection: &str, price: f64, bookmaker: &str) -> RawQuote {
    RawQuote {
        home_team: Some("Grêmio".to_string()),
        away_team: Some("Internacional".to_string()),
        league: Some("Brasileirão Série A".to_string()),
        market: Some("1X2".to_string()),
        selection: Some(selection.to_string()),
        price: Some(RawPrice::Number(price)),
        bookmaker: Some(bookmaker.to_string()),
        start_time: Some(kickoff(19)),
        ..Default::default()
    }
}

fn quote(selection: &str, price: f64, bookmaker: &str) -> Quote {
    Quote::from_raw(raw(selection, price, bookmaker), Utc::now()).unwrap()
}

#[test]
fn test_canonicalization_is_idempotent() {
    let inputs = [
        "Grêmio FBPA",
        "SC Internacional",
        "Atlético-MG",
        "Premier League",
        "Over/Under 2.5",
        "Mais de 2,5",
        "Home (-1.5)",
        "Empate",
        "",
    ];
    let canonicalizers: [fn(&str) -> String; 4] = [
        canonicalize_team,
        canonicalize_league,
        canonicalize_market,
        canonicalize_selection,
    ];

    for canonicalize in canonicalizers {
        for input in inputs {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once, "not idempotent for {input:?}");
        }
    }
}

#[test]
fn test_same_quote_twice_is_stored_once() {
    let store = CanonicalStore::default();
    assert_eq!(store.upsert([quote("home", 2.1, "kto")]), 1);
    assert_eq!(store.upsert([quote("home", 2.1, "kto")]), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_highest_policy_keeps_best_price() {
    let store = CanonicalStore::new(MergePolicy::Highest);
    store.upsert([quote("home", 1.8, "kto")]);
    store.upsert([quote("home", 2.0, "kto")]);
    store.upsert([quote("home", 1.9, "kto")]);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].price, dec!(2.0));
}

#[test]
fn test_surebet_across_three_bookmakers() {
    let quotes = vec![
        quote("home", 2.10, "X"),
        quote("draw", 3.80, "Y"),
        quote("away", 4.20, "Z"),
    ];

    let surebets = detect_surebets(&quotes, dec!(0));
    assert_eq!(surebets.len(), 1);

    let surebet = &surebets[0];
    // 1/2.10 + 1/3.80 + 1/4.20
    assert!((surebet.implied_sum - dec!(0.97744)).abs() < dec!(0.00001));
    assert!((surebet.profit_pct - dec!(2.2556)).abs() < dec!(0.001));
    assert_eq!(surebet.bookmakers(), vec!["x", "y", "z"]);

    let stakes = surebet.stake_split(dec!(100)).unwrap();
    let payout = surebet.guaranteed_return(dec!(100)).unwrap();
    for (stake, leg) in stakes.iter().zip(&surebet.legs) {
        assert!((stake * leg.price - payout).abs() < dec!(0.0001));
    }
}

#[test]
fn test_overround_market_is_not_a_surebet() {
    let quotes = vec![
        quote("home", 1.80, "X"),
        quote("draw", 3.00, "Y"),
        quote("away", 3.50, "Z"),
    ];
    assert!(detect_surebets(&quotes, dec!(0)).is_empty());
}

#[test]
fn test_profit_threshold() {
    // 2 / 2.001 leaves a profit just under 0.05%
    let quotes = vec![quote("home", 2.001, "X"), quote("away", 2.001, "Y")];

    assert!(detect_surebets(&quotes, dec!(0.1)).is_empty());
    let included = detect_surebets(&quotes, dec!(0.01));
    assert_eq!(included.len(), 1);
    assert!((included[0].profit_pct - dec!(0.05)).abs() < dec!(0.001));
}

#[test]
fn test_different_kickoffs_never_combine() {
    let mut late_away = raw("away", 4.20, "Z");
    late_away.start_time = Some(kickoff(21));
    let quotes = vec![
        quote("home", 2.10, "X"),
        quote("draw", 3.80, "Y"),
        quote("away", 1.50, "Z"),
        Quote::from_raw(late_away, Utc::now()).unwrap(),
    ];

    let clusters = group_by_event(&quotes);
    assert_eq!(clusters.len(), 2);
    assert!(detect_surebets(&quotes, dec!(0)).is_empty());
}

#[test]
fn test_malformed_quote_never_surfaces() {
    let scanner = Scanner::new(Arc::new(CanonicalStore::default()));
    let mut batch: Vec<RawQuote> = (1..=9)
        .map(|i| raw("home", 1.5, &format!("book{i}")))
        .collect();
    let mut bad = raw("away", 0.0, "badbook");
    bad.home_team = Some("Juventude".to_string());
    batch.insert(3, bad);

    let report = scanner.ingest(batch);
    assert_eq!(
        report,
        IngestReport {
            received: 10,
            rejected: 1,
            added: 9
        }
    );

    let odds = scanner.query_odds(&OddsFilter::default());
    assert_eq!(odds.len(), 9);
    assert!(odds.iter().all(|q| q.bookmaker != "badbook"));
    let all = OddsFilter::default();
    assert!(scanner.query_surebets(dec!(-100), &all).is_empty());
    assert!(scanner.query_value_bets(dec!(-100), &all).is_empty());
}

#[test]
fn test_value_bets_use_reference_probability() {
    let quotes = vec![
        quote("home", 2.50, "X"),
        quote("draw", 3.80, "Y"),
        quote("away", 1.90, "Z"),
    ];

    let found = detect_value_bets(&quotes, dec!(2));
    let selections: Vec<&str> = found.iter().map(|v| v.quote.selection.as_str()).collect();
    assert_eq!(selections, vec!["home", "draw"]);

    // 0.5 - 1/2.5
    assert_eq!(found[0].expected_value_pct.round_dp(4), dec!(10));
    assert!(found.iter().all(|v| v.expected_value_pct > Decimal::ZERO));
}
