//! Report rendering for CLI commands

use crate::detector::{ArbitrageOpportunity, ValueOpportunity};
use crate::quote::Quote;
use crate::scanner::RefreshReport;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

/// Stake the table view splits across surebet legs
const DISPLAY_STAKE: Decimal = Decimal::ONE_HUNDRED;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// One JSON document
    Json,
}

#[derive(Serialize)]
struct ScanDocument<'a> {
    refresh: &'a RefreshReport,
    surebets: &'a [ArbitrageOpportunity],
    value_bets: &'a [ValueOpportunity],
}

/// Print a full scan result
pub fn print_scan(
    format: OutputFormat,
    refresh: &RefreshReport,
    surebets: &[ArbitrageOpportunity],
    value_bets: &[ValueOpportunity],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let doc = ScanDocument {
                refresh,
                surebets,
                value_bets,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            print_refresh(refresh);
            println!();
            print_surebets(surebets);
            println!();
            print_value_bets(value_bets);
        }
    }
    Ok(())
}

/// Print a list of canonical quotes
pub fn print_odds(format: OutputFormat, quotes: &[Quote]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(quotes)?),
        OutputFormat::Table => {
            println!(
                "{:<40} {:<28} {:<16} {:<14} {:>8}  {}",
                "Event", "League", "Market", "Selection", "Price", "Bookmaker"
            );
            for q in quotes {
                println!(
                    "{:<40} {:<28} {:<16} {:<14} {:>8}  {}",
                    format!("{} vs {}", q.home_team, q.away_team),
                    q.league,
                    q.market,
                    q.selection,
                    q.price,
                    q.bookmaker
                );
            }
            println!("{} quotes", quotes.len());
        }
    }
    Ok(())
}

pub fn print_refresh(refresh: &RefreshReport) {
    println!("Sources:");
    for s in &refresh.sources {
        println!(
            "  {:<20} {:<30} received={} rejected={} added={}",
            s.source,
            format!("{:?}", s.status),
            s.ingest.received,
            s.ingest.rejected,
            s.ingest.added
        );
    }
    println!(
        "  total: received={} rejected={} added={}",
        refresh.total.received, refresh.total.rejected, refresh.total.added
    );
}

pub fn print_surebets(surebets: &[ArbitrageOpportunity]) {
    println!("Surebets: {}", surebets.len());
    for s in surebets {
        println!(
            "  {} [{}] profit={}% implied_sum={}",
            s.event,
            s.market,
            s.profit_pct.round_dp(3),
            s.implied_sum.round_dp(5)
        );
        let stakes = s.stake_split(DISPLAY_STAKE).unwrap_or_default();
        for (i, leg) in s.legs.iter().enumerate() {
            match stakes.get(i) {
                Some(stake) => println!(
                    "    {:<14} @ {:>7}  {:<16} stake {}/{}",
                    leg.selection,
                    leg.price,
                    leg.bookmaker,
                    stake.round_dp(2),
                    DISPLAY_STAKE
                ),
                None => println!("    {:<14} @ {:>7}  {}", leg.selection, leg.price, leg.bookmaker),
            }
        }
    }
}

pub fn print_value_bets(value_bets: &[ValueOpportunity]) {
    println!("Value bets: {}", value_bets.len());
    for v in value_bets {
        println!(
            "  {} [{}] {:<14} @ {:>7}  {:<16} ev={}%",
            v.quote.event_key(),
            v.quote.market,
            v.quote.selection,
            v.quote.price,
            v.quote.bookmaker,
            v.expected_value_pct.round_dp(2)
        );
    }
}
