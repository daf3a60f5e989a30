//! Run command implementation

use super::output::{print_surebets, print_value_bets};
use super::resolve_sources;
use crate::config::Config;
use crate::scanner::{OddsFilter, Scanner};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON quote files to poll instead of the configured sources
    #[arg(short, long)]
    pub input: Vec<PathBuf>,

    /// Seconds between refresh cycles
    #[arg(long)]
    pub interval: Option<u64>,

    /// Minimum surebet profit in percent
    #[arg(long)]
    pub min_profit: Option<Decimal>,

    /// Minimum value bet expected value in percent
    #[arg(long)]
    pub min_ev: Option<Decimal>,

    /// Only consider quotes for this sport
    #[arg(long)]
    pub sport: Option<String>,

    /// Only consider quotes for this league
    #[arg(long)]
    pub league: Option<String>,

    /// Stop after this many cycles
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Print opportunities after every cycle
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let sources = resolve_sources(config, &self.input)?;
        let scanner = Scanner::from_config(config);

        let period = self.interval.unwrap_or(config.ingest.refresh_interval_secs).max(1);
        let min_profit = self.min_profit.unwrap_or(config.detection.min_profit_pct);
        let min_ev = self.min_ev.unwrap_or(config.detection.min_ev_pct);

        tracing::info!(
            sources = sources.len(),
            interval_secs = period,
            %min_profit,
            %min_ev,
            "Starting scanner loop"
        );

        let filter = OddsFilter {
            sport: self.sport.clone(),
            league: self.league.clone(),
        };

        let mut ticker = tokio::time::interval(Duration::from_secs(period));
        let mut cycle: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, shutting down");
                    break;
                }
            }

            cycle += 1;
            let refresh = scanner.refresh(&sources).await;
            let surebets = scanner.scan_surebets(min_profit, &filter).await?;
            let value_bets = scanner.query_value_bets(min_ev, &filter);

            tracing::info!(
                cycle,
                added = refresh.total.added,
                store_size = scanner.store().len(),
                surebets = surebets.len(),
                value_bets = value_bets.len(),
                "Cycle complete"
            );
            for s in &surebets {
                tracing::info!(
                    event = %s.event,
                    market = %s.market,
                    profit_pct = %s.profit_pct.round_dp(3),
                    bookmakers = ?s.bookmakers(),
                    "Surebet"
                );
            }

            if self.verbose {
                print_surebets(&surebets);
                print_value_bets(&value_bets);
            }

            if self.cycles.is_some_and(|max| cycle >= max) {
                break;
            }
        }

        Ok(())
    }
}
