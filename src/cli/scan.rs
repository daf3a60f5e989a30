//! Scan command implementation

use super::output::{print_scan, OutputFormat};
use super::resolve_sources;
use crate::config::Config;
use crate::scanner::{OddsFilter, Scanner};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// JSON quote files to scan instead of the configured sources
    #[arg(short, long)]
    pub input: Vec<PathBuf>,

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

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ScanArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let sources = resolve_sources(config, &self.input)?;
        let scanner = Scanner::from_config(config);

        let refresh = scanner.refresh(&sources).await;

        let min_profit = self.min_profit.unwrap_or(config.detection.min_profit_pct);
        let min_ev = self.min_ev.unwrap_or(config.detection.min_ev_pct);
        let filter = OddsFilter {
            sport: self.sport.clone(),
            league: self.league.clone(),
        };
        let surebets = scanner.scan_surebets(min_profit, &filter).await?;
        let value_bets = scanner.query_value_bets(min_ev, &filter);

        tracing::info!(
            surebets = surebets.len(),
            value_bets = value_bets.len(),
            %min_profit,
            %min_ev,
            "Scan complete"
        );

        print_scan(self.format, &refresh, &surebets, &value_bets)
    }
}
