//! Odds command implementation

use super::output::{print_odds, OutputFormat};
use super::resolve_sources;
use crate::config::Config;
use crate::scanner::{OddsFilter, Scanner};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OddsArgs {
    /// Only quotes for this sport
    #[arg(long)]
    pub sport: Option<String>,

    /// Only quotes for this league
    #[arg(long)]
    pub league: Option<String>,

    /// JSON quote files to read instead of the configured sources
    #[arg(short, long)]
    pub input: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl OddsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let sources = resolve_sources(config, &self.input)?;
        let scanner = Scanner::from_config(config);
        scanner.refresh(&sources).await;

        let filter = OddsFilter {
            sport: self.sport.clone(),
            league: self.league.clone(),
        };
        let quotes = scanner.query_odds(&filter);
        print_odds(self.format, &quotes)
    }
}
