//! CLI interface for bet-scanner
//!
//! Provides subcommands for:
//! - `scan`: One-shot refresh and opportunity report
//! - `run`: Periodic refresh and detection until interrupted
//! - `odds`: List canonical quotes
//! - `normalize`: Show the canonical form of a raw string
//! - `config`: Show configuration

mod normalize;
mod odds;
mod output;
mod run;
mod scan;

pub use normalize::{NormalizeArgs, NormalizeKind};
pub use odds::OddsArgs;
pub use output::OutputFormat;
pub use run::RunArgs;
pub use scan::ScanArgs;

use crate::config::Config;
use crate::source::{build_sources, JsonFileSource, OddsSource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "bet-scanner")]
#[command(about = "Cross-bookmaker odds scanner for surebets and value bets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refresh once and report opportunities
    Scan(ScanArgs),
    /// Refresh and detect periodically until Ctrl-C
    Run(RunArgs),
    /// List canonical quotes
    Odds(OddsArgs),
    /// Show the canonical form of a raw string
    Normalize(NormalizeArgs),
    /// Show configuration
    Config,
}

/// Explicit input files replace the configured sources
fn resolve_sources(config: &Config, inputs: &[PathBuf]) -> anyhow::Result<Vec<Arc<dyn OddsSource>>> {
    if inputs.is_empty() {
        return build_sources(&config.sources);
    }
    Ok(inputs
        .iter()
        .map(|path| Arc::new(JsonFileSource::new(path.clone())) as Arc<dyn OddsSource>)
        .collect())
}
