use bet_scanner::cli::{Cli, Commands};
use bet_scanner::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    bet_scanner::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Scan(args) => {
            tracing::info!("Running one-shot scan");
            args.execute(&config).await?;
        }
        Commands::Run(args) => {
            tracing::info!("Starting continuous scan");
            args.execute(&config).await?;
        }
        Commands::Odds(args) => {
            args.execute(&config).await?;
        }
        Commands::Normalize(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Store: merge_policy={:?}", config.store.merge_policy);
            println!(
                "  Ingest: days_ahead={}, source_timeout={}s, refresh_interval={}s",
                config.ingest.days_ahead,
                config.ingest.source_timeout_secs,
                config.ingest.refresh_interval_secs
            );
            println!(
                "  Detection: min_profit={}%, min_ev={}%, reference_probability={}, value_min_price={}",
                config.detection.min_profit_pct,
                config.detection.min_ev_pct,
                config.detection.reference_probability,
                config.detection.value_min_price
            );
            for book in &config.sources.mock {
                println!("  Mock source: {} (offset {})", book.name, book.price_offset);
            }
            for path in &config.sources.json_files {
                println!("  File source: {}", path.display());
            }
            for feed in &config.sources.http_feeds {
                println!("  HTTP source: {} {}", feed.name, feed.url);
            }
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level, config.telemetry.log_format, config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
