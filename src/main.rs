//! Link-Harvester main entry point
//!
//! This is the command-line interface for the Link-Harvester service.

use clap::Parser;
use link_harvester::api::serve;
use link_harvester::config::load_config_with_hash;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Link-Harvester: an asynchronous link-extraction service
///
/// Link-Harvester accepts URLs over HTTP, fetches their HTML in the
/// background, extracts every anchor href, and stores the result against the
/// submitted record for later retrieval.
#[derive(Parser, Debug)]
#[command(name = "link-harvester")]
#[command(version = "0.1.0")]
#[command(about = "An asynchronous link-extraction service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Starting service on {} with {} workers (config {})",
        config.server.bind_address,
        config.worker.count,
        &config_hash[..8.min(config_hash.len())]
    );

    serve(config).await?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_harvester=info,warn"),
            1 => EnvFilter::new("link_harvester=debug,info"),
            2 => EnvFilter::new("link_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
