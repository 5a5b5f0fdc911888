// appconsts - Entry point
// Principle: Print what the build declares, nothing more

mod cli;

use clap::Parser;
use cli::config::QueryConfig;
use cli::runner::run_query;
use cli::Cli;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_filter = if cli.verbose {
        "debug"
    } else {
        cli.log_level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("appconsts {}", env!("CARGO_PKG_VERSION"));

    let config = QueryConfig::from_command(&cli.command).map_err(|e| {
        error!("Configuration error: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let output = run_query(&config).map_err(|e| {
        error!("{}", e);
        anyhow::anyhow!(e)
    })?;

    println!("{}", output);
    Ok(())
}
