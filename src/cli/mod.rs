// CLI - Inspect the constants compiled into this build
// Principle: Read-only. The CLI resolves, it never configures.

pub mod config;
pub mod runner;

use clap::{Parser, Subcommand};

/// appconsts - Versioned consensus constants
#[derive(Parser, Debug)]
#[command(name = "appconsts")]
#[command(author = "Appconsts Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the consensus constants declared for each protocol version")]
#[command(long_about = r#"
Every protocol version carries its own immutable set of consensus constants.
Versions are resolved by exact match; an undeclared version is an error.

List every known version:
  appconsts list

Show one version's constants:
  appconsts show v2

Resolve a single parameter:
  appconsts get 1 square-size-upper-bound
  appconsts get latest global-min-gas-price --format json
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", env = "APPCONSTS_LOG")]
    pub log_level: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every known version
    List(ListCmd),

    /// Show the constant set of one version
    Show(ShowCmd),

    /// Resolve one parameter for one version
    Get(GetCmd),
}

/// List known versions
#[derive(Parser, Debug)]
pub struct ListCmd {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Show a version's constant set
#[derive(Parser, Debug)]
pub struct ShowCmd {
    /// Protocol version (1, v2, testground, latest)
    pub version: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Resolve a single parameter
#[derive(Parser, Debug)]
pub struct GetCmd {
    /// Protocol version (1, v2, testground, latest)
    pub version: String,

    /// Parameter name (subtree-root-threshold, square-size-upper-bound, global-min-gas-price)
    pub parameter: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}
