// CLI Configuration - Convert CLI args to a validated query
// Principle: Reject bad selectors before any resolver runs

use crate::cli::Commands;
use appconsts::{AppVersion, ConstantsError, Parameter};
use tracing::debug;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// Pretty-printed JSON
    Json,
}

/// What to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Every known version
    List,
    /// One version's constant set
    Show(AppVersion),
    /// One parameter of one version
    Get(AppVersion, Parameter),
}

/// Complete query configuration derived from CLI arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    pub query: Query,
    pub format: OutputFormat,
}

impl QueryConfig {
    /// Create configuration from a parsed command
    pub fn from_command(command: &Commands) -> Result<Self, ConfigError> {
        let (query, format) = match command {
            Commands::List(cmd) => (Query::List, &cmd.format),
            Commands::Show(cmd) => (Query::Show(Self::parse_version(&cmd.version)?), &cmd.format),
            Commands::Get(cmd) => {
                let version = Self::parse_version(&cmd.version)?;
                let parameter = cmd
                    .parameter
                    .parse::<Parameter>()
                    .map_err(|_| ConfigError::InvalidParameter(cmd.parameter.clone()))?;
                (Query::Get(version, parameter), &cmd.format)
            }
        };

        let config = Self {
            query,
            format: Self::parse_format(format)?,
        };
        debug!("Query configuration: {:?}", config);
        Ok(config)
    }

    fn parse_version(selector: &str) -> Result<AppVersion, ConfigError> {
        selector.parse::<AppVersion>().map_err(|e| match e {
            ConstantsError::UnknownVersion { version } => ConfigError::UnknownVersion(version),
            _ => ConfigError::InvalidVersion(selector.to_string()),
        })
    }

    fn parse_format(format: &str) -> Result<OutputFormat, ConfigError> {
        match format {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(format.to_string())),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown protocol version: {0}")]
    UnknownVersion(u64),

    #[error("Invalid version selector: {0}")]
    InvalidVersion(String),

    #[error("Unknown parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid output format: {0}")]
    InvalidFormat(String),
}
