// Runner - Resolve a query and render the result
// Principle: Rendering is separate from printing so output can be tested

use crate::cli::config::{OutputFormat, Query, QueryConfig};
use appconsts::{constant_sets, global_min_gas_price, AppVersion, ConstantSet, ConstantsError, Parameter};
use serde_json::json;
use tracing::info;

/// Run a query and return the rendered output
pub fn run_query(config: &QueryConfig) -> Result<String, RunnerError> {
    match config.query {
        Query::List => {
            info!("Listing {} known versions", AppVersion::ALL.len());
            render_list(config.format)
        }
        Query::Show(version) => {
            info!("Showing constants for {}", version);
            render_show(version, config.format)
        }
        Query::Get(version, parameter) => {
            info!("Resolving {} for {}", parameter, version);
            let value = parameter.resolve(version)?;
            match config.format {
                OutputFormat::Text => Ok(value.to_string()),
                OutputFormat::Json => to_json(&json!({
                    "version": version.as_u64(),
                    "parameter": parameter,
                    "value": value,
                })),
            }
        }
    }
}

fn render_list(format: OutputFormat) -> Result<String, RunnerError> {
    match format {
        OutputFormat::Json => to_json(&constant_sets().collect::<Vec<_>>()),
        OutputFormat::Text => {
            let mut out = format!(
                "{:<18} {:<11} {:<23} {:<24} {}",
                "VERSION",
                "PRODUCTION",
                "SUBTREE_ROOT_THRESHOLD",
                "SQUARE_SIZE_UPPER_BOUND",
                "GLOBAL_MIN_GAS_PRICE"
            );
            for constants in constant_sets() {
                let gas = constants
                    .global_min_gas_price
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                out.push('\n');
                out.push_str(&format!(
                    "{:<18} {:<11} {:<23} {:<24} {}",
                    version_label(constants),
                    if constants.production { "yes" } else { "no" },
                    constants.subtree_root_threshold,
                    constants.square_size_upper_bound,
                    gas
                ));
            }
            Ok(out)
        }
    }
}

fn render_show(version: AppVersion, format: OutputFormat) -> Result<String, RunnerError> {
    let constants = version.constants();
    match format {
        OutputFormat::Json => to_json(constants),
        OutputFormat::Text => {
            let gas = match global_min_gas_price(constants.version) {
                Ok(price) => price.to_string(),
                Err(ConstantsError::NotIntroduced { introduced_in, .. }) => {
                    format!("not defined (introduced in version {})", introduced_in)
                }
                Err(e) => return Err(e.into()),
            };
            Ok([
                format!("version: {}", version_label(constants)),
                format!("production: {}", constants.production),
                format!(
                    "{}: {}",
                    Parameter::SubtreeRootThreshold,
                    constants.subtree_root_threshold
                ),
                format!(
                    "{}: {}",
                    Parameter::SquareSizeUpperBound,
                    constants.square_size_upper_bound
                ),
                format!("{}: {}", Parameter::GlobalMinGasPrice, gas),
            ]
            .join("\n"))
        }
    }
}

fn version_label(constants: &ConstantSet) -> String {
    match AppVersion::try_from(constants.version) {
        Ok(version) => format!("{} ({})", version, constants.version),
        Err(_) => constants.version.to_string(),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, RunnerError> {
    serde_json::to_string_pretty(value).map_err(|e| RunnerError::Render(e.to_string()))
}

/// Runner errors
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Resolution error: {0}")]
    Constants(#[from] ConstantsError),

    #[error("Render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(query: Query, format: OutputFormat) -> QueryConfig {
        QueryConfig { query, format }
    }

    #[test]
    fn test_get_text() {
        let out = run_query(&config(
            Query::Get(AppVersion::V1, Parameter::SquareSizeUpperBound),
            OutputFormat::Text,
        ))
        .unwrap();
        assert_eq!(out, "128");
    }

    #[test]
    fn test_get_json() {
        let out = run_query(&config(
            Query::Get(AppVersion::V2, Parameter::GlobalMinGasPrice),
            OutputFormat::Json,
        ))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["version"], json!(2));
        assert_eq!(value["parameter"], json!("global-min-gas-price"));
        assert_eq!(value["value"], json!(0.000001));
    }

    #[test]
    fn test_get_gas_price_before_introduction_fails() {
        let result = run_query(&config(
            Query::Get(AppVersion::V1, Parameter::GlobalMinGasPrice),
            OutputFormat::Text,
        ));
        match result {
            Err(RunnerError::Constants(e)) => assert!(e.is_not_introduced()),
            other => panic!("expected not-introduced error, got {:?}", other),
        }
    }

    #[test]
    fn test_show_text_marks_missing_gas_price() {
        let out = run_query(&config(Query::Show(AppVersion::V1), OutputFormat::Text)).unwrap();
        assert!(out.contains("version: v1 (1)"));
        assert!(out.contains("subtree-root-threshold: 64"));
        assert!(out.contains("global-min-gas-price: not defined (introduced in version 2)"));
    }

    #[test]
    fn test_show_json_testground() {
        let out = run_query(&config(Query::Show(AppVersion::Testground), OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["version"], json!(255));
        assert_eq!(value["production"], json!(false));
        assert_eq!(value["square_size_upper_bound"], json!(512));
    }

    #[test]
    fn test_list_covers_all_versions() {
        let out = run_query(&config(Query::List, OutputFormat::Text)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + AppVersion::ALL.len());
        assert!(lines[1].starts_with("v1 (1)"));
        assert!(lines[3].starts_with("testground (255)"));

        let json_out = run_query(&config(Query::List, OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json_out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
