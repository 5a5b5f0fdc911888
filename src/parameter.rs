// Parameters - Named, individually addressable constants
// Principle: A gated parameter knows the version that introduced it

use crate::error::ConstantsError;
use crate::registry::AppVersion;
use crate::versions::{v1, v2};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A versioned consensus parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parameter {
    SubtreeRootThreshold,
    SquareSizeUpperBound,
    GlobalMinGasPrice,
}

/// Resolved value of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Sizes and thresholds
    Count(usize),
    /// Prices
    Price(f64),
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [
        Parameter::SubtreeRootThreshold,
        Parameter::SquareSizeUpperBound,
        Parameter::GlobalMinGasPrice,
    ];

    /// First protocol version declaring this parameter
    pub fn introduced_in(self) -> u64 {
        match self {
            Parameter::SubtreeRootThreshold | Parameter::SquareSizeUpperBound => v1::VERSION,
            Parameter::GlobalMinGasPrice => v2::VERSION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::SubtreeRootThreshold => "subtree-root-threshold",
            Parameter::SquareSizeUpperBound => "square-size-upper-bound",
            Parameter::GlobalMinGasPrice => "global-min-gas-price",
        }
    }

    /// Resolve against a known version's constant set
    pub fn resolve(self, version: AppVersion) -> Result<ParameterValue, ConstantsError> {
        let constants = version.constants();
        match self {
            Parameter::SubtreeRootThreshold => {
                Ok(ParameterValue::Count(constants.subtree_root_threshold))
            }
            Parameter::SquareSizeUpperBound => {
                Ok(ParameterValue::Count(constants.square_size_upper_bound))
            }
            Parameter::GlobalMinGasPrice => constants
                .global_min_gas_price
                .map(ParameterValue::Price)
                .ok_or(ConstantsError::NotIntroduced {
                    parameter: self,
                    version: constants.version,
                    introduced_in: self.introduced_in(),
                }),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = ConstantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| ConstantsError::UnknownParameter(s.to_string()))
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Count(n) => write!(f, "{}", n),
            ParameterValue::Price(p) => write!(f, "{}", p),
        }
    }
}
