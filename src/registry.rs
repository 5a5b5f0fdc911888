// Version Registry - Closed table of constant sets
// Principle: Every known version is declared once, at build time.
// A version missing from this table does not exist.

use crate::error::ConstantsError;
use crate::versions::{testground, v1, v2, LATEST_VERSION};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CONSTANT SETS
// =============================================================================

/// Consensus-critical constants for one protocol version
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstantSet {
    /// Protocol version these constants belong to
    pub version: u64,

    /// Part of the real upgrade history (false for testground)
    pub production: bool,

    /// Minimum subtree width committed by its root
    pub subtree_root_threshold: usize,

    /// Maximum width of the data square
    pub square_size_upper_bound: usize,

    /// Gas price floor; `None` before the version that introduced it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_min_gas_price: Option<f64>,
}

const V1_CONSTANTS: ConstantSet = ConstantSet {
    version: v1::VERSION,
    production: true,
    subtree_root_threshold: v1::SUBTREE_ROOT_THRESHOLD,
    square_size_upper_bound: v1::SQUARE_SIZE_UPPER_BOUND,
    global_min_gas_price: None,
};

const V2_CONSTANTS: ConstantSet = ConstantSet {
    version: v2::VERSION,
    production: true,
    subtree_root_threshold: v2::SUBTREE_ROOT_THRESHOLD,
    square_size_upper_bound: v2::SQUARE_SIZE_UPPER_BOUND,
    global_min_gas_price: Some(v2::GLOBAL_MIN_GAS_PRICE),
};

const TESTGROUND_CONSTANTS: ConstantSet = ConstantSet {
    version: testground::VERSION,
    production: false,
    subtree_root_threshold: testground::SUBTREE_ROOT_THRESHOLD,
    square_size_upper_bound: testground::SQUARE_SIZE_UPPER_BOUND,
    global_min_gas_price: Some(testground::GLOBAL_MIN_GAS_PRICE),
};

/// Ascending by version. Indexed by `AppVersion::index`.
static REGISTRY: [ConstantSet; 3] = [V1_CONSTANTS, V2_CONSTANTS, TESTGROUND_CONSTANTS];

// =============================================================================
// APP VERSION
// =============================================================================

/// A protocol version this build knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVersion {
    V1,
    V2,
    Testground,
}

impl AppVersion {
    /// Every known version, ascending
    pub const ALL: [AppVersion; 3] = [AppVersion::V1, AppVersion::V2, AppVersion::Testground];

    /// Newest production version
    pub fn latest() -> Self {
        match AppVersion::try_from(LATEST_VERSION) {
            Ok(version) => version,
            // LATEST_VERSION is one of the declared identifiers
            Err(_) => unreachable!("latest version {} is not registered", LATEST_VERSION),
        }
    }

    /// Numeric protocol version
    pub fn as_u64(self) -> u64 {
        match self {
            AppVersion::V1 => v1::VERSION,
            AppVersion::V2 => v2::VERSION,
            AppVersion::Testground => testground::VERSION,
        }
    }

    pub fn is_production(self) -> bool {
        self.constants().production
    }

    /// Constant set compiled for this version
    pub fn constants(self) -> &'static ConstantSet {
        &REGISTRY[self.index()]
    }

    fn index(self) -> usize {
        match self {
            AppVersion::V1 => 0,
            AppVersion::V2 => 1,
            AppVersion::Testground => 2,
        }
    }
}

impl TryFrom<u64> for AppVersion {
    type Error = ConstantsError;

    /// Exact match only: an undeclared version is unknown even if it falls
    /// between two declared ones
    fn try_from(version: u64) -> Result<Self, Self::Error> {
        match version {
            v1::VERSION => Ok(AppVersion::V1),
            v2::VERSION => Ok(AppVersion::V2),
            testground::VERSION => Ok(AppVersion::Testground),
            _ => Err(ConstantsError::UnknownVersion { version }),
        }
    }
}

impl From<AppVersion> for u64 {
    fn from(version: AppVersion) -> Self {
        version.as_u64()
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppVersion::V1 => write!(f, "v1"),
            AppVersion::V2 => write!(f, "v2"),
            AppVersion::Testground => write!(f, "testground"),
        }
    }
}

impl FromStr for AppVersion {
    type Err = ConstantsError;

    /// Accepts `2`, `v2`, `testground` or `latest`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim().to_ascii_lowercase();
        match selector.as_str() {
            "latest" => return Ok(AppVersion::latest()),
            "testground" => return Ok(AppVersion::Testground),
            _ => {}
        }

        let digits = selector.strip_prefix('v').unwrap_or(&selector);
        let version = digits
            .parse::<u64>()
            .map_err(|_| ConstantsError::InvalidVersion(s.to_string()))?;
        AppVersion::try_from(version)
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Constant set for an exact version, if declared
pub fn lookup(version: u64) -> Option<&'static ConstantSet> {
    AppVersion::try_from(version).ok().map(AppVersion::constants)
}

/// Whether the registry declares this version
pub fn is_known(version: u64) -> bool {
    lookup(version).is_some()
}

/// All declared constant sets, ascending by version
pub fn constant_sets() -> impl Iterator<Item = &'static ConstantSet> {
    REGISTRY.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_enum() {
        // Invariant: every version maps to exactly one constant set
        assert_eq!(REGISTRY.len(), AppVersion::ALL.len());
        for version in AppVersion::ALL {
            assert_eq!(version.constants().version, version.as_u64());
            assert_eq!(AppVersion::try_from(version.as_u64()), Ok(version));
        }
    }

    #[test]
    fn test_registry_ascending_and_unique() {
        let versions: Vec<u64> = constant_sets().map(|c| c.version).collect();
        assert_eq!(versions, vec![1, 2, 255]);
        for pair in versions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert!(is_known(1));
        assert!(is_known(2));
        assert!(is_known(255));

        // No fallback to the nearest lower version
        assert!(!is_known(0));
        assert!(!is_known(3));
        assert!(!is_known(254));
        assert!(!is_known(256));
        assert!(lookup(100).is_none());
        assert_eq!(
            AppVersion::try_from(3),
            Err(ConstantsError::UnknownVersion { version: 3 })
        );
    }

    #[test]
    fn test_production_flags() {
        assert!(AppVersion::V1.is_production());
        assert!(AppVersion::V2.is_production());
        assert!(!AppVersion::Testground.is_production());
    }

    #[test]
    fn test_gas_price_gated_by_version() {
        assert_eq!(AppVersion::V1.constants().global_min_gas_price, None);
        assert_eq!(
            AppVersion::V2.constants().global_min_gas_price,
            Some(v2::GLOBAL_MIN_GAS_PRICE)
        );
        assert!(AppVersion::Testground.constants().global_min_gas_price.is_some());
    }

    #[test]
    fn test_latest_is_production() {
        let latest = AppVersion::latest();
        assert_eq!(latest, AppVersion::V2);
        assert!(latest.is_production());
        for version in AppVersion::ALL.iter().filter(|v| v.is_production()) {
            assert!(version.as_u64() <= latest.as_u64());
        }
    }

    #[test]
    fn test_from_str_selectors() {
        assert_eq!("1".parse::<AppVersion>(), Ok(AppVersion::V1));
        assert_eq!("v2".parse::<AppVersion>(), Ok(AppVersion::V2));
        assert_eq!("V2".parse::<AppVersion>(), Ok(AppVersion::V2));
        assert_eq!("testground".parse::<AppVersion>(), Ok(AppVersion::Testground));
        assert_eq!("255".parse::<AppVersion>(), Ok(AppVersion::Testground));
        assert_eq!("latest".parse::<AppVersion>(), Ok(AppVersion::V2));

        assert_eq!(
            "v7".parse::<AppVersion>(),
            Err(ConstantsError::UnknownVersion { version: 7 })
        );
        assert_eq!(
            "mainnet".parse::<AppVersion>(),
            Err(ConstantsError::InvalidVersion("mainnet".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for version in AppVersion::ALL {
            assert_eq!(version.to_string().parse::<AppVersion>(), Ok(version));
        }
    }

    #[test]
    fn test_serialize_omits_absent_gas_price() {
        let v1 = serde_json::to_value(AppVersion::V1.constants()).unwrap();
        assert!(v1.get("global_min_gas_price").is_none());

        let v2 = serde_json::to_value(AppVersion::V2.constants()).unwrap();
        assert_eq!(v2["global_min_gas_price"], serde_json::json!(0.000001));
        assert_eq!(v2["square_size_upper_bound"], serde_json::json!(128));
    }
}
