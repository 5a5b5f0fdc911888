// Resolver - Version to constant resolution
// Principle: Same version, same answer, on every node.
//
// Thresholds and bounds exist for every known version, so asking for an
// unknown one is an internal fault and aborts. The gas price floor is gated:
// asking before its introduction is an ordinary error the caller branches on.

use crate::error::ConstantsError;
use crate::parameter::Parameter;
use crate::registry::{self, AppVersion, ConstantSet};
use tracing::{debug, error};

/// Subtree root threshold for `version`.
///
/// # Panics
///
/// If `version` is not declared in the registry.
pub fn subtree_root_threshold(version: u64) -> usize {
    known(version).subtree_root_threshold
}

/// Upper bound on the data square width for `version`.
///
/// # Panics
///
/// If `version` is not declared in the registry.
pub fn square_size_upper_bound(version: u64) -> usize {
    known(version).square_size_upper_bound
}

/// Network-wide gas price floor for `version`.
///
/// Fails with [`ConstantsError::NotIntroduced`] for versions before the floor
/// existed and with [`ConstantsError::UnknownVersion`] for undeclared ones.
pub fn global_min_gas_price(version: u64) -> Result<f64, ConstantsError> {
    let app_version = AppVersion::try_from(version)?;
    match app_version.constants().global_min_gas_price {
        Some(price) => Ok(price),
        None => {
            debug!(
                version,
                introduced_in = Parameter::GlobalMinGasPrice.introduced_in(),
                "Global min gas price requested before its introduction"
            );
            Err(ConstantsError::NotIntroduced {
                parameter: Parameter::GlobalMinGasPrice,
                version,
                introduced_in: Parameter::GlobalMinGasPrice.introduced_in(),
            })
        }
    }
}

fn known(version: u64) -> &'static ConstantSet {
    match registry::lookup(version) {
        Some(constants) => constants,
        None => {
            error!(version, "No constant set declared for protocol version");
            panic!("unsupported app version {}", version);
        }
    }
}
