// appconsts - Versioned consensus constants
// Principle: Every node derives the same constant from the same version.
// Unknown versions fail; parameters from the future are never defaulted.

pub mod error;
pub mod parameter;
pub mod registry;
pub mod resolver;
pub mod versions;

#[cfg(test)]
mod tests;

pub use error::ConstantsError;
pub use parameter::{Parameter, ParameterValue};
pub use registry::{constant_sets, is_known, lookup, AppVersion, ConstantSet};
pub use resolver::{global_min_gas_price, square_size_upper_bound, subtree_root_threshold};
pub use versions::LATEST_VERSION;
