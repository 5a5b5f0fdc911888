// Errors - Resolution failures
// Principle: "Not yet defined" is an error, never a zero

use crate::parameter::Parameter;

/// Errors returned by version lookups and gated parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstantsError {
    /// No constant set is declared for this version
    #[error("Unknown protocol version: {version}")]
    UnknownVersion { version: u64 },

    /// The version is known but predates the parameter
    #[error("{parameter} is not defined for version {version} (introduced in version {introduced_in})")]
    NotIntroduced {
        parameter: Parameter,
        version: u64,
        introduced_in: u64,
    },

    /// A version selector that is neither a number nor a known name
    #[error("Invalid version selector: {0}")]
    InvalidVersion(String),

    /// A parameter name that no version declares
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),
}

impl ConstantsError {
    /// Whether the caller is expected to branch on this error rather than
    /// treat it as an internal inconsistency
    pub fn is_not_introduced(&self) -> bool {
        matches!(self, ConstantsError::NotIntroduced { .. })
    }
}
