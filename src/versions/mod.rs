// Versions - One module per protocol version
// Principle: A version is declared, never inferred from its neighbours

pub mod testground;
pub mod v1;
pub mod v2;

/// Newest production protocol version known to this build
pub const LATEST_VERSION: u64 = v2::VERSION;
