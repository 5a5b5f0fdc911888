// Version 2 - First upgrade, introduces the network-wide gas price floor

/// Protocol version identifier
pub const VERSION: u64 = 2;

/// Minimum subtree width committed by its root instead of its leaves
pub const SUBTREE_ROOT_THRESHOLD: usize = 64;

/// Maximum width of the data square
pub const SQUARE_SIZE_UPPER_BOUND: usize = 128;

/// Fee price floor (utia per gas unit). Proposals carrying a transaction
/// priced below it are rejected.
pub const GLOBAL_MIN_GAS_PRICE: f64 = 0.000001;
