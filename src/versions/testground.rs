// Testground - Non-production profile for scaled-up simulated networks
// Never part of the real upgrade history

/// Protocol version identifier, far outside the production range
pub const VERSION: u64 = 255;

/// Minimum subtree width committed by its root instead of its leaves
pub const SUBTREE_ROOT_THRESHOLD: usize = 128;

/// Maximum width of the data square
pub const SQUARE_SIZE_UPPER_BOUND: usize = 512;

/// Fee price floor (utia per gas unit)
pub const GLOBAL_MIN_GAS_PRICE: f64 = 0.000001;
