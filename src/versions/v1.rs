// Version 1 - Genesis protocol constants

/// Protocol version identifier
pub const VERSION: u64 = 1;

/// Minimum subtree width committed by its root instead of its leaves
pub const SUBTREE_ROOT_THRESHOLD: usize = 64;

/// Maximum width of the data square
pub const SQUARE_SIZE_UPPER_BOUND: usize = 128;
