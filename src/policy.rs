//! Capacity and rehash policy.
//!
//! The table starts at `DEFAULT_CAPACITY` buckets and grows to `2c + 1`
//! once the number of entries reaches `floor(LOAD_FACTOR * c)`. Capacities
//! therefore follow `15, 31, 63, 127, ...` (always `2^k - 1`).

/// Bucket count of a fresh or cleared table.
pub const DEFAULT_CAPACITY: usize = 15;

/// Ratio of entries to buckets at which the table grows.
pub const LOAD_FACTOR: f64 = 0.75;

/// Entry count at which a table with `capacity` buckets grows.
#[inline]
pub fn threshold(capacity: usize) -> usize {
    (LOAD_FACTOR * capacity as f64) as usize
}

/// Evaluated after every insertion that created a new entry.
#[inline]
pub fn should_grow(size: usize, capacity: usize) -> bool {
    size >= threshold(capacity)
}

/// Next capacity. Unguarded: growth has no upper bound.
#[inline]
pub fn grown(capacity: usize) -> usize {
    2 * capacity + 1
}

/// Maps a stored hash to a bucket. The sign bit is masked off rather than
/// taking an absolute value, so `i32::MIN` lands in bucket 0.
#[inline]
pub fn bucket_index(hash: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (hash & 0x7FFF_FFFF) as usize % capacity
}
