//! Seeded demo inputs.
//!
//! Inputs are small and drawn from a caller-supplied RNG so that a session
//! seeded with the same value replays the same array.

use rand::Rng;

/// Default length of the sorting and searching demo arrays.
pub const ARRAY_LEN: usize = 15;

/// Value the searching demo looks for.
pub const SEARCH_TARGET: i64 = 42;

/// Starting array of the insertion/deletion demo.
pub const ARRAY_OP_VALUES: [i64; 5] = [10, 20, 40, 50, 60];

/// Slot the insertion/deletion demo operates on.
pub const ARRAY_OP_INDEX: usize = 2;

/// Value the insertion demo writes.
pub const ARRAY_OP_VALUE: i64 = 30;

/// Unordered values in `10..=99`.
pub fn sort_array<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(10..=99)).collect()
}

/// Ascending values that are guaranteed to contain `target`.
///
/// Slot `i` holds `5 * i + 5` plus a jitter in `0..4`. When no slot lands on
/// the target a random slot is overwritten with it before sorting.
pub fn search_array<R: Rng + ?Sized>(rng: &mut R, len: usize, target: i64) -> Vec<i64> {
    let mut values: Vec<i64> = (0..len as i64)
        .map(|i| i * 5 + rng.gen_range(0..4) + 5)
        .collect();

    if !values.is_empty() && !values.contains(&target) {
        let slot = rng.gen_range(0..values.len());
        values[slot] = target;
    }
    values.sort_unstable();
    values
}
