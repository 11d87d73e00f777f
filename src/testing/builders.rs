//! Deterministic test data generators.

/// Generate the inclusive range `start..=end` as a vector.
///
/// # Example
///
/// ```
/// use toolz::testing::sequential_data;
///
/// assert_eq!(sequential_data(1, 5), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn sequential_data(start: i32, end: i32) -> Vec<i32> {
    (start..=end).collect()
}

/// Generate reproducible "random" values in `[min, max)` with a simple LCG.
///
/// The same `seed` always produces the same sequence, so property-style tests
/// can sweep several seeds and still fail deterministically.
///
/// # Panics
///
/// Panics if `max <= min`.
///
/// # Example
///
/// ```
/// use toolz::testing::pseudo_random_data;
///
/// let data = pseudo_random_data(10, 0, 100, 7);
/// assert_eq!(data.len(), 10);
/// assert!(data.iter().all(|&v| (0..100).contains(&v)));
/// assert_eq!(data, pseudo_random_data(10, 0, 100, 7));
/// ```
#[must_use]
pub fn pseudo_random_data(count: usize, min: i32, max: i32, seed: u32) -> Vec<i32> {
    assert!(max > min, "pseudo_random_data: empty range [{min}, {max})");
    let range = max.abs_diff(min);
    let mut state = seed;
    let mut data = Vec::with_capacity(count);
    for _ in 0..count {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let offset = (state / 65536) % range;
        data.push(min.wrapping_add_unsigned(offset));
    }
    data
}
