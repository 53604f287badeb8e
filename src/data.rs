//! Synthetic input generation for the benchmark runs

use rand::{
    Rng as _,
    distr::{Distribution as _, Uniform},
    rngs::StdRng,
};

use crate::cli::DataType;

/// Generate a vector of the given size following the `data` pattern
pub fn generate(data: DataType, size: usize, rng: &mut StdRng) -> Vec<i64> {
    match data {
        DataType::Random => random(size, rng),
        DataType::Sorted => sorted(size),
        DataType::Reverse => reverse_sorted(size),
        DataType::NearlySorted => nearly_sorted(size, rng),
        DataType::Duplicates => duplicates(size, rng),
    }
}

/// Uniformly random values in `0..size * 10`
pub fn random(size: usize, rng: &mut StdRng) -> Vec<i64> {
    if size == 0 {
        return Vec::new();
    }

    Uniform::new(0, size as i64 * 10)
        .unwrap()
        .sample_iter(rng)
        .take(size)
        .collect()
}

/// The values `0..size` in ascending order
pub fn sorted(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// The values `0..size` in descending order
pub fn reverse_sorted(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// A sorted vector disturbed by `max(1, size / 20)` random pairwise swaps
pub fn nearly_sorted(size: usize, rng: &mut StdRng) -> Vec<i64> {
    let mut values = sorted(size);
    if size < 2 {
        return values;
    }

    let swaps = (size / 20).max(1);
    for _ in 0..swaps {
        let first = rng.random_range(0..size);
        let second = rng.random_range(0..size);
        values.swap(first, second);
    }

    values
}

/// Random values drawn from a pool of `max(1, size / 10)` distinct values
pub fn duplicates(size: usize, rng: &mut StdRng) -> Vec<i64> {
    let unique_values = (size / 10).max(1) as i64;

    Uniform::new(0, unique_values)
        .unwrap()
        .sample_iter(rng)
        .take(size)
        .collect()
}
