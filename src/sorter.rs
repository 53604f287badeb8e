//! Instrumented insertion sort over integer slices

use crate::metrics::MetricsCollector;

/// The default optimization flag for [`InsertionSorter`]
pub const DEFAULT_OPTIMIZED: bool = true;

/// Errors returned by the sorting entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The caller handed over no sequence at all
    #[error("input sequence is absent")]
    AbsentInput,
}

/// Insertion sort with a performance counter attached to every operation
///
/// The sorter dispatches between two variants fixed at construction time: a
/// linear backward scan, and a binary-search variant that early-exits on
/// elements already in place relative to their left neighbour, which keeps
/// nearly-sorted input close to linear. Both variants produce the identical
/// output permutation; only the recorded operation counts differ.
pub struct InsertionSorter {
    metrics: MetricsCollector,
    optimized: bool,
}

impl InsertionSorter {
    /// Create a sorter with a fresh collector
    ///
    /// `optimized` selects the binary-search variant and stays fixed for the
    /// sorter's lifetime.
    pub fn new(optimized: bool) -> Self {
        Self {
            metrics: MetricsCollector::new(),
            optimized,
        }
    }

    /// The collector holding the counters of the most recent run
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Mutable access to the collector, e.g. to reset it between runs
    pub fn metrics_mut(&mut self) -> &mut MetricsCollector {
        &mut self.metrics
    }

    /// Sort `values` in place into non-decreasing order
    ///
    /// The collector is reset and restarted on every call, including trivial
    /// ones, so its snapshot always describes this run. Sequences of length
    /// 0 and 1 complete as valid zero-comparison runs.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::AbsentInput`] if `values` is `None`, before any
    /// metrics or sorting work happens.
    pub fn sort(&mut self, values: Option<&mut [i64]>) -> Result<(), SortError> {
        let values = values.ok_or(SortError::AbsentInput)?;

        self.metrics.reset();
        self.metrics.start_timing();

        if values.len() <= 1 {
            self.metrics.stop_timing();
            return Ok(());
        }

        if self.optimized {
            self.sort_binary(values);
        } else {
            self.sort_standard(values);
        }

        self.metrics.stop_timing();
        Ok(())
    }

    /// Sort a copy of `values` and return it, leaving the input untouched
    ///
    /// The clone is counted as one memory allocation. The inner [`Self::sort`]
    /// resets the collector, so the event is recorded after it returns.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::AbsentInput`] if `values` is `None`.
    pub fn sort_copy(&mut self, values: Option<&[i64]>) -> Result<Vec<i64>, SortError> {
        let values = values.ok_or(SortError::AbsentInput)?;

        let mut copy = values.to_vec();
        self.sort(Some(&mut copy))?;
        self.metrics.record_memory_allocation();

        Ok(copy)
    }

    /// The linear-scan variant
    ///
    /// Per shifted element: one comparison, one read, one write, one swap.
    /// The comparison that stops the scan costs one comparison and one read,
    /// charged once per outer iteration unless the scan ran off the left
    /// boundary. Writing the key back costs one access and no swap.
    fn sort_standard(&mut self, values: &mut [i64]) {
        for i in 1..values.len() {
            let key = values[i];
            self.metrics.record_array_access();

            let mut slot = i;
            while slot > 0 && values[slot - 1] > key {
                self.metrics.record_comparison();
                self.metrics.record_array_access();

                values[slot] = values[slot - 1];
                self.metrics.record_swap();
                self.metrics.record_array_access();

                slot -= 1;
            }

            // The scan stopped on an element <= key rather than the boundary
            if slot > 0 {
                self.metrics.record_comparison();
                self.metrics.record_array_access();
            }

            values[slot] = key;
            self.metrics.record_array_access();
        }
    }

    /// The binary-search variant
    ///
    /// Elements already ordered relative to their left neighbour cost one
    /// comparison and two accesses and are skipped. Everything else is
    /// placed via [`Self::binary_search_position`] and a bulk shift, charged
    /// one access per shifted element plus one swap and one access for the
    /// key write.
    fn sort_binary(&mut self, values: &mut [i64]) {
        for i in 1..values.len() {
            let key = values[i];
            self.metrics.record_array_access();

            self.metrics.record_comparison();
            self.metrics.record_array_access();
            if values[i - 1] <= key {
                continue;
            }

            let position = self.binary_search_position(values, key, i - 1);

            values.copy_within(position..i, position + 1);
            self.metrics.record_array_accesses((i - position) as u64);

            values[position] = key;
            self.metrics.record_swap();
            self.metrics.record_array_access();
        }
    }

    /// Locate the slot for `key` in the sorted prefix `values[..=right]`
    ///
    /// Searches the closed interval `[0, right]`; the right bound may pass
    /// below zero, hence the signed arithmetic. On an exact match the slot
    /// after the matching element is returned, keeping runs of equal values
    /// in insertion order. Each probe costs one comparison and one access.
    fn binary_search_position(&mut self, values: &[i64], key: i64, right: usize) -> usize {
        let mut left = 0_isize;
        let mut right = right as isize;

        while left <= right {
            let mid = left + (right - left) / 2;

            self.metrics.record_comparison();
            self.metrics.record_array_access();
            let probe = values[mid as usize];

            if probe == key {
                return (mid + 1) as usize;
            } else if probe < key {
                left = mid + 1;
            } else {
                right = mid - 1;
            }
        }

        left as usize
    }
}

impl Default for InsertionSorter {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIMIZED)
    }
}

/// Whether `values` is in non-decreasing order
///
/// Absent, empty and single-element sequences count as sorted. Pure check,
/// no metrics involved.
pub fn is_sorted(values: Option<&[i64]>) -> bool {
    values.is_none_or(|values| values.windows(2).all(|pair| pair[0] <= pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 200;

    #[test]
    fn absent_input() {
        let mut sorter = InsertionSorter::default();

        assert_eq!(sorter.sort(None), Err(SortError::AbsentInput));
        assert_eq!(sorter.sort_copy(None), Err(SortError::AbsentInput));
    }

    #[test]
    fn empty() {
        let mut sorter = InsertionSorter::default();
        let mut values: Vec<i64> = Vec::new();

        sorter.sort(Some(&mut values)).unwrap();

        assert!(values.is_empty());
        assert!(is_sorted(Some(&values)));
        assert_eq!(sorter.metrics().comparisons(), 0);
    }

    #[test]
    fn single_element() {
        let mut sorter = InsertionSorter::default();
        let mut values = vec![42];

        sorter.sort(Some(&mut values)).unwrap();

        assert_eq!(values, [42]);
        assert_eq!(sorter.metrics().comparisons(), 0);
    }

    #[test]
    fn two_elements() {
        for optimized in [false, true] {
            let mut sorter = InsertionSorter::new(optimized);
            let mut values = vec![2, 1];

            sorter.sort(Some(&mut values)).unwrap();
            assert_eq!(values, [1, 2]);
        }
    }

    #[test]
    fn known_sequence() {
        let mut sorter = InsertionSorter::new(false);
        let mut values = vec![64, 34, 25, 12, 22, 11, 90];

        sorter.sort(Some(&mut values)).unwrap();

        assert_eq!(values, [11, 12, 22, 25, 34, 64, 90]);
        assert_eq!(sorter.metrics().comparisons(), 16);
        assert_eq!(sorter.metrics().swaps(), 14);
    }

    #[test]
    fn duplicate_values() {
        for optimized in [false, true] {
            let mut sorter = InsertionSorter::new(optimized);
            let mut values = vec![5, 2, 8, 2, 9, 1, 5, 5];

            sorter.sort(Some(&mut values)).unwrap();
            assert_eq!(values, [1, 2, 2, 5, 5, 5, 8, 9]);
        }
    }

    #[test]
    fn negative_values() {
        let mut sorter = InsertionSorter::default();
        let mut values = vec![-5, 3, -2, 8, -10, 0, 15];

        sorter.sort(Some(&mut values)).unwrap();
        assert_eq!(values, [-10, -5, -2, 0, 3, 8, 15]);
    }

    #[test]
    fn all_equal() {
        for optimized in [false, true] {
            let mut sorter = InsertionSorter::new(optimized);
            let mut values = vec![7; 7];

            sorter.sort(Some(&mut values)).unwrap();
            assert_eq!(values, [7; 7]);
        }
    }

    #[test]
    fn sorted_input_standard_counts() {
        let mut sorter = InsertionSorter::new(false);
        let mut values: Vec<i64> = (1..=10).collect();

        sorter.sort(Some(&mut values)).unwrap();

        // One terminating comparison per outer iteration, nothing shifted
        assert_eq!(sorter.metrics().comparisons(), 9);
        assert_eq!(sorter.metrics().swaps(), 0);
    }

    #[test]
    fn sorted_input_optimized_counts() {
        let mut sorter = InsertionSorter::new(true);
        let mut values: Vec<i64> = (1..=10).collect();

        sorter.sort(Some(&mut values)).unwrap();

        // One neighbour check per element after the first, all early exits
        assert_eq!(sorter.metrics().comparisons(), 9);
        assert_eq!(sorter.metrics().swaps(), 0);
    }

    #[test]
    fn descending_input_standard_counts() {
        let mut sorter = InsertionSorter::new(false);
        let mut values: Vec<i64> = (1..=10).rev().collect();

        sorter.sort(Some(&mut values)).unwrap();

        assert_eq!(values, (1..=10).collect::<Vec<i64>>());
        // Every scan runs to the left boundary, sum of 1..=9
        assert_eq!(sorter.metrics().comparisons(), 45);
        assert_eq!(sorter.metrics().swaps(), 45);
    }

    #[test]
    fn variants_agree() {
        let mut rng = crate::test::test_rng();
        let mut standard = InsertionSorter::new(false);
        let mut optimized = InsertionSorter::new(true);

        for run in 0..RUNS {
            let values = crate::test::random_values(TEST_SIZE, &mut rng);
            let mut first = values.clone();
            let mut second = values;

            standard.sort(Some(&mut first)).unwrap();
            optimized.sort(Some(&mut second)).unwrap();

            assert_eq!(first, second, "run {run} diverged between variants");
        }
    }

    #[test]
    fn random_inputs_are_permutation_sorted() {
        let mut rng = crate::test::test_rng();

        for optimized in [false, true] {
            let mut sorter = InsertionSorter::new(optimized);

            for run in 0..RUNS {
                let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
                let mut expected = values.clone();
                expected.sort();

                sorter.sort(Some(&mut values)).unwrap();

                assert_eq!(values, expected, "run {run} was not sorted");
            }
        }
    }

    #[test]
    fn sort_copy_leaves_input_untouched() {
        let mut sorter = InsertionSorter::default();
        let values = vec![5, 2, 8, 1, 9];

        let sorted = sorter.sort_copy(Some(&values)).unwrap();

        assert_eq!(values, [5, 2, 8, 1, 9]);
        assert_eq!(sorted, [1, 2, 5, 8, 9]);
        assert_eq!(sorter.metrics().memory_allocations(), 1);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut sorter = InsertionSorter::default();
        let mut values = vec![3, 1, 4, 1, 5, 9, 2, 6];

        sorter.sort(Some(&mut values)).unwrap();
        let once = values.clone();
        sorter.sort(Some(&mut values)).unwrap();

        assert_eq!(values, once);
        assert!(is_sorted(Some(&values)));
    }

    #[test]
    fn collector_can_be_reset_between_runs() {
        let mut sorter = InsertionSorter::new(false);
        let mut values = vec![3, 1, 2];

        sorter.sort(Some(&mut values)).unwrap();
        assert!(sorter.metrics().comparisons() > 0);

        sorter.metrics_mut().reset();
        assert_eq!(sorter.metrics().comparisons(), 0);
        assert_eq!(sorter.metrics().elapsed_nanos(), 0);
    }

    #[test]
    fn is_sorted_cases() {
        assert!(is_sorted(None));
        assert!(is_sorted(Some(&[])));
        assert!(is_sorted(Some(&[42])));
        assert!(is_sorted(Some(&[1, 2, 2, 3])));
        assert!(!is_sorted(Some(&[2, 1])));
    }

    #[test]
    fn elapsed_time_is_recorded() {
        let mut rng = crate::test::test_rng();
        let mut sorter = InsertionSorter::new(false);
        let mut values = crate::test::random_values(1_000, &mut rng);

        sorter.sort(Some(&mut values)).unwrap();

        assert!(sorter.metrics().elapsed_nanos() > 0);
    }
}
