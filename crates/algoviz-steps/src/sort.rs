//! Sorting step generators.
//!
//! Each generator sorts a private copy of its input and records one step per
//! comparison, mutation and finalized position, in the order the textbook
//! algorithm performs them.

use crate::step::SortStep;

/// The sorting algorithms with step generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// Every sorting algorithm, in catalog order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Run the algorithm over `input` and return its step log.
    pub fn generate(self, input: &[i64]) -> Vec<SortStep> {
        let steps = match self {
            SortAlgorithm::Bubble => bubble_sort(input),
            SortAlgorithm::Selection => selection_sort(input),
            SortAlgorithm::Insertion => insertion_sort(input),
            SortAlgorithm::Merge => merge_sort(input),
            SortAlgorithm::Quick => quick_sort(input),
        };
        tracing::debug!(algorithm = ?self, len = input.len(), steps = steps.len(), "generated sort steps");
        steps
    }
}

/// Bubble sort. Every pass ends by fixing the last unsorted position.
pub fn bubble_sort(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut arr = input.to_vec();
    let n = arr.len();
    if n == 0 {
        return steps;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            steps.push(SortStep::Compare { a: j, b: j + 1 });
            if arr[j] > arr[j + 1] {
                steps.push(SortStep::Swap {
                    i: j,
                    j: j + 1,
                    values: (arr[j + 1], arr[j]),
                });
                arr.swap(j, j + 1);
            }
        }
        steps.push(SortStep::Sorted { index: n - 1 - i });
    }
    steps.push(SortStep::Sorted { index: 0 });
    steps
}

/// Selection sort. The swap is recorded even when the minimum is already in place.
pub fn selection_sort(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut arr = input.to_vec();
    let n = arr.len();
    if n == 0 {
        return steps;
    }

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            steps.push(SortStep::Compare { a: j, b: min });
            if arr[j] < arr[min] {
                min = j;
            }
        }
        steps.push(SortStep::Swap {
            i,
            j: min,
            values: (arr[min], arr[i]),
        });
        arr.swap(i, min);
        steps.push(SortStep::Sorted { index: i });
    }
    steps.push(SortStep::Sorted { index: n - 1 });
    steps
}

/// Insertion sort. Shifts are recorded as single-slot `Set` steps.
pub fn insertion_sort(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut arr = input.to_vec();
    let n = arr.len();

    for i in 1..n {
        let key = arr[i];
        // Slot the key will land in; everything in hole..i has shifted right.
        let mut hole = i;
        steps.push(SortStep::Compare { a: i, b: i - 1 });
        while hole > 0 && arr[hole - 1] > key {
            steps.push(SortStep::Set {
                index: hole,
                value: arr[hole - 1],
            });
            arr[hole] = arr[hole - 1];
            hole -= 1;
            if hole > 0 {
                steps.push(SortStep::Compare { a: i, b: hole - 1 });
            }
        }
        steps.push(SortStep::Set { index: hole, value: key });
        arr[hole] = key;
    }

    steps.extend((0..n).map(|index| SortStep::Sorted { index }));
    steps
}

/// Top-down merge sort.
pub fn merge_sort(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut arr = input.to_vec();
    let n = arr.len();

    if n > 1 {
        merge_sort_range(&mut arr, 0, n - 1, &mut steps);
    }
    steps.extend((0..n).map(|index| SortStep::Sorted { index }));
    steps
}

fn merge_sort_range(arr: &mut [i64], l: usize, r: usize, steps: &mut Vec<SortStep>) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    steps.push(SortStep::Partition { low: l, high: r });
    merge_sort_range(arr, l, m, steps);
    merge_sort_range(arr, m + 1, r, steps);
    merge(arr, l, m, r, steps);
}

fn merge(arr: &mut [i64], l: usize, m: usize, r: usize, steps: &mut Vec<SortStep>) {
    let left = arr[l..=m].to_vec();
    let right = arr[m + 1..=r].to_vec();
    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        steps.push(SortStep::Compare { a: l + i, b: m + 1 + j });
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        steps.push(SortStep::Set { index: k, value });
        arr[k] = value;
        k += 1;
    }
    for &value in left[i..].iter().chain(&right[j..]) {
        steps.push(SortStep::Set { index: k, value });
        arr[k] = value;
        k += 1;
    }
}

/// Quick sort with the Lomuto partition scheme: the last element of the
/// active range is the pivot, and elements strictly smaller move left of it.
pub fn quick_sort(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut arr = input.to_vec();
    let n = arr.len();
    quick_sort_range(&mut arr, 0, n, &mut steps);
    steps
}

/// Sorts the half-open range `lo..hi`.
fn quick_sort_range(arr: &mut [i64], lo: usize, hi: usize, steps: &mut Vec<SortStep>) {
    match hi.saturating_sub(lo) {
        0 => {}
        1 => steps.push(SortStep::Sorted { index: lo }),
        _ => {
            steps.push(SortStep::Partition { low: lo, high: hi - 1 });
            let pivot_index = partition(arr, lo, hi - 1, steps);
            steps.push(SortStep::Sorted { index: pivot_index });
            quick_sort_range(arr, lo, pivot_index, steps);
            quick_sort_range(arr, pivot_index + 1, hi, steps);
        }
    }
}

fn partition(arr: &mut [i64], low: usize, high: usize, steps: &mut Vec<SortStep>) -> usize {
    let pivot = arr[high];
    steps.push(SortStep::Pivot { index: high });

    let mut store = low;
    for j in low..high {
        steps.push(SortStep::Compare { a: j, b: high });
        if arr[j] < pivot {
            steps.push(SortStep::Swap {
                i: store,
                j,
                values: (arr[j], arr[store]),
            });
            arr.swap(store, j);
            store += 1;
        }
    }
    steps.push(SortStep::Swap {
        i: store,
        j: high,
        values: (arr[high], arr[store]),
    });
    arr.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn replay(input: &[i64], steps: &[SortStep]) -> Vec<i64> {
        let mut values = input.to_vec();
        for step in steps {
            step.apply_to(&mut values);
        }
        values
    }

    fn sorted_indices(steps: &[SortStep]) -> Vec<usize> {
        let mut indices: Vec<usize> = steps
            .iter()
            .filter_map(|s| match s {
                SortStep::Sorted { index } => Some(*index),
                _ => None,
            })
            .collect();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn empty_input_yields_no_steps() {
        for algorithm in SortAlgorithm::ALL {
            assert!(algorithm.generate(&[]).is_empty(), "{algorithm:?}");
        }
    }

    #[test]
    fn single_element_is_sorted_immediately() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(
                algorithm.generate(&[7]),
                vec![SortStep::Sorted { index: 0 }],
                "{algorithm:?}"
            );
        }
    }

    #[test]
    fn selection_sort_records_self_swap() {
        let steps = selection_sort(&[1, 2]);
        assert_eq!(
            steps,
            vec![
                SortStep::Compare { a: 1, b: 0 },
                SortStep::Swap { i: 0, j: 0, values: (1, 1) },
                SortStep::Sorted { index: 0 },
                SortStep::Sorted { index: 1 },
            ]
        );
    }

    #[test]
    fn insertion_sort_shifts_with_set() {
        let steps = insertion_sort(&[3, 1]);
        assert_eq!(
            steps,
            vec![
                SortStep::Compare { a: 1, b: 0 },
                SortStep::Set { index: 1, value: 3 },
                SortStep::Set { index: 0, value: 1 },
                SortStep::Sorted { index: 0 },
                SortStep::Sorted { index: 1 },
            ]
        );
    }

    #[test]
    fn quick_sort_uses_last_element_as_pivot() {
        let steps = quick_sort(&[3, 1, 2]);
        assert_eq!(
            steps,
            vec![
                SortStep::Partition { low: 0, high: 2 },
                SortStep::Pivot { index: 2 },
                SortStep::Compare { a: 0, b: 2 },
                SortStep::Compare { a: 1, b: 2 },
                SortStep::Swap { i: 0, j: 1, values: (1, 3) },
                SortStep::Swap { i: 1, j: 2, values: (2, 3) },
                SortStep::Sorted { index: 1 },
                SortStep::Sorted { index: 0 },
                SortStep::Sorted { index: 2 },
            ]
        );
    }

    #[test]
    fn merge_sort_brackets_ranges() {
        let steps = merge_sort(&[2, 1]);
        assert_eq!(
            steps,
            vec![
                SortStep::Partition { low: 0, high: 1 },
                SortStep::Compare { a: 0, b: 1 },
                SortStep::Set { index: 0, value: 1 },
                SortStep::Set { index: 1, value: 2 },
                SortStep::Sorted { index: 0 },
                SortStep::Sorted { index: 1 },
            ]
        );
    }

    #[test]
    fn generators_leave_input_alone() {
        let input = vec![9, 4, 7, 1];
        for algorithm in SortAlgorithm::ALL {
            let _ = algorithm.generate(&input);
        }
        assert_eq!(input, vec![9, 4, 7, 1]);
    }

    proptest! {
        #[test]
        fn replay_matches_reference_sort(input in prop::collection::vec(-50i64..100, 0..24)) {
            let mut expected = input.clone();
            expected.sort();
            for algorithm in SortAlgorithm::ALL {
                let steps = algorithm.generate(&input);
                prop_assert_eq!(&replay(&input, &steps), &expected, "{:?}", algorithm);
            }
        }

        #[test]
        fn every_position_sorted_once(input in prop::collection::vec(0i64..100, 0..24)) {
            let all: Vec<usize> = (0..input.len()).collect();
            for algorithm in SortAlgorithm::ALL {
                let steps = algorithm.generate(&input);
                prop_assert_eq!(&sorted_indices(&steps), &all, "{:?}", algorithm);
            }
        }

        #[test]
        fn generation_is_deterministic(input in prop::collection::vec(0i64..100, 0..16)) {
            for algorithm in SortAlgorithm::ALL {
                prop_assert_eq!(algorithm.generate(&input), algorithm.generate(&input));
            }
        }
    }
}
