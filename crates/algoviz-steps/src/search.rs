//! Searching step generators.

use crate::step::SearchStep;

/// The searching algorithms with step generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
    /// Expects ascending input.
    Binary,
}

impl SearchAlgorithm {
    /// Run the search for `target` over `input` and return its step log.
    pub fn generate(self, input: &[i64], target: i64) -> Vec<SearchStep> {
        match self {
            SearchAlgorithm::Linear => linear_search(input, target),
            SearchAlgorithm::Binary => binary_search(input, target),
        }
    }
}

/// Examine elements left to right until the target turns up.
pub fn linear_search(input: &[i64], target: i64) -> Vec<SearchStep> {
    let mut steps = Vec::with_capacity(input.len() + 1);
    for (index, &value) in input.iter().enumerate() {
        steps.push(SearchStep::Compare { index });
        if value == target {
            steps.push(SearchStep::Found { index });
            return steps;
        }
    }
    steps.push(SearchStep::NotFound);
    steps
}

/// Halve the candidate range on every comparison. Each narrowing marks every
/// excluded index as a `Partition`; a miss marks the whole array.
pub fn binary_search(input: &[i64], target: i64) -> Vec<SearchStep> {
    let mut steps = Vec::new();
    // Half-open candidate range.
    let (mut lo, mut hi) = (0usize, input.len());

    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        steps.push(SearchStep::Compare { index: mid });
        if input[mid] == target {
            steps.push(SearchStep::Found { index: mid });
            return steps;
        }
        if input[mid] < target {
            steps.extend((lo..=mid).map(|index| SearchStep::Partition { index }));
            lo = mid + 1;
        } else {
            steps.extend((mid..hi).map(|index| SearchStep::Partition { index }));
            hi = mid;
        }
    }

    steps.extend((0..input.len()).map(|index| SearchStep::Partition { index }));
    steps.push(SearchStep::NotFound);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn compares(steps: &[SearchStep]) -> usize {
        steps
            .iter()
            .filter(|s| matches!(s, SearchStep::Compare { .. }))
            .count()
    }

    #[test]
    fn linear_search_hits() {
        let steps = linear_search(&[4, 8, 15, 16], 15);
        assert_eq!(
            steps,
            vec![
                SearchStep::Compare { index: 0 },
                SearchStep::Compare { index: 1 },
                SearchStep::Compare { index: 2 },
                SearchStep::Found { index: 2 },
            ]
        );
    }

    #[test]
    fn linear_search_miss_scans_everything() {
        let steps = linear_search(&[4, 8, 15], 42);
        assert_eq!(compares(&steps), 3);
        assert_eq!(steps.last(), Some(&SearchStep::NotFound));
    }

    #[test]
    fn binary_search_narrows() {
        let steps = binary_search(&[10, 20, 30, 40, 50], 40);
        assert_eq!(
            steps,
            vec![
                SearchStep::Compare { index: 2 },
                SearchStep::Partition { index: 0 },
                SearchStep::Partition { index: 1 },
                SearchStep::Partition { index: 2 },
                SearchStep::Compare { index: 3 },
                SearchStep::Found { index: 3 },
            ]
        );
    }

    #[test]
    fn binary_search_miss_excludes_everything() {
        let steps = binary_search(&[10, 20, 30], 5);
        assert_eq!(steps.last(), Some(&SearchStep::NotFound));
        let tail: Vec<_> = steps[steps.len() - 4..steps.len() - 1].to_vec();
        assert_eq!(
            tail,
            vec![
                SearchStep::Partition { index: 0 },
                SearchStep::Partition { index: 1 },
                SearchStep::Partition { index: 2 },
            ]
        );
    }

    #[test]
    fn empty_input_is_a_miss() {
        assert_eq!(linear_search(&[], 1), vec![SearchStep::NotFound]);
        assert_eq!(binary_search(&[], 1), vec![SearchStep::NotFound]);
    }

    proptest! {
        #[test]
        fn linear_compare_count(input in prop::collection::vec(0i64..20, 0..30), target in 0i64..20) {
            let steps = linear_search(&input, target);
            match input.iter().position(|&v| v == target) {
                Some(i) => {
                    prop_assert_eq!(compares(&steps), i + 1);
                    prop_assert_eq!(steps.last(), Some(&SearchStep::Found { index: i }));
                }
                None => {
                    prop_assert_eq!(compares(&steps), input.len());
                    prop_assert_eq!(steps.last(), Some(&SearchStep::NotFound));
                }
            }
        }

        #[test]
        fn binary_compare_count_is_logarithmic(
            mut input in prop::collection::vec(0i64..1000, 1..200),
            target in 0i64..1000,
        ) {
            input.sort();
            let steps = binary_search(&input, target);
            let bound = (usize::BITS - input.len().leading_zeros()) as usize;
            prop_assert!(compares(&steps) <= bound);

            match steps.last() {
                Some(SearchStep::Found { index }) => prop_assert_eq!(input[*index], target),
                Some(SearchStep::NotFound) => prop_assert!(!input.contains(&target)),
                other => prop_assert!(false, "unexpected terminal step {:?}", other),
            }
        }
    }
}
