//! Sorting view.

use algoviz_steps::SortStep;
use serde::Serialize;

use super::{clear_marks, set_mark, value_at, Interpreter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMark {
    Compare,
    Swap,
    Sorted,
    Pivot,
    Partition,
}

impl SortMark {
    fn is_transient(self) -> bool {
        matches!(self, SortMark::Compare | SortMark::Swap | SortMark::Pivot)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortView {
    pub values: Vec<i64>,
    pub marks: Vec<Option<SortMark>>,
    pub message: String,
}

/// Replays sorting steps over the unsorted input.
#[derive(Debug, Clone)]
pub struct SortInterpreter {
    input: Vec<i64>,
}

impl SortInterpreter {
    pub fn new(input: Vec<i64>) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }
}

impl Interpreter for SortInterpreter {
    type Step = SortStep;
    type View = SortView;

    fn initial(&self) -> SortView {
        SortView {
            values: self.input.clone(),
            marks: vec![None; self.input.len()],
            message: "Press play to start sorting.".to_string(),
        }
    }

    fn apply(&self, mut view: SortView, step: &SortStep) -> SortView {
        clear_marks(&mut view.marks, SortMark::is_transient);
        step.apply_to(&mut view.values);

        view.message = match *step {
            SortStep::Compare { a, b } => {
                set_mark(&mut view.marks, a, SortMark::Compare);
                set_mark(&mut view.marks, b, SortMark::Compare);
                format!(
                    "Comparing {} and {}",
                    value_at(&view.values, a),
                    value_at(&view.values, b)
                )
            }
            SortStep::Swap { i, j, values: (vi, vj) } => {
                set_mark(&mut view.marks, i, SortMark::Swap);
                set_mark(&mut view.marks, j, SortMark::Swap);
                format!("Swapping {vj} and {vi}")
            }
            SortStep::Set { index, value } => {
                set_mark(&mut view.marks, index, SortMark::Swap);
                format!("Writing {value} at position {index}")
            }
            SortStep::Sorted { index } => {
                set_mark(&mut view.marks, index, SortMark::Sorted);
                format!("{} is in its final position", value_at(&view.values, index))
            }
            SortStep::Pivot { index } => {
                set_mark(&mut view.marks, index, SortMark::Pivot);
                format!("Pivot is {}", value_at(&view.values, index))
            }
            SortStep::Partition { low, high } => {
                clear_marks(&mut view.marks, |m| m == SortMark::Partition);
                for index in low..=high {
                    if view.marks.get(index).copied().flatten() != Some(SortMark::Sorted) {
                        set_mark(&mut view.marks, index, SortMark::Partition);
                    }
                }
                format!("Working on positions {low} to {high}")
            }
        };

        if view.marks.iter().all(|m| *m == Some(SortMark::Sorted)) && !view.values.is_empty() {
            view.message = "Array is sorted.".to_string();
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_steps::{bubble_sort, quick_sort};

    #[test]
    fn bubble_example_ends_sorted() {
        let interpreter = SortInterpreter::new(vec![5, 3, 1]);
        let steps = bubble_sort(interpreter.input());
        let view = interpreter.replay(&steps);
        assert_eq!(view.values, vec![1, 3, 5]);
        assert!(view.marks.iter().all(|m| *m == Some(SortMark::Sorted)));
        assert_eq!(view.message, "Array is sorted.");
    }

    #[test]
    fn transient_marks_clear_on_next_step() {
        let interpreter = SortInterpreter::new(vec![5, 3, 1]);
        let view = interpreter.initial();
        let view = interpreter.apply(view, &SortStep::Compare { a: 0, b: 1 });
        assert_eq!(view.marks[0], Some(SortMark::Compare));
        assert_eq!(view.message, "Comparing 5 and 3");

        let view = interpreter.apply(view, &SortStep::Sorted { index: 2 });
        assert_eq!(view.marks, vec![None, None, Some(SortMark::Sorted)]);
    }

    #[test]
    fn partition_skips_sorted_and_replaces_previous_range() {
        let interpreter = SortInterpreter::new(vec![4, 3, 2, 1]);
        let mut view = interpreter.initial();
        view = interpreter.apply(view, &SortStep::Sorted { index: 0 });
        view = interpreter.apply(view, &SortStep::Partition { low: 0, high: 3 });
        assert_eq!(
            view.marks,
            vec![
                Some(SortMark::Sorted),
                Some(SortMark::Partition),
                Some(SortMark::Partition),
                Some(SortMark::Partition),
            ]
        );

        view = interpreter.apply(view, &SortStep::Partition { low: 2, high: 3 });
        assert_eq!(view.marks[1], None);
        assert_eq!(view.marks[2], Some(SortMark::Partition));
    }

    #[test]
    fn quick_sort_replay_matches_sorted_input() {
        let input = vec![9, 4, 7, 1, 8, 2];
        let interpreter = SortInterpreter::new(input.clone());
        let view = interpreter.replay(&quick_sort(&input));
        let mut expected = input;
        expected.sort();
        assert_eq!(view.values, expected);
    }
}
