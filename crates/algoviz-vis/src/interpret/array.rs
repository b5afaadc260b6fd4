//! Array insertion/deletion view.

use algoviz_steps::ArrayStep;
use serde::Serialize;

use super::{clear_marks, set_mark, value_at, Interpreter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayMark {
    Highlight,
    Shifted,
    Inserted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayView {
    pub values: Vec<i64>,
    pub marks: Vec<Option<ArrayMark>>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ArrayInterpreter {
    input: Vec<i64>,
}

impl ArrayInterpreter {
    pub fn new(input: Vec<i64>) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }
}

impl Interpreter for ArrayInterpreter {
    type Step = ArrayStep;
    type View = ArrayView;

    fn initial(&self) -> ArrayView {
        ArrayView {
            values: self.input.clone(),
            marks: vec![None; self.input.len()],
            message: "Press play to run the operation.".to_string(),
        }
    }

    fn apply(&self, mut view: ArrayView, step: &ArrayStep) -> ArrayView {
        // The slot targeted for deletion stays highlighted until it is gone.
        clear_marks(&mut view.marks, |m| m == ArrayMark::Shifted);

        view.message = match *step {
            ArrayStep::Highlight { index } => {
                set_mark(&mut view.marks, index, ArrayMark::Highlight);
                format!("Deleting {} at index {}", value_at(&view.values, index), index)
            }
            ArrayStep::ShiftRight { index } => {
                let moved = value_at(&view.values, index);
                step.apply_to(&mut view.values);
                view.marks.resize(view.values.len(), None);
                set_mark(&mut view.marks, index + 1, ArrayMark::Shifted);
                format!("Shifting {moved} right")
            }
            ArrayStep::ShiftLeft { index } => {
                let moved = value_at(&view.values, index);
                step.apply_to(&mut view.values);
                set_mark(&mut view.marks, index - 1, ArrayMark::Shifted);
                format!("Shifting {moved} left")
            }
            ArrayStep::Insert { index, value } => {
                step.apply_to(&mut view.values);
                view.marks.resize(view.values.len(), None);
                set_mark(&mut view.marks, index, ArrayMark::Inserted);
                format!("Inserted {value} at index {index}")
            }
            ArrayStep::Delete { index } => {
                step.apply_to(&mut view.values);
                if index < view.marks.len() {
                    view.marks.remove(index);
                }
                clear_marks(&mut view.marks, |m| m == ArrayMark::Highlight);
                format!("Deleted. {} elements remain.", view.values.len())
            }
        };
        view
    }
}
