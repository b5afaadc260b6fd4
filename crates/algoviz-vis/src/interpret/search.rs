//! Searching view.

use algoviz_steps::SearchStep;
use serde::Serialize;

use super::{clear_marks, set_mark, value_at, Interpreter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMark {
    Compare,
    Found,
    Partition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub values: Vec<i64>,
    pub target: i64,
    pub marks: Vec<Option<SearchMark>>,
    pub message: String,
}

/// Replays searching steps over a fixed array.
#[derive(Debug, Clone)]
pub struct SearchInterpreter {
    input: Vec<i64>,
    target: i64,
}

impl SearchInterpreter {
    pub fn new(input: Vec<i64>, target: i64) -> Self {
        Self { input, target }
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl Interpreter for SearchInterpreter {
    type Step = SearchStep;
    type View = SearchView;

    fn initial(&self) -> SearchView {
        SearchView {
            values: self.input.clone(),
            target: self.target,
            marks: vec![None; self.input.len()],
            message: format!("Searching for {}", self.target),
        }
    }

    fn apply(&self, mut view: SearchView, step: &SearchStep) -> SearchView {
        // Exclusions accumulate around the element under comparison.
        if !matches!(step, SearchStep::Partition { .. }) {
            clear_marks(&mut view.marks, |m| m == SearchMark::Compare);
        }

        match *step {
            SearchStep::Compare { index } => {
                set_mark(&mut view.marks, index, SearchMark::Compare);
                view.message = format!("Comparing with {}", value_at(&view.values, index));
            }
            SearchStep::Partition { index } => {
                set_mark(&mut view.marks, index, SearchMark::Partition);
            }
            SearchStep::Found { index } => {
                set_mark(&mut view.marks, index, SearchMark::Found);
                view.message = format!("Found {} at index {}!", view.target, index);
            }
            SearchStep::NotFound => {
                view.message = format!("{} not found in the array.", view.target);
            }
        }
        view
    }
}
