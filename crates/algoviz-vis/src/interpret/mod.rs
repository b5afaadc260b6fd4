//! Step interpreters: pure reducers from `(view, step)` to the next view.
//!
//! A view is never authoritative. Folding the first `k` steps from
//! [`Interpreter::initial`] always reproduces the view the timeline shows at
//! index `k`, which is what makes seeking and stepping backwards possible.

mod sort;
mod search;
mod array;
mod graph;
mod tree;
mod container;

use std::fmt::Debug;

use serde::Serialize;

pub use sort::{SortInterpreter, SortMark, SortView};
pub use search::{SearchInterpreter, SearchMark, SearchView};
pub use array::{ArrayInterpreter, ArrayMark, ArrayView};
pub use graph::{EdgeMark, EdgeView, FrontierKind, GraphInterpreter, GraphView, VertexMark};
pub use tree::{TreeInterpreter, TreeMark, TreeView};
pub use container::{ContainerInterpreter, ContainerView};

/// Status line of a structure before any operation runs.
pub const IDLE_MESSAGE: &str = "Select an operation.";

/// Turns a step log into views.
pub trait Interpreter {
    type Step: Clone + Debug;
    type View: Clone + PartialEq + Debug;

    /// View before any step is applied.
    fn initial(&self) -> Self::View;

    /// View after `step`, given the view before it.
    fn apply(&self, view: Self::View, step: &Self::Step) -> Self::View;

    /// Fold `steps` from the initial view.
    fn replay(&self, steps: &[Self::Step]) -> Self::View {
        steps
            .iter()
            .fold(self.initial(), |view, step| self.apply(view, step))
    }
}

/// Any family's view, as handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum View {
    Sort(SortView),
    Search(SearchView),
    Array(ArrayView),
    Graph(GraphView),
    Tree(TreeView),
    Container(ContainerView),
}

impl View {
    /// Status line of the view.
    pub fn message(&self) -> &str {
        match self {
            View::Sort(v) => &v.message,
            View::Search(v) => &v.message,
            View::Array(v) => &v.message,
            View::Graph(v) => &v.message,
            View::Tree(v) => &v.message,
            View::Container(v) => &v.message,
        }
    }
}

macro_rules! impl_into_view {
    ($($view:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$view> for View {
                fn from(view: $view) -> Self {
                    View::$variant(view)
                }
            }
        )*
    };
}

impl_into_view! {
    SortView => Sort,
    SearchView => Search,
    ArrayView => Array,
    GraphView => Graph,
    TreeView => Tree,
    ContainerView => Container,
}

/// Drop every mark for which `transient` holds.
fn clear_marks<M: Copy>(marks: &mut [Option<M>], transient: impl Fn(M) -> bool) {
    for mark in marks.iter_mut() {
        if mark.is_some_and(&transient) {
            *mark = None;
        }
    }
}

/// Set the mark at `index`, ignoring indices outside the view.
fn set_mark<M>(marks: &mut [Option<M>], index: usize, mark: M) {
    if let Some(slot) = marks.get_mut(index) {
        *slot = Some(mark);
    }
}

/// Value at `index` for messages, or `?` when out of range.
fn value_at(values: &[i64], index: usize) -> String {
    values
        .get(index)
        .map_or_else(|| "?".to_string(), i64::to_string)
}
