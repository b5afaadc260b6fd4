//! Algoviz Step Logs
//!
//! Algorithms run to completion against a fixed input and record an ordered
//! log of semantic events. Rendering never happens here: a playback engine
//! replays the log later, one step at a time.
//!
//! # Families
//!
//! - **Sorting**: bubble, selection, insertion, merge and quick sort
//! - **Searching**: linear and binary search
//! - **Array operations**: insertion and deletion by shifting slots
//! - **Graph traversal**: breadth-first and depth-first search
//!
//! Tree steps live here too so that structure models and interpreters share
//! one vocabulary; the tree itself is in `algoviz-structures`.
//!
//! # Determinism
//!
//! Every generator works on a private copy of its input and yields the same
//! sequence for the same input. Tests compare sequences step for step.

mod error;
mod step;
mod sort;
mod search;
mod array;
mod graph;
mod traversal;
pub mod demo;

pub use error::{StepError, Result};
pub use step::{
    ArrayStep, ContainerStep, GraphStep, NodeId, SearchStep, Side, SortStep, TraversalOrder,
    TreeNode, TreeStep, VertexId,
};
pub use sort::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort, SortAlgorithm};
pub use search::{binary_search, linear_search, SearchAlgorithm};
pub use array::{array_deletion, array_insertion};
pub use graph::{Graph, Position};
pub use traversal::{breadth_first, depth_first, TraversalAlgorithm};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_sort_example_log() {
        let steps = bubble_sort(&[5, 3, 1]);
        assert_eq!(
            steps,
            vec![
                SortStep::Compare { a: 0, b: 1 },
                SortStep::Swap { i: 0, j: 1, values: (3, 5) },
                SortStep::Compare { a: 1, b: 2 },
                SortStep::Swap { i: 1, j: 2, values: (1, 5) },
                SortStep::Sorted { index: 2 },
                SortStep::Compare { a: 0, b: 1 },
                SortStep::Swap { i: 0, j: 1, values: (1, 3) },
                SortStep::Sorted { index: 1 },
                SortStep::Sorted { index: 0 },
            ]
        );
    }

    #[test]
    fn demo_graph_shape() {
        let graph = Graph::demo();
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edges().len(), 7);
    }
}
