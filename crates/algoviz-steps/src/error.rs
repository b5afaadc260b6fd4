//! Error types for step generation.

use thiserror::Error;

/// Result type for step generation.
pub type Result<T> = std::result::Result<T, StepError>;

/// Errors raised when a generator is handed parameters it cannot run with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// An array operation addressed a slot outside the array
    #[error("index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A traversal was asked to start from a vertex the graph does not have
    #[error("vertex {vertex} does not exist in a graph of {count} vertices")]
    UnknownVertex { vertex: usize, count: usize },

    /// An edge references a vertex outside the graph
    #[error("edge ({from}, {to}) references a vertex outside 0..{count}")]
    InvalidEdge { from: usize, to: usize, count: usize },
}
