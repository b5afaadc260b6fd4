//! Error types for playback sessions.

use algoviz_steps::StepError;
use algoviz_structures::StructureError;
use thiserror::Error;

use crate::catalog::{Affordance, AlgorithmKey};

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while selecting or driving a visualization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No algorithm is registered under this key
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The algorithm is listed but has no visualization yet
    #[error("{0} is not implemented yet")]
    NotImplemented(AlgorithmKey),

    /// Speed must be a positive number of milliseconds
    #[error("Invalid speed: {0} ms")]
    InvalidSpeed(u64),

    /// The selected algorithm does not offer this operation
    #[error("{key} does not support {affordance}")]
    Unsupported {
        key: AlgorithmKey,
        affordance: Affordance,
    },

    /// Step generation rejected its parameters
    #[error(transparent)]
    Steps(#[from] StepError),

    /// A structure refused the operation
    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl Error {
    /// Whether the error comes from user input the operation refused, as
    /// opposed to a misuse of the API.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::Structure(_))
    }
}
