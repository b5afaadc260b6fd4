//! Error types for structure operations.

use thiserror::Error;

/// Result type for structure operations.
pub type Result<T> = std::result::Result<T, StructureError>;

/// An operation was refused before touching the structure.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// Operand text did not parse as an integer
    #[error("Please enter a valid number.")]
    InvalidNumber { input: String },

    /// The container is at capacity
    #[error("{kind} is full.")]
    Full { kind: ContainerKind, capacity: usize },

    /// Nothing to remove
    #[error("{kind} is empty.")]
    Empty { kind: ContainerKind },
}

/// The linear containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContainerKind {
    Stack,
    Queue,
    LinkedList,
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ContainerKind::Stack => "Stack",
            ContainerKind::Queue => "Queue",
            ContainerKind::LinkedList => "List",
        })
    }
}

/// Parse operand text the way the input box does: surrounding whitespace is
/// ignored, anything else that is not an integer is rejected.
pub fn parse_value(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| StructureError::InvalidNumber {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            StructureError::InvalidNumber { input: "x".into() }.to_string(),
            "Please enter a valid number."
        );
        assert_eq!(
            StructureError::Full { kind: ContainerKind::Stack, capacity: 7 }.to_string(),
            "Stack is full."
        );
        assert_eq!(
            StructureError::Empty { kind: ContainerKind::Queue }.to_string(),
            "Queue is empty."
        );
    }

    #[test]
    fn parses_integers() {
        assert_eq!(parse_value(" 42 "), Ok(42));
        assert_eq!(parse_value("-7"), Ok(-7));
        assert!(parse_value("").is_err());
        assert!(parse_value("4.5").is_err());
        assert!(parse_value("abc").is_err());
    }
}
