//! Algoviz Structure Models
//!
//! Mutable data structures whose operations return the step log of what they
//! did. The structure is updated eagerly; playback replays the steps later
//! against a snapshot taken before the operation.
//!
//! # Models
//!
//! - [`Bst`]: arena binary search tree with a node cap, plus [`layout`]
//! - [`Stack`], [`Queue`], [`LinkedList`]: bounded linear containers
//!
//! Refused operations never mutate. A full or duplicate tree insert is a
//! terminal step, while container refusals are [`StructureError`]s whose
//! text is the message shown to the user.

mod error;
mod bst;
mod layout;
mod container;

pub use error::{parse_value, ContainerKind, Result, StructureError};
pub use bst::{Bst, DEFAULT_CAPACITY as TREE_CAPACITY, DEMO_VALUES as TREE_DEMO_VALUES};
pub use layout::{layout, X_SPACING, Y_SPACING};
pub use container::{
    Container, LinkedList, Queue, Stack, LIST_CAPACITY, LIST_SEED, QUEUE_CAPACITY, QUEUE_SEED,
    STACK_CAPACITY, STACK_SEED,
};
