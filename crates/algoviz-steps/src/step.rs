//! The step vocabulary, one closed enum per algorithm family.
//!
//! Steps are immutable records. Each carries only the indices, ids and values
//! an interpreter needs to re-derive what the screen should show.

use std::fmt;

/// A vertex of a traversal graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub usize);

impl VertexId {
    /// Position of this vertex in adjacency and layout tables.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena id of a tree node. Ids are handed out monotonically and never reused
/// within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sorting events.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum SortStep {
    /// Two positions are about to be compared
    Compare { a: usize, b: usize },
    /// Positions `i` and `j` exchange contents; `values` are the new values at `(i, j)`
    Swap { i: usize, j: usize, values: (i64, i64) },
    /// A single position is overwritten
    Set { index: usize, value: i64 },
    /// A position holds its final value
    Sorted { index: usize },
    /// A pivot was chosen
    Pivot { index: usize },
    /// The active sub-range, inclusive on both ends
    Partition { low: usize, high: usize },
}

impl SortStep {
    /// Apply the array mutation carried by this step, if any.
    pub fn apply_to(&self, values: &mut [i64]) {
        match *self {
            SortStep::Swap { i, j, values: (vi, vj) } => {
                values[i] = vi;
                values[j] = vj;
            }
            SortStep::Set { index, value } => values[index] = value,
            SortStep::Compare { .. }
            | SortStep::Sorted { .. }
            | SortStep::Pivot { .. }
            | SortStep::Partition { .. } => {}
        }
    }
}

/// Searching events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum SearchStep {
    /// The element at `index` is examined
    Compare { index: usize },
    /// `index` is excluded from the remaining search range
    Partition { index: usize },
    /// The target sits at `index`
    Found { index: usize },
    /// The target is absent
    NotFound,
}

impl SearchStep {
    /// Index the step refers to; `None` for a miss.
    pub fn index(&self) -> Option<usize> {
        match *self {
            SearchStep::Compare { index }
            | SearchStep::Partition { index }
            | SearchStep::Found { index } => Some(index),
            SearchStep::NotFound => None,
        }
    }

    /// Whether this step ends the search.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStep::Found { .. } | SearchStep::NotFound)
    }
}

/// Array insertion/deletion events. Shifts move one slot at a time, the way
/// the textbook loop does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ArrayStep {
    /// Mark the slot an operation targets
    Highlight { index: usize },
    /// Copy slot `index` into `index + 1`, growing the array when needed
    ShiftRight { index: usize },
    /// Copy slot `index` into `index - 1`
    ShiftLeft { index: usize },
    /// Write `value` into slot `index`; an index one past the end appends
    Insert { index: usize, value: i64 },
    /// Drop slot `index`
    Delete { index: usize },
}

impl ArrayStep {
    /// Apply the slot mutation carried by this step, if any.
    pub fn apply_to(&self, values: &mut Vec<i64>) {
        match *self {
            ArrayStep::Highlight { .. } => {}
            ArrayStep::ShiftRight { index } => {
                let moved = values[index];
                if index + 1 == values.len() {
                    values.push(moved);
                } else {
                    values[index + 1] = moved;
                }
            }
            ArrayStep::ShiftLeft { index } => values[index - 1] = values[index],
            ArrayStep::Insert { index, value } if index == values.len() => values.push(value),
            ArrayStep::Insert { index, value } => values[index] = value,
            ArrayStep::Delete { index } => {
                values.remove(index);
            }
        }
    }
}

/// Graph traversal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum GraphStep {
    /// BFS: vertex appended to the queue on first encounter
    Enqueue { vertex: VertexId },
    /// BFS: vertex removed from the queue front
    Dequeue { vertex: VertexId },
    /// DFS: vertex pushed onto the stack
    Push { vertex: VertexId },
    /// DFS: vertex popped from the stack
    Pop { vertex: VertexId },
    /// Vertex processed for the first time
    Visit { vertex: VertexId },
    /// Edge followed towards a not-yet-visited neighbor
    Edge { from: VertexId, to: VertexId },
    /// Neighbor scan of a vertex completed
    FinishNode { vertex: VertexId },
}

impl GraphStep {
    /// Vertex the step is about. Edges report their target.
    pub fn vertex(&self) -> VertexId {
        match *self {
            GraphStep::Enqueue { vertex }
            | GraphStep::Dequeue { vertex }
            | GraphStep::Push { vertex }
            | GraphStep::Pop { vertex }
            | GraphStep::Visit { vertex }
            | GraphStep::FinishNode { vertex } => vertex,
            GraphStep::Edge { to, .. } => to,
        }
    }
}

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn word(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Depth-first visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

impl TraversalOrder {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
        }
    }
}

/// Logical record of one tree node. Layout coordinates are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl TreeNode {
    /// A detached leaf.
    pub const fn leaf(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Child id on the given side.
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Binary search tree events.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TreeStep {
    /// `target` is compared with the node holding `value`
    Compare { node: NodeId, value: i64, target: i64 },
    /// Walk from `from` (holding `value`) into its child `to`
    Traverse {
        from: NodeId,
        to: NodeId,
        side: Side,
        value: i64,
        target: i64,
    },
    /// Search hit
    Found { node: NodeId, target: i64 },
    /// Search fell off the tree
    NotFound { target: i64 },
    /// Search on a tree with no root
    EmptyTree { target: i64 },
    /// Insert of a value the tree already holds; the tree is unchanged
    Duplicate { node: NodeId, target: i64 },
    /// Insert refused because the tree is at capacity
    Full { target: i64, capacity: usize },
    /// A node was created and linked. `parent_value` is `None` for a new root.
    Insert {
        node: TreeNode,
        side: Option<Side>,
        parent_value: Option<i64>,
    },
    /// Node reached its visiting point in a traversal
    Visit { node: NodeId, value: i64 },
    /// Subtree rooted at the node is done
    FinishVisit { node: NodeId, value: i64 },
    /// Traversal finished; `values` is the visiting order
    TraversalComplete { order: TraversalOrder, values: Vec<i64> },
}

impl TreeStep {
    /// Text shown alongside the step.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether this step closes an operation.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TreeStep::Found { .. }
                | TreeStep::NotFound { .. }
                | TreeStep::EmptyTree { .. }
                | TreeStep::Duplicate { .. }
                | TreeStep::Full { .. }
                | TreeStep::Insert { .. }
                | TreeStep::TraversalComplete { .. }
        )
    }
}

impl fmt::Display for TreeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStep::Compare { value, .. } => write!(f, "Comparing with {value}"),
            TreeStep::Traverse {
                side: Side::Left,
                value,
                target,
                ..
            } => write!(f, "{target} < {value}, moving left."),
            TreeStep::Traverse {
                side: Side::Right,
                value,
                target,
                ..
            } => write!(f, "{target} > {value}, moving right."),
            TreeStep::Found { target, .. } => write!(f, "Found {target}!"),
            TreeStep::NotFound { target } => write!(f, "{target} not found."),
            TreeStep::EmptyTree { target } => write!(f, "Tree is empty. Cannot find {target}."),
            TreeStep::Duplicate { target, .. } => write!(f, "{target} already exists."),
            TreeStep::Full { target, .. } => write!(f, "Tree is full. Cannot insert {target}."),
            TreeStep::Insert {
                node,
                side: Some(side),
                parent_value: Some(parent),
            } => write!(
                f,
                "Inserting {} as {} child of {}.",
                node.value,
                side.word(),
                parent
            ),
            TreeStep::Insert { node, .. } => {
                write!(f, "Tree is empty. Inserting {} as root.", node.value)
            }
            TreeStep::Visit { value, .. } => write!(f, "Visiting {value}"),
            TreeStep::FinishVisit { value, .. } => write!(f, "Finished subtree of {value}"),
            TreeStep::TraversalComplete { values, .. } if values.is_empty() => {
                write!(f, "Tree is empty.")
            }
            TreeStep::TraversalComplete { .. } => write!(f, "Traversal complete."),
        }
    }
}

/// Stack, queue and linked-list events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ContainerStep {
    /// Point at a slot: the element about to leave, or a list node being walked
    Focus { index: usize },
    /// `value` enters at `index`
    Insert { index: usize, value: i64 },
    /// `value` leaves from `index`
    Remove { index: usize, value: i64 },
}

impl ContainerStep {
    /// Value that left the container, if this step removed one.
    pub fn removed(&self) -> Option<i64> {
        match *self {
            ContainerStep::Remove { value, .. } => Some(value),
            ContainerStep::Focus { .. } | ContainerStep::Insert { .. } => None,
        }
    }

    /// Apply the mutation carried by this step, if any.
    pub fn apply_to(&self, items: &mut Vec<i64>) {
        match *self {
            ContainerStep::Focus { .. } => {}
            ContainerStep::Insert { index, value } => items.insert(index, value),
            ContainerStep::Remove { index, .. } => {
                items.remove(index);
            }
        }
    }
}
