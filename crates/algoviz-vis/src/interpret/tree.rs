//! Binary search tree view.

use std::collections::BTreeMap;

use algoviz_steps::{NodeId, Position, Side, TreeNode, TreeStep};
use algoviz_structures::{layout, Bst};
use serde::Serialize;

use super::{Interpreter, IDLE_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeMark {
    Compare,
    Found,
    Path,
    Visited,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeView {
    pub nodes: BTreeMap<NodeId, TreeNode>,
    pub root: Option<NodeId>,
    pub positions: BTreeMap<NodeId, Position>,
    pub marks: BTreeMap<NodeId, TreeMark>,
    /// Parent-to-child edges walked so far
    pub path: Vec<(NodeId, NodeId)>,
    /// Values visited by a traversal, in order
    pub traversal: Vec<i64>,
    pub message: String,
}

/// Replays tree steps against the tree as it was before the operation.
#[derive(Debug, Clone)]
pub struct TreeInterpreter {
    nodes: BTreeMap<NodeId, TreeNode>,
    root: Option<NodeId>,
    capacity: usize,
}

impl TreeInterpreter {
    /// Snapshot `tree` as the starting point for replay.
    pub fn snapshot(tree: &Bst) -> Self {
        Self {
            nodes: tree.nodes().clone(),
            root: tree.root(),
            capacity: tree.capacity(),
        }
    }
}

impl Interpreter for TreeInterpreter {
    type Step = TreeStep;
    type View = TreeView;

    fn initial(&self) -> TreeView {
        TreeView {
            nodes: self.nodes.clone(),
            root: self.root,
            positions: layout(&self.nodes, self.root, self.capacity),
            marks: BTreeMap::new(),
            path: Vec::new(),
            traversal: Vec::new(),
            message: IDLE_MESSAGE.to_string(),
        }
    }

    fn apply(&self, mut view: TreeView, step: &TreeStep) -> TreeView {
        view.marks.retain(|_, mark| *mark != TreeMark::Compare);
        view.message = step.message();

        match step {
            TreeStep::Compare { node, .. } => {
                view.marks.insert(*node, TreeMark::Compare);
            }
            TreeStep::Traverse { from, to, .. } => {
                view.marks.insert(*from, TreeMark::Path);
                view.path.push((*from, *to));
            }
            TreeStep::Found { node, .. } => {
                view.marks.insert(*node, TreeMark::Found);
            }
            TreeStep::Insert { node, side, .. } => {
                view.nodes.insert(node.id, *node);
                match (node.parent, side) {
                    (Some(parent), Some(side)) => {
                        if let Some(parent) = view.nodes.get_mut(&parent) {
                            match side {
                                Side::Left => parent.left = Some(node.id),
                                Side::Right => parent.right = Some(node.id),
                            }
                        }
                    }
                    _ => view.root = Some(node.id),
                }
                view.positions = layout(&view.nodes, view.root, self.capacity);
            }
            TreeStep::Visit { node, value } => {
                view.marks.insert(*node, TreeMark::Visited);
                view.traversal.push(*value);
            }
            TreeStep::FinishVisit { node, .. } => {
                view.marks.remove(node);
            }
            TreeStep::TraversalComplete { values, .. } => {
                view.traversal = values.clone();
            }
            TreeStep::NotFound { .. }
            | TreeStep::EmptyTree { .. }
            | TreeStep::Duplicate { .. }
            | TreeStep::Full { .. } => {}
        }
        view
    }
}
