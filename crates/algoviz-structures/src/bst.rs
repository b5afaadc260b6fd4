//! Arena-backed binary search tree.
//!
//! Nodes live in a map keyed by `NodeId`; children and parents are ids, so
//! the tree has no owning pointers. Ids come from a counter that only grows.

use std::collections::BTreeMap;

use algoviz_steps::{NodeId, Side, TraversalOrder, TreeNode, TreeStep};

/// Maximum number of nodes a tree accepts by default.
pub const DEFAULT_CAPACITY: usize = 15;

/// Values the demo tree is seeded with, in insertion order.
pub const DEMO_VALUES: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Binary search tree with distinct values and a node cap.
///
/// Left subtrees hold strictly smaller values, right subtrees strictly
/// larger ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Bst {
    nodes: BTreeMap<NodeId, TreeNode>,
    root: Option<NodeId>,
    next_id: u32,
    capacity: usize,
}

impl Default for Bst {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Bst {
    /// Empty tree holding at most `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: BTreeMap::new(),
            root: None,
            next_id: 0,
            capacity,
        }
    }

    /// Tree built by inserting `values` in order. Values past the cap or
    /// already present are skipped.
    pub fn from_values(capacity: usize, values: &[i64]) -> Self {
        let mut tree = Self::new(capacity);
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    /// The seven-node demo tree.
    pub fn demo() -> Self {
        Self::from_values(DEFAULT_CAPACITY, &DEMO_VALUES)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// All nodes keyed by id.
    pub fn nodes(&self) -> &BTreeMap<NodeId, TreeNode> {
        &self.nodes
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Insert `value`, recording the walk from the root.
    ///
    /// A full tree or a duplicate value yields a single terminal step and
    /// leaves the tree as it was.
    pub fn insert(&mut self, value: i64) -> Vec<TreeStep> {
        let mut steps = Vec::new();

        if self.nodes.len() >= self.capacity {
            steps.push(TreeStep::Full {
                target: value,
                capacity: self.capacity,
            });
            return steps;
        }

        let Some(mut current) = self.root.and_then(|id| self.nodes.get(&id).copied()) else {
            let node = self.allocate(value, None);
            self.root = Some(node.id);
            steps.push(TreeStep::Insert {
                node,
                side: None,
                parent_value: None,
            });
            tracing::debug!(value, "inserted root");
            return steps;
        };

        loop {
            steps.push(TreeStep::Compare {
                node: current.id,
                value: current.value,
                target: value,
            });

            if value == current.value {
                steps.push(TreeStep::Duplicate {
                    node: current.id,
                    target: value,
                });
                return steps;
            }

            let side = if value < current.value {
                Side::Left
            } else {
                Side::Right
            };

            match current.child(side).and_then(|id| self.nodes.get(&id).copied()) {
                Some(next) => {
                    steps.push(TreeStep::Traverse {
                        from: current.id,
                        to: next.id,
                        side,
                        value: current.value,
                        target: value,
                    });
                    current = next;
                }
                None => {
                    let node = self.allocate(value, Some(current.id));
                    self.link(current.id, side, node.id);
                    steps.push(TreeStep::Insert {
                        node,
                        side: Some(side),
                        parent_value: Some(current.value),
                    });
                    tracing::debug!(value, parent = current.value, ?side, "inserted node");
                    return steps;
                }
            }
        }
    }

    /// Look `value` up, recording the walk. Returns the matching node id, if
    /// any, together with the steps.
    pub fn find(&self, value: i64) -> (Option<NodeId>, Vec<TreeStep>) {
        let mut steps = Vec::new();

        let Some(mut current) = self.root.and_then(|id| self.nodes.get(&id)) else {
            steps.push(TreeStep::EmptyTree { target: value });
            return (None, steps);
        };

        loop {
            steps.push(TreeStep::Compare {
                node: current.id,
                value: current.value,
                target: value,
            });

            if value == current.value {
                steps.push(TreeStep::Found {
                    node: current.id,
                    target: value,
                });
                return (Some(current.id), steps);
            }

            let side = if value < current.value {
                Side::Left
            } else {
                Side::Right
            };

            match current.child(side).and_then(|id| self.nodes.get(&id)) {
                Some(next) => {
                    steps.push(TreeStep::Traverse {
                        from: current.id,
                        to: next.id,
                        side,
                        value: current.value,
                        target: value,
                    });
                    current = next;
                }
                None => {
                    steps.push(TreeStep::NotFound { target: value });
                    return (None, steps);
                }
            }
        }
    }

    /// Depth-first traversal in `order`.
    ///
    /// Each node emits `Visit` at its visiting point and `FinishVisit` once
    /// both subtrees are done. The log closes with `TraversalComplete`
    /// carrying the visited values.
    pub fn traversal(&self, order: TraversalOrder) -> Vec<TreeStep> {
        let mut steps = Vec::new();
        let mut values = Vec::with_capacity(self.nodes.len());

        if let Some(root) = self.root {
            self.walk(root, order, &mut steps, &mut values);
        }
        steps.push(TreeStep::TraversalComplete { order, values });
        steps
    }

    /// Values in ascending order.
    pub fn values(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut steps = Vec::new();
        if let Some(root) = self.root {
            self.walk(root, TraversalOrder::InOrder, &mut steps, &mut values);
        }
        values
    }

    fn walk(
        &self,
        id: NodeId,
        order: TraversalOrder,
        steps: &mut Vec<TreeStep>,
        values: &mut Vec<i64>,
    ) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let visit = |steps: &mut Vec<TreeStep>, values: &mut Vec<i64>| {
            steps.push(TreeStep::Visit {
                node: node.id,
                value: node.value,
            });
            values.push(node.value);
        };

        if order == TraversalOrder::PreOrder {
            visit(steps, values);
        }
        if let Some(left) = node.left {
            self.walk(left, order, steps, values);
        }
        if order == TraversalOrder::InOrder {
            visit(steps, values);
        }
        if let Some(right) = node.right {
            self.walk(right, order, steps, values);
        }
        if order == TraversalOrder::PostOrder {
            visit(steps, values);
        }
        steps.push(TreeStep::FinishVisit {
            node: node.id,
            value: node.value,
        });
    }

    fn allocate(&mut self, value: i64, parent: Option<NodeId>) -> TreeNode {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let node = TreeNode {
            parent,
            ..TreeNode::leaf(id, value)
        };
        self.nodes.insert(id, node);
        node
    }

    fn link(&mut self, parent: NodeId, side: Side, child: NodeId) {
        if let Some(parent) = self.nodes.get_mut(&parent) {
            match side {
                Side::Left => parent.left = Some(child),
                Side::Right => parent.right = Some(child),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn messages(steps: &[TreeStep]) -> Vec<String> {
        steps.iter().map(TreeStep::message).collect()
    }

    #[test]
    fn demo_tree_shape() {
        let tree = Bst::demo();
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.values(), vec![20, 30, 40, 50, 60, 70, 80]);

        let root = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(root.value, 50);
        assert_eq!(tree.get(root.left.unwrap()).unwrap().value, 30);
        assert_eq!(tree.get(root.right.unwrap()).unwrap().value, 70);
    }

    #[test]
    fn insert_walks_and_links() {
        let mut tree = Bst::demo();
        let steps = tree.insert(25);
        assert_eq!(
            messages(&steps),
            vec![
                "Comparing with 50",
                "25 < 50, moving left.",
                "Comparing with 30",
                "25 < 30, moving left.",
                "Comparing with 20",
                "Inserting 25 as right child of 20.",
            ]
        );

        let Some(TreeStep::Insert { node, .. }) = steps.last() else {
            panic!("expected insert step");
        };
        assert_eq!(node.id, NodeId(7));
        let parent = tree.get(node.parent.unwrap()).unwrap();
        assert_eq!(parent.value, 20);
        assert_eq!(parent.right, Some(node.id));
    }

    #[test]
    fn insert_into_empty_tree_makes_root() {
        let mut tree = Bst::default();
        let steps = tree.insert(10);
        assert_eq!(messages(&steps), vec!["Tree is empty. Inserting 10 as root."]);
        assert_eq!(tree.root(), Some(NodeId(0)));
    }

    #[test]
    fn duplicate_leaves_tree_unchanged() {
        let mut tree = Bst::demo();
        let before = tree.clone();
        let steps = tree.insert(40);
        assert_eq!(
            steps.last(),
            Some(&TreeStep::Duplicate {
                node: NodeId(4),
                target: 40
            })
        );
        assert_eq!(steps.last().unwrap().message(), "40 already exists.");
        assert_eq!(tree, before);
    }

    #[test]
    fn full_tree_refuses_insert() {
        let mut tree = Bst::from_values(3, &[2, 1, 3]);
        let before = tree.clone();
        let steps = tree.insert(4);
        assert_eq!(steps, vec![TreeStep::Full { target: 4, capacity: 3 }]);
        assert_eq!(steps[0].message(), "Tree is full. Cannot insert 4.");
        assert_eq!(tree, before);
    }

    #[test]
    fn find_reports_hits_and_misses() {
        let tree = Bst::demo();

        let (hit, steps) = tree.find(60);
        assert_eq!(hit, Some(NodeId(5)));
        assert_eq!(
            messages(&steps),
            vec![
                "Comparing with 50",
                "60 > 50, moving right.",
                "Comparing with 70",
                "60 < 70, moving left.",
                "Comparing with 60",
                "Found 60!",
            ]
        );

        let (miss, steps) = tree.find(65);
        assert_eq!(miss, None);
        assert_eq!(steps.last(), Some(&TreeStep::NotFound { target: 65 }));
    }

    #[test]
    fn find_on_empty_tree() {
        let (hit, steps) = Bst::default().find(5);
        assert_eq!(hit, None);
        assert_eq!(messages(&steps), vec!["Tree is empty. Cannot find 5."]);
    }

    #[test]
    fn traversal_orders() {
        let tree = Bst::demo();
        let cases = [
            (TraversalOrder::InOrder, vec![20, 30, 40, 50, 60, 70, 80]),
            (TraversalOrder::PreOrder, vec![50, 30, 20, 40, 70, 60, 80]),
            (TraversalOrder::PostOrder, vec![20, 40, 30, 60, 80, 70, 50]),
        ];
        for (order, expected) in cases {
            let steps = tree.traversal(order);
            let visited: Vec<i64> = steps
                .iter()
                .filter_map(|s| match s {
                    TreeStep::Visit { value, .. } => Some(*value),
                    _ => None,
                })
                .collect();
            assert_eq!(visited, expected);

            let finishes = steps
                .iter()
                .filter(|s| matches!(s, TreeStep::FinishVisit { .. }))
                .count();
            assert_eq!(finishes, 7);
            assert_eq!(
                steps.last(),
                Some(&TreeStep::TraversalComplete { order, values: expected })
            );
        }
    }

    #[test]
    fn pre_order_opening() {
        let steps = Bst::demo().traversal(TraversalOrder::PreOrder);
        assert_eq!(
            messages(&steps[..4]),
            vec!["Visiting 50", "Visiting 30", "Visiting 20", "Finished subtree of 20"]
        );
    }

    #[test]
    fn empty_traversal() {
        let steps = Bst::default().traversal(TraversalOrder::PostOrder);
        assert_eq!(
            steps,
            vec![TreeStep::TraversalComplete {
                order: TraversalOrder::PostOrder,
                values: Vec::new()
            }]
        );
        assert_eq!(steps[0].message(), "Tree is empty.");
    }

    fn check_ordering(tree: &Bst, id: NodeId, low: Option<i64>, high: Option<i64>) -> bool {
        let Some(node) = tree.get(id) else {
            return false;
        };
        if low.is_some_and(|low| node.value <= low) || high.is_some_and(|high| node.value >= high) {
            return false;
        }
        node.left.map_or(true, |l| check_ordering(tree, l, low, Some(node.value)))
            && node.right.map_or(true, |r| check_ordering(tree, r, Some(node.value), high))
    }

    proptest! {
        #[test]
        fn inserts_keep_search_order(values in prop::collection::vec(-50i64..50, 0..40)) {
            let mut tree = Bst::new(DEFAULT_CAPACITY);
            let mut accepted: Vec<i64> = Vec::new();
            for value in values {
                let steps = tree.insert(value);
                if matches!(steps.last(), Some(TreeStep::Insert { .. })) {
                    accepted.push(value);
                }
            }

            prop_assert!(tree.len() <= DEFAULT_CAPACITY);
            if let Some(root) = tree.root() {
                prop_assert!(check_ordering(&tree, root, None, None));
            }

            accepted.sort();
            prop_assert_eq!(tree.values(), accepted.clone());
            for value in accepted {
                let (hit, steps) = tree.find(value);
                prop_assert!(hit.is_some());
                prop_assert_eq!(steps.last(), Some(&TreeStep::Found { node: hit.unwrap(), target: value }));
            }
        }

        #[test]
        fn ids_are_never_reused(values in prop::collection::vec(0i64..100, 1..15)) {
            let tree = Bst::from_values(DEFAULT_CAPACITY, &values);
            let ids: Vec<u32> = tree.nodes().keys().map(|id| id.0).collect();
            let expected: Vec<u32> = (0..tree.len() as u32).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
