//! Screen positions for tree nodes.
//!
//! Layout is a projection of the logical tree and is recomputed whenever the
//! node set changes. Nodes are spread by in-order rank horizontally and by
//! depth vertically, then the whole tree is centered in a container sized
//! for a full tree.

use std::collections::BTreeMap;

use algoviz_steps::{NodeId, Position, TreeNode};

/// Horizontal distance between in-order neighbors.
pub const X_SPACING: f32 = 70.0;

/// Vertical distance between depths.
pub const Y_SPACING: f32 = 70.0;

/// Position every node reachable from `root`.
pub fn layout(
    nodes: &BTreeMap<NodeId, TreeNode>,
    root: Option<NodeId>,
    capacity: usize,
) -> BTreeMap<NodeId, Position> {
    let mut positions = BTreeMap::new();
    let mut rank = 0usize;
    if let Some(root) = root {
        place(nodes, root, 0, &mut rank, &mut positions);
    }

    if rank == 0 {
        return positions;
    }

    // The leftmost node sits at x = 0, so the tree spans (rank - 1) slots.
    let tree_width = (rank - 1) as f32 * X_SPACING;
    let container_width = capacity.saturating_sub(1) as f32 * X_SPACING;
    let offset = (container_width - tree_width) / 2.0;
    for position in positions.values_mut() {
        position.x += offset;
    }
    positions
}

fn place(
    nodes: &BTreeMap<NodeId, TreeNode>,
    id: NodeId,
    depth: usize,
    rank: &mut usize,
    positions: &mut BTreeMap<NodeId, Position>,
) {
    let Some(node) = nodes.get(&id) else {
        return;
    };
    if let Some(left) = node.left {
        place(nodes, left, depth + 1, rank, positions);
    }
    positions.insert(
        id,
        Position::new(*rank as f32 * X_SPACING, depth as f32 * Y_SPACING),
    );
    *rank += 1;
    if let Some(right) = node.right {
        place(nodes, right, depth + 1, rank, positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::{Bst, DEFAULT_CAPACITY};

    #[test]
    fn demo_tree_is_centered() {
        let tree = Bst::demo();
        let positions = layout(tree.nodes(), tree.root(), DEFAULT_CAPACITY);
        assert_eq!(positions.len(), 7);

        // 15-slot container is 980 wide, the 7-node tree 420; offset 280.
        let root = positions[&tree.root().unwrap()];
        assert_eq!(root, Position::new(280.0 + 3.0 * 70.0, 0.0));

        let leftmost = positions.values().map(|p| p.x).fold(f32::MAX, f32::min);
        let rightmost = positions.values().map(|p| p.x).fold(f32::MIN, f32::max);
        assert_eq!(leftmost, 280.0);
        assert_eq!(rightmost, 700.0);
    }

    #[test]
    fn depth_drives_y() {
        let tree = Bst::from_values(DEFAULT_CAPACITY, &[1, 2, 3]);
        let positions = layout(tree.nodes(), tree.root(), DEFAULT_CAPACITY);
        let ys: Vec<f32> = tree
            .nodes()
            .keys()
            .map(|id| positions[id].y)
            .collect();
        assert_eq!(ys, vec![0.0, 70.0, 140.0]);
    }

    #[test]
    fn in_order_ranks_increase_left_to_right() {
        let tree = Bst::from_values(DEFAULT_CAPACITY, &[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        let positions = layout(tree.nodes(), tree.root(), DEFAULT_CAPACITY);
        let mut by_value: Vec<(i64, f32)> = tree
            .nodes()
            .values()
            .map(|n| (n.value, positions[&n.id].x))
            .collect();
        by_value.sort_by_key(|(value, _)| *value);
        assert!(by_value.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn empty_tree_has_no_positions() {
        let tree = Bst::default();
        assert!(layout(tree.nodes(), tree.root(), DEFAULT_CAPACITY).is_empty());
    }
}
