//! Fixed, read-only graphs for traversal demos.
//!
//! A `Graph` is built once from an edge list and never mutated afterwards.
//! Traversals only read it.

use crate::error::{Result, StepError};
use crate::step::VertexId;

/// Precomputed screen position of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Undirected graph stored as adjacency lists, plus labels and layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    labels: Vec<String>,
    adjacency: Vec<Vec<VertexId>>,
    edges: Vec<(VertexId, VertexId)>,
    positions: Vec<Position>,
}

impl Graph {
    /// Build a graph from labelled, positioned vertices and an undirected
    /// edge list. Neighbors appear in adjacency lists in edge-list order.
    pub fn new(
        labels: Vec<String>,
        positions: Vec<Position>,
        edges: &[(usize, usize)],
    ) -> Result<Self> {
        let count = labels.len();
        let mut adjacency = vec![Vec::new(); count];
        let mut edge_list = Vec::with_capacity(edges.len());

        for &(from, to) in edges {
            if from >= count || to >= count {
                return Err(StepError::InvalidEdge { from, to, count });
            }
            adjacency[from].push(VertexId(to));
            adjacency[to].push(VertexId(from));
            edge_list.push((VertexId(from), VertexId(to)));
        }

        let mut positions = positions;
        positions.resize(count, Position::default());

        Ok(Self {
            labels,
            adjacency,
            edges: edge_list,
            positions,
        })
    }

    /// The seven-vertex demo graph A..G.
    ///
    /// ```text
    ///         A
    ///       /   \
    ///      B     C
    ///     / \   / \
    ///    D   E-F   G
    /// ```
    pub fn demo() -> Self {
        let labels = ["A", "B", "C", "D", "E", "F", "G"]
            .into_iter()
            .map(String::from)
            .collect();
        let positions = vec![
            Position::new(250.0, 50.0),
            Position::new(150.0, 120.0),
            Position::new(350.0, 120.0),
            Position::new(50.0, 200.0),
            Position::new(150.0, 200.0),
            Position::new(350.0, 200.0),
            Position::new(450.0, 200.0),
        ];
        let edges = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (4, 5)];

        Self {
            labels,
            adjacency: vec![
                vec![VertexId(1), VertexId(2)],
                vec![VertexId(0), VertexId(3), VertexId(4)],
                vec![VertexId(0), VertexId(5), VertexId(6)],
                vec![VertexId(1)],
                vec![VertexId(1), VertexId(5)],
                vec![VertexId(2), VertexId(4)],
                vec![VertexId(2)],
            ],
            edges: edges
                .iter()
                .map(|&(from, to)| (VertexId(from), VertexId(to)))
                .collect(),
            positions,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether `vertex` belongs to the graph.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.adjacency.len()
    }

    /// Neighbors of `vertex` in adjacency order.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edges in the order they were given.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Display label of `vertex`, falling back to its index.
    pub fn label(&self, vertex: VertexId) -> String {
        self.labels
            .get(vertex.index())
            .cloned()
            .unwrap_or_else(|| vertex.to_string())
    }

    /// Layout position of `vertex`.
    pub fn position(&self, vertex: VertexId) -> Option<Position> {
        self.positions.get(vertex.index()).copied()
    }
}
