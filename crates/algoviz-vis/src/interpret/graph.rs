//! Graph traversal view.

use algoviz_steps::{Graph, GraphStep, VertexId};
use serde::Serialize;

use super::{clear_marks, set_mark, Interpreter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexMark {
    /// Being processed right now
    Visiting,
    /// Neighbor scan finished
    Visited,
    /// Waiting in the queue or stack
    InFrontier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMark {
    /// Followed by the current step
    Active,
    /// Part of the traversal tree
    Traversed,
}

/// Whether the frontier behaves as a FIFO queue or a LIFO stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    Queue,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub from: VertexId,
    pub to: VertexId,
    pub mark: Option<EdgeMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub labels: Vec<String>,
    pub vertices: Vec<Option<VertexMark>>,
    pub edges: Vec<EdgeView>,
    /// Frontier contents, front (queue) or bottom (stack) first
    pub frontier: Vec<VertexId>,
    pub frontier_kind: FrontierKind,
    /// Edge index each vertex was last reached through
    #[serde(skip)]
    discovered_by: Vec<Option<usize>>,
    pub message: String,
}

/// Replays traversal steps against a fixed graph.
#[derive(Debug, Clone)]
pub struct GraphInterpreter {
    graph: Graph,
    frontier_kind: FrontierKind,
}

impl GraphInterpreter {
    pub fn new(graph: Graph, frontier_kind: FrontierKind) -> Self {
        Self {
            graph,
            frontier_kind,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn edge_index(&self, a: VertexId, b: VertexId) -> Option<usize> {
        self.graph
            .edges()
            .iter()
            .position(|&(from, to)| (from, to) == (a, b) || (from, to) == (b, a))
    }
}

impl Interpreter for GraphInterpreter {
    type Step = GraphStep;
    type View = GraphView;

    fn initial(&self) -> GraphView {
        let count = self.graph.vertex_count();
        GraphView {
            labels: (0..count).map(|v| self.graph.label(VertexId(v))).collect(),
            vertices: vec![None; count],
            edges: self
                .graph
                .edges()
                .iter()
                .map(|&(from, to)| EdgeView {
                    from,
                    to,
                    mark: None,
                })
                .collect(),
            frontier: Vec::new(),
            frontier_kind: self.frontier_kind,
            discovered_by: vec![None; count],
            message: match self.frontier_kind {
                FrontierKind::Queue => "Breadth-first search from A.".to_string(),
                FrontierKind::Stack => "Depth-first search from A.".to_string(),
            },
        }
    }

    fn apply(&self, mut view: GraphView, step: &GraphStep) -> GraphView {
        clear_marks(&mut view.vertices, |m| m == VertexMark::Visiting);
        for edge in &mut view.edges {
            if edge.mark == Some(EdgeMark::Active) {
                edge.mark = None;
            }
        }

        let label = self.graph.label(step.vertex());
        view.message = match *step {
            GraphStep::Enqueue { vertex } | GraphStep::Push { vertex } => {
                view.frontier.push(vertex);
                set_mark(&mut view.vertices, vertex.index(), VertexMark::InFrontier);
                match step {
                    GraphStep::Enqueue { .. } => format!("Enqueue {label}"),
                    _ => format!("Push {label}"),
                }
            }
            GraphStep::Dequeue { .. } => {
                if !view.frontier.is_empty() {
                    view.frontier.remove(0);
                }
                format!("Dequeue {label}")
            }
            GraphStep::Pop { .. } => {
                view.frontier.pop();
                format!("Pop {label}")
            }
            GraphStep::Visit { vertex } => {
                set_mark(&mut view.vertices, vertex.index(), VertexMark::Visiting);
                let discovered = view.discovered_by.get(vertex.index()).copied().flatten();
                if let Some(edge) = discovered.and_then(|i| view.edges.get_mut(i)) {
                    edge.mark = Some(EdgeMark::Traversed);
                }
                format!("Visiting {label}")
            }
            GraphStep::Edge { from, to } => {
                if let Some(index) = self.edge_index(from, to) {
                    if let Some(edge) = view.edges.get_mut(index) {
                        if edge.mark != Some(EdgeMark::Traversed) {
                            edge.mark = Some(EdgeMark::Active);
                        }
                    }
                    if let Some(slot) = view.discovered_by.get_mut(to.index()) {
                        *slot = Some(index);
                    }
                }
                format!("Exploring edge {}-{label}", self.graph.label(from))
            }
            GraphStep::FinishNode { vertex } => {
                set_mark(&mut view.vertices, vertex.index(), VertexMark::Visited);
                format!("Finished {label}")
            }
        };
        view
    }
}
