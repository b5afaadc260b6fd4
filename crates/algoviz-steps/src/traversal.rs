//! Breadth-first and depth-first traversal step generators.

use std::collections::VecDeque;

use crate::error::{Result, StepError};
use crate::graph::Graph;
use crate::step::{GraphStep, VertexId};

/// Graph traversal algorithms with step generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalAlgorithm {
    BreadthFirst,
    DepthFirst,
}

impl TraversalAlgorithm {
    /// Traverse `graph` from `start` and return the step log.
    pub fn generate(self, graph: &Graph, start: VertexId) -> Result<Vec<GraphStep>> {
        match self {
            TraversalAlgorithm::BreadthFirst => breadth_first(graph, start),
            TraversalAlgorithm::DepthFirst => depth_first(graph, start),
        }
    }

    /// Whether the frontier is a FIFO queue (BFS) or a LIFO stack (DFS).
    pub fn uses_queue(self) -> bool {
        matches!(self, TraversalAlgorithm::BreadthFirst)
    }
}

fn check_start(graph: &Graph, start: VertexId) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(StepError::UnknownVertex {
            vertex: start.index(),
            count: graph.vertex_count(),
        })
    }
}

/// Breadth-first search. Vertices are marked when enqueued, so each is
/// enqueued, visited and finished exactly once.
pub fn breadth_first(graph: &Graph, start: VertexId) -> Result<Vec<GraphStep>> {
    check_start(graph, start)?;

    let mut steps = Vec::new();
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);
    steps.push(GraphStep::Enqueue { vertex: start });

    while let Some(u) = queue.pop_front() {
        steps.push(GraphStep::Dequeue { vertex: u });
        steps.push(GraphStep::Visit { vertex: u });

        for &v in graph.neighbors(u) {
            if !visited[v.index()] {
                visited[v.index()] = true;
                steps.push(GraphStep::Edge { from: u, to: v });
                queue.push_back(v);
                steps.push(GraphStep::Enqueue { vertex: v });
            }
        }
        steps.push(GraphStep::FinishNode { vertex: u });
    }

    tracing::debug!(start = %start, steps = steps.len(), "generated breadth-first steps");
    Ok(steps)
}

/// Depth-first search with an explicit stack.
///
/// Neighbors are pushed in reverse adjacency order so they pop in ascending
/// order. Visited-ness is checked at pop time, so a vertex can sit on the
/// stack more than once; a stale pop skips `Visit` but still emits
/// `FinishNode`.
pub fn depth_first(graph: &Graph, start: VertexId) -> Result<Vec<GraphStep>> {
    check_start(graph, start)?;

    let mut steps = Vec::new();
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    steps.push(GraphStep::Push { vertex: start });

    while let Some(u) = stack.pop() {
        steps.push(GraphStep::Pop { vertex: u });

        if !visited[u.index()] {
            visited[u.index()] = true;
            steps.push(GraphStep::Visit { vertex: u });

            for &v in graph.neighbors(u).iter().rev() {
                if !visited[v.index()] {
                    steps.push(GraphStep::Edge { from: u, to: v });
                    stack.push(v);
                    steps.push(GraphStep::Push { vertex: v });
                }
            }
        }
        steps.push(GraphStep::FinishNode { vertex: u });
    }

    tracing::debug!(start = %start, steps = steps.len(), "generated depth-first steps");
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(steps: &[GraphStep], pred: impl Fn(&GraphStep) -> bool) -> usize {
        steps.iter().filter(|s| pred(*s)).count()
    }

    fn visit_order(steps: &[GraphStep]) -> Vec<usize> {
        steps
            .iter()
            .filter_map(|s| match s {
                GraphStep::Visit { vertex } => Some(vertex.index()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bfs_visits_each_vertex_once() {
        let graph = Graph::demo();
        let steps = breadth_first(&graph, VertexId(0)).unwrap();

        assert_eq!(visit_order(&steps), vec![0, 1, 2, 3, 4, 5, 6]);
        for v in 0..graph.vertex_count() {
            let vertex = VertexId(v);
            assert_eq!(count(&steps, |s| *s == GraphStep::Visit { vertex }), 1);
            assert_eq!(count(&steps, |s| *s == GraphStep::FinishNode { vertex }), 1);
            assert_eq!(count(&steps, |s| *s == GraphStep::Enqueue { vertex }), 1);
        }
        assert_eq!(
            steps.last(),
            Some(&GraphStep::FinishNode { vertex: VertexId(6) })
        );
    }

    #[test]
    fn bfs_opening_steps() {
        let steps = breadth_first(&Graph::demo(), VertexId(0)).unwrap();
        assert_eq!(
            &steps[..8],
            &[
                GraphStep::Enqueue { vertex: VertexId(0) },
                GraphStep::Dequeue { vertex: VertexId(0) },
                GraphStep::Visit { vertex: VertexId(0) },
                GraphStep::Edge { from: VertexId(0), to: VertexId(1) },
                GraphStep::Enqueue { vertex: VertexId(1) },
                GraphStep::Edge { from: VertexId(0), to: VertexId(2) },
                GraphStep::Enqueue { vertex: VertexId(2) },
                GraphStep::FinishNode { vertex: VertexId(0) },
            ]
        );
    }

    #[test]
    fn dfs_visits_each_vertex_once() {
        let graph = Graph::demo();
        let steps = depth_first(&graph, VertexId(0)).unwrap();

        assert_eq!(visit_order(&steps), vec![0, 1, 3, 4, 5, 2, 6]);
        for v in 0..graph.vertex_count() {
            let vertex = VertexId(v);
            assert_eq!(count(&steps, |s| *s == GraphStep::Visit { vertex }), 1);
            assert!(count(&steps, |s| *s == GraphStep::FinishNode { vertex }) >= 1);
        }

        let pops = count(&steps, |s| matches!(s, GraphStep::Pop { .. }));
        let pushes = count(&steps, |s| matches!(s, GraphStep::Push { .. }));
        let finishes = count(&steps, |s| matches!(s, GraphStep::FinishNode { .. }));
        assert_eq!(pops, pushes);
        assert_eq!(finishes, pops);
    }

    #[test]
    fn dfs_keeps_stale_stack_entries() {
        // C is pushed from A and again from F before it is visited.
        let steps = depth_first(&Graph::demo(), VertexId(0)).unwrap();
        let c = VertexId(2);
        assert_eq!(count(&steps, |s| *s == GraphStep::Push { vertex: c }), 2);
        assert_eq!(count(&steps, |s| *s == GraphStep::Pop { vertex: c }), 2);
        assert_eq!(count(&steps, |s| *s == GraphStep::FinishNode { vertex: c }), 2);
        assert_eq!(
            &steps[steps.len() - 2..],
            &[
                GraphStep::Pop { vertex: c },
                GraphStep::FinishNode { vertex: c },
            ]
        );
    }

    #[test]
    fn unreachable_vertices_are_not_visited() {
        let graph = Graph::new(
            vec!["A".into(), "B".into(), "C".into()],
            Vec::new(),
            &[(0, 1)],
        )
        .unwrap();
        for algorithm in [TraversalAlgorithm::BreadthFirst, TraversalAlgorithm::DepthFirst] {
            let steps = algorithm.generate(&graph, VertexId(0)).unwrap();
            assert_eq!(visit_order(&steps), vec![0, 1]);
        }
    }

    #[test]
    fn unknown_start_is_rejected() {
        let err = breadth_first(&Graph::demo(), VertexId(7)).unwrap_err();
        assert_eq!(err, StepError::UnknownVertex { vertex: 7, count: 7 });
        assert!(depth_first(&Graph::demo(), VertexId(7)).is_err());
    }
}
