use std::cmp::Ordering;
use std::collections::BinaryHeap;

use common::error::Error;
use common::numeric_kernel::{UNREACHABLE, extend, relax};
use common::types::{Vertex, Weight};
use tracing::debug;

use super::csr::GraphCSR;
use super::graph::AdjacencyGraph;
use super::table::DistanceTable;
use super::traits::SingleSourceSolver;

/// Solver implementing Dijkstra's algorithm with a binary heap and lazy deletion.
///
/// Requires non-negative edge weights. By default this precondition is the
/// caller's obligation and negative weights silently give wrong distances;
/// [`DijkstraSolver::strict`] scans the weights first and fails instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSolver {
    pub reject_negative_weights: bool,
}

impl DijkstraSolver {
    pub fn strict() -> Self {
        Self {
            reject_negative_weights: true,
        }
    }

    fn check_weights<V: Vertex>(graph: &AdjacencyGraph<V>) -> Result<(), Error> {
        for (from, neighbors) in graph.iter() {
            if let Some((to, weight)) = neighbors.iter().find(|(_, weight)| *weight < 0.0) {
                return Err(Error::PreconditionViolation {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                    weight: *weight,
                });
            }
        }
        Ok(())
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: Weight,
    node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs the relaxation loop on an indexed graph. `source` must be `< num_nodes`.
pub(crate) fn run(graph: &GraphCSR, source: usize) -> Vec<Weight> {
    let mut distance = vec![UNREACHABLE; graph.num_nodes];
    let mut heap = BinaryHeap::new();

    distance[source] = 0.0;
    heap.push(QueueEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(QueueEntry { distance: d, node: u }) = heap.pop() {
        // Stale entry: a shorter path to `u` was settled after this push.
        if d > distance[u] {
            continue;
        }

        for (v, weight) in graph.neighbors(u) {
            let candidate = extend(distance[u], weight);
            if relax(&mut distance[v], candidate) {
                heap.push(QueueEntry {
                    distance: candidate,
                    node: v,
                });
            }
        }
    }

    distance
}

impl<V: Vertex> SingleSourceSolver<V> for DijkstraSolver {
    fn shortest_paths(
        &self,
        graph: &AdjacencyGraph<V>,
        source: &V,
    ) -> Result<DistanceTable<V>, Error> {
        let source_idx = graph.vertex_index().require(source)?;
        let csr = GraphCSR::from_adjacency(graph)?;

        if self.reject_negative_weights {
            Self::check_weights(graph)?;
        }

        debug!(
            vertices = csr.num_nodes,
            edges = csr.num_edges(),
            source = ?source,
            "running dijkstra"
        );
        let distance = run(&csr, source_idx);
        debug!(
            reachable = distance.iter().filter(|&&d| d != UNREACHABLE).count(),
            "dijkstra finished"
        );

        Ok(DistanceTable::new(
            graph.vertex_index().clone(),
            source.clone(),
            distance,
        ))
    }
}
