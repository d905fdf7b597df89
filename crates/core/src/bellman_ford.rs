use common::error::Error;
use common::numeric_kernel::{UNREACHABLE, extend, improves, relax};
use common::types::{IndexedEdge, Vertex, Weight};
use tracing::{debug, trace, warn};

use super::graph::{AdjacencyGraph, EdgeList};
use super::table::DistanceTable;
use super::traits::SingleSourceSolver;

/// Solver implementing Bellman-Ford: |V| - 1 relaxation passes over the full
/// edge list followed by one verification pass that detects negative cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// Runs Bellman-Ford over an explicit edge list, relaxing edges in list order.
    ///
    /// # Errors
    /// - `Error::UndeclaredVertex` if `source` or an edge endpoint is not in the vertex set.
    /// - `Error::InvalidWeight` for a non-finite weight.
    /// - `Error::NegativeCycle` if an edge still relaxes after the bounded passes;
    ///   no partial table is returned.
    pub fn solve_edge_list<V: Vertex>(
        &self,
        edges: &EdgeList<V>,
        source: &V,
    ) -> Result<DistanceTable<V>, Error> {
        let index = edges.vertex_index();
        let source_idx = index.require(source)?;
        let resolved = edges.resolve()?;

        debug!(
            vertices = index.len(),
            edges = resolved.len(),
            source = ?source,
            "running bellman-ford"
        );
        let distance = run(index.len(), &resolved, source_idx)?;
        debug!(
            reachable = distance.iter().filter(|&&d| d != UNREACHABLE).count(),
            "bellman-ford finished"
        );

        Ok(DistanceTable::new(index.clone(), source.clone(), distance))
    }
}

/// Relaxation over resolved edges. `source` must be `< num_nodes`.
pub(crate) fn run(
    num_nodes: usize,
    edges: &[IndexedEdge],
    source: usize,
) -> Result<Vec<Weight>, Error> {
    let mut distance = vec![UNREACHABLE; num_nodes];
    distance[source] = 0.0;

    // A shortest simple path has at most |V| - 1 edges.
    for pass in 0..num_nodes.saturating_sub(1) {
        let mut changed = false;
        for &(u, v, weight) in edges {
            let candidate = extend(distance[u], weight);
            changed |= relax(&mut distance[v], candidate);
        }

        // Once a pass is quiet, every later pass would be too.
        if !changed {
            trace!(pass, "relaxation converged early");
            break;
        }
    }

    if let Some(&(u, v, weight)) = edges
        .iter()
        .find(|&&(u, v, weight)| improves(distance[u], weight, distance[v]))
    {
        warn!(from = u, to = v, weight, "edge still relaxes after |V| - 1 passes");
        return Err(Error::NegativeCycle);
    }

    Ok(distance)
}

impl<V: Vertex> SingleSourceSolver<V> for BellmanFordSolver {
    /// Flattens the adjacency lists in declaration order and runs the edge-list solver.
    fn shortest_paths(
        &self,
        graph: &AdjacencyGraph<V>,
        source: &V,
    ) -> Result<DistanceTable<V>, Error> {
        self.solve_edge_list(&graph.to_edge_list(), source)
    }
}
