//! Shortest paths over weighted directed graphs.
//!
//! Three engines share one graph model:
//! - [`dijkstra`]: single source, non-negative weights.
//! - [`bellman_ford`]: single source, negative weights allowed, negative
//!   cycles reported as [`Error::NegativeCycle`].
//! - [`floyd_warshall`]: all pairs.
//!
//! Inputs are never mutated, so one graph can be shared between concurrent
//! calls.

pub mod bellman_ford;
pub mod csr;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod graph;
pub mod table;
pub mod traits;

pub use bellman_ford::BellmanFordSolver;
pub use csr::GraphCSR;
pub use dijkstra::DijkstraSolver;
pub use floyd_warshall::FloydWarshallSolver;
pub use graph::{AdjacencyGraph, EdgeList, VertexIndex};
pub use table::{AllPairsTable, DistanceTable};
pub use traits::{AllPairsSolver, SingleSourceSolver};

use common::error::Error;
use common::types::{Edge, Vertex};

/// Single-source shortest paths with Dijkstra's algorithm.
///
/// Edge weights must be non-negative. This is not checked; use
/// [`DijkstraSolver::strict`] to reject negative weights up front.
pub fn dijkstra<V: Vertex>(
    graph: &AdjacencyGraph<V>,
    source: &V,
) -> Result<DistanceTable<V>, Error> {
    DijkstraSolver::default().shortest_paths(graph, source)
}

/// Single-source shortest paths with Bellman-Ford over an explicit edge list.
///
/// # Errors
/// `Error::NegativeCycle` if an edge still relaxes after |V| - 1 passes.
pub fn bellman_ford<V: Vertex>(
    edges: &[Edge<V>],
    vertices: &[V],
    source: &V,
) -> Result<DistanceTable<V>, Error> {
    let edge_list = EdgeList::new(vertices.iter().cloned(), edges.to_vec())?;
    BellmanFordSolver.solve_edge_list(&edge_list, source)
}

/// All-pairs shortest paths with Floyd-Warshall.
///
/// Negative cycles are not reported as errors; inspect
/// [`AllPairsTable::negative_cycle_vertices`] on the result.
pub fn floyd_warshall<V: Vertex>(graph: &AdjacencyGraph<V>) -> Result<AllPairsTable<V>, Error> {
    FloydWarshallSolver::default().all_pairs(graph)
}
