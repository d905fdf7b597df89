use super::graph::AdjacencyGraph;
use super::table::{AllPairsTable, DistanceTable};
use common::{error::Error, types::Vertex};

/// Trait for solvers computing shortest distances from a single source.
pub trait SingleSourceSolver<V: Vertex> {
    /// Computes the distance from `source` to every vertex of `graph`.
    ///
    /// Returns `Err(e)` if `source` or an edge target is undeclared, an edge
    /// weight is invalid, or the solver rejects the graph (negative cycle,
    /// violated precondition).
    fn shortest_paths(
        &self,
        graph: &AdjacencyGraph<V>,
        source: &V,
    ) -> Result<DistanceTable<V>, Error>;
}

/// Trait for solvers computing the distance between every ordered pair.
pub trait AllPairsSolver<V: Vertex> {
    fn all_pairs(&self, graph: &AdjacencyGraph<V>) -> Result<AllPairsTable<V>, Error>;
}
