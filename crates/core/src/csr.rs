use common::error::Error;
use common::types::{IndexedEdge, Vertex, Weight};

use super::graph::AdjacencyGraph;

/// Graph in Compressed Sparse Row (CSR) format for fast graph traversal.
///
/// CSR format stores outgoing edges of each node contiguously in memory:
/// - `node_pointers[u]..node_pointers[u+1]` → edges from node `u`
/// - `edge_targets[i]` -> target node of edge `i`
/// - `edge_weights[i]` -> weight of edge `i`
/// - `edge_source_by_index[i]` -> source node of edge `i`
///
/// Within one node's block, edges keep the order in which they were supplied,
/// so adjacency order survives the conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphCSR {
    pub num_nodes: usize,
    pub node_pointers: Vec<usize>,
    pub edge_targets: Vec<usize>,
    pub edge_weights: Vec<Weight>,
    pub edge_source_by_index: Vec<usize>,
}

impl GraphCSR {
    /// Creates a new CSR graph from a list of resolved edges `(src, dst, weight)`.
    ///
    /// Edges are stably sorted by source node to ensure contiguous blocks for
    /// each node. Every endpoint must be `< num_nodes`.
    pub fn from_edges(num_nodes: usize, edges: &mut [IndexedEdge]) -> Self {
        edges.sort_by_key(|(src, _, _)| *src);

        let (node_pointers, edge_targets, edge_weights, edge_source_by_index) =
            Self::build_csr_from_edges(num_nodes, edges);

        Self {
            num_nodes,
            node_pointers,
            edge_targets,
            edge_weights,
            edge_source_by_index,
        }
    }

    /// Indexes an adjacency graph, node `i` being the `i`-th declared vertex.
    ///
    /// # Errors
    /// Returns `Error::UndeclaredVertex` if a neighbor is not a declared key,
    /// or `Error::InvalidWeight` for a non-finite weight.
    pub fn from_adjacency<V: Vertex>(graph: &AdjacencyGraph<V>) -> Result<Self, Error> {
        let mut edges = graph.resolve_edges()?;
        Ok(Self::from_edges(graph.len(), &mut edges))
    }

    /// Two-pass counting construction of the CSR arrays.
    ///
    /// Returns:
    /// 1. `node_pointers`: starting index of each node's outgoing edges (size |V| + 1).
    /// 2. `edge_targets`: destination node `v` for each edge.
    /// 3. `edge_weights`: weight of each edge, untransformed.
    /// 4. `edge_source_by_index`: maps each edge index back to its source node `u`,
    ///    so `edges()` can walk the arrays without a search over `node_pointers`.
    fn build_csr_from_edges(
        num_nodes: usize,
        edges: &[IndexedEdge],
    ) -> (Vec<usize>, Vec<usize>, Vec<Weight>, Vec<usize>) {
        let m = edges.len();
        let mut node_pointers = vec![0; num_nodes + 1];

        for &(u, _, _) in edges {
            node_pointers[u + 1] += 1;
        }

        for i in 1..=num_nodes {
            node_pointers[i] += node_pointers[i - 1];
        }

        let mut edge_targets = vec![0; m];
        let mut edge_weights = vec![0.0; m];
        let mut edge_source_by_index = vec![0; m];

        let mut cursor = node_pointers.clone();

        for &(u, v, weight) in edges {
            let pos = cursor[u]; // Get the next available position for node 'u'
            edge_weights[pos] = weight;
            edge_targets[pos] = v;
            edge_source_by_index[pos] = u;

            cursor[u] += 1;
        }

        (
            node_pointers,
            edge_targets,
            edge_weights,
            edge_source_by_index,
        )
    }

    pub fn num_edges(&self) -> usize {
        self.edge_targets.len()
    }

    /// Outgoing `(target, weight)` pairs of node `u`.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let start = self.node_pointers[u];
        let end = self.node_pointers[u + 1];
        (start..end).map(move |i| (self.edge_targets[i], self.edge_weights[i]))
    }

    /// O(1) lookup for the source node of a given edge index, `None` when
    /// `edge_idx` is out of bounds.
    pub fn get_edge_source_node(&self, edge_idx: usize) -> Option<usize> {
        self.edge_source_by_index.get(edge_idx).copied()
    }

    /// All edges grouped by source node.
    pub fn edges(&self) -> impl Iterator<Item = IndexedEdge> + '_ {
        (0..self.num_edges()).map(move |i| {
            (
                self.edge_source_by_index[i],
                self.edge_targets[i],
                self.edge_weights[i],
            )
        })
    }
}
