use std::collections::HashMap;

use common::error::Error;
use common::numeric_kernel::is_valid_weight;
use common::types::{Edge, IndexedEdge, Vertex, Weight};

/// Insertion-ordered vertex set with O(1) lookup of a vertex's dense position.
///
/// Positions are assigned in declaration order and never change, which gives
/// every solver a reproducible iteration order.
#[derive(Debug, Clone)]
pub struct VertexIndex<V> {
    vertices: Vec<V>,
    positions: HashMap<V, usize>,
}

impl<V: Vertex> VertexIndex<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Builds an index from an explicit vertex set.
    ///
    /// # Errors
    /// Returns `Error::DuplicateVertex` if a vertex is listed twice.
    pub fn from_vertices<I>(vertices: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = V>,
    {
        let mut index = Self::new();
        for vertex in vertices {
            if index.contains(&vertex) {
                return Err(Error::duplicate(&vertex));
            }
            index.declare(vertex);
        }
        Ok(index)
    }

    /// Declares `vertex` and returns its position. Declaring a known vertex
    /// returns the position it already has.
    pub fn declare(&mut self, vertex: V) -> usize {
        if let Some(&position) = self.positions.get(&vertex) {
            return position;
        }
        let position = self.vertices.len();
        self.positions.insert(vertex.clone(), position);
        self.vertices.push(vertex);
        position
    }

    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    /// Position of `vertex`, failing fast when it was never declared.
    pub fn require(&self, vertex: &V) -> Result<usize, Error> {
        self.position(vertex).ok_or_else(|| Error::undeclared(vertex))
    }

    pub fn vertex(&self, position: usize) -> Option<&V> {
        self.vertices.get(position)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Resolves a labelled edge to dense positions, validating both endpoints
    /// and the weight.
    pub(crate) fn resolve_edge(
        &self,
        from: &V,
        to: &V,
        weight: Weight,
    ) -> Result<IndexedEdge, Error> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight,
            });
        }
        Ok((u, v, weight))
    }
}

impl<V: Vertex> Default for VertexIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> PartialEq for VertexIndex<V> {
    fn eq(&self, other: &Self) -> bool {
        // Positions are derived from the vertex order.
        self.vertices == other.vertices
    }
}

/// Adjacency view of a weighted directed graph: every declared vertex maps to
/// an ordered sequence of `(neighbor, weight)` pairs.
///
/// A vertex is part of the graph once it is a key, even with no outgoing
/// edges. Neighbor targets are not validated here; the consuming solver
/// rejects targets that were never declared as keys.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    index: VertexIndex<V>,
    neighbors: Vec<Vec<(V, Weight)>>,
}

impl<V: Vertex> AdjacencyGraph<V> {
    pub fn new() -> Self {
        Self {
            index: VertexIndex::new(),
            neighbors: Vec::new(),
        }
    }

    /// Declares a vertex with no outgoing edges. Returns `false` if it was
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains(&vertex) {
            return false;
        }
        self.index.declare(vertex);
        self.neighbors.push(Vec::new());
        true
    }

    /// Sets the neighbor list of `vertex`, declaring it if needed.
    ///
    /// Re-inserting an existing key replaces its neighbors and keeps its
    /// position; the previous list is returned.
    pub fn insert(&mut self, vertex: V, neighbors: Vec<(V, Weight)>) -> Option<Vec<(V, Weight)>> {
        match self.index.position(&vertex) {
            Some(position) => Some(std::mem::replace(&mut self.neighbors[position], neighbors)),
            None => {
                self.index.declare(vertex);
                self.neighbors.push(neighbors);
                None
            }
        }
    }

    /// Appends the edge `from -> to`, declaring both endpoints if needed.
    ///
    /// A graph built only through `add_edge` therefore never fails with
    /// `Error::UndeclaredVertex`.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(position) = self.index.position(&from) {
            self.neighbors[position].push((to, weight));
        }
    }

    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    pub fn vertex_index(&self) -> &VertexIndex<V> {
        &self.index
    }

    /// Outgoing edges of `vertex` in insertion order, or `None` if it is not a key.
    pub fn neighbors(&self, vertex: &V) -> Option<&[(V, Weight)]> {
        self.index
            .position(vertex)
            .map(|position| self.neighbors[position].as_slice())
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains(vertex)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Iterates `(vertex, neighbors)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[(V, Weight)])> {
        self.index
            .vertices()
            .iter()
            .zip(self.neighbors.iter().map(Vec::as_slice))
    }

    /// Flattens the adjacency lists into an edge list over the same vertex
    /// set, preserving declaration order then neighbor order.
    pub fn to_edge_list(&self) -> EdgeList<V> {
        let edges = self
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .map(move |(to, weight)| (from.clone(), to.clone(), *weight))
            })
            .collect();

        EdgeList {
            index: self.index.clone(),
            edges,
        }
    }

    /// Resolves every edge to dense positions in declaration order.
    ///
    /// # Errors
    /// `Error::UndeclaredVertex` for a neighbor that is not a key, or
    /// `Error::InvalidWeight` for a non-finite weight.
    pub fn resolve_edges(&self) -> Result<Vec<IndexedEdge>, Error> {
        let mut resolved = Vec::with_capacity(self.edge_count());
        for (from, neighbors) in self.iter() {
            for (to, weight) in neighbors {
                resolved.push(self.index.resolve_edge(from, to, *weight)?);
            }
        }
        Ok(resolved)
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> PartialEq for AdjacencyGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.neighbors == other.neighbors
    }
}

impl<V: Vertex> FromIterator<(V, Vec<(V, Weight)>)> for AdjacencyGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<(V, Weight)>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (vertex, neighbors) in iter {
            graph.insert(vertex, neighbors);
        }
        graph
    }
}

/// Flat edge view: an ordered sequence of `(from, to, weight)` triples plus
/// the explicit vertex set they range over.
#[derive(Debug, Clone)]
pub struct EdgeList<V> {
    index: VertexIndex<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> EdgeList<V> {
    /// # Errors
    /// Returns `Error::DuplicateVertex` if the vertex set repeats a vertex.
    pub fn new<I>(vertices: I, edges: Vec<Edge<V>>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = V>,
    {
        Ok(Self {
            index: VertexIndex::from_vertices(vertices)?,
            edges,
        })
    }

    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    pub fn vertex_index(&self) -> &VertexIndex<V> {
        &self.index
    }

    /// Resolves every edge to dense positions, keeping list order.
    pub fn resolve(&self) -> Result<Vec<IndexedEdge>, Error> {
        self.edges
            .iter()
            .map(|(from, to, weight)| self.index.resolve_edge(from, to, *weight))
            .collect()
    }
}

impl<V: Vertex> PartialEq for EdgeList<V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.edges == other.edges
    }
}
