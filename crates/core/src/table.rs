use common::numeric_kernel::UNREACHABLE;
use common::types::{Vertex, Weight};

use super::graph::VertexIndex;

/// Single-source result: the shortest distance from `source` to every
/// declared vertex, `UNREACHABLE` where no finite path exists.
///
/// Iteration follows vertex declaration order.
#[derive(Debug, Clone)]
pub struct DistanceTable<V> {
    index: VertexIndex<V>,
    source: V,
    distances: Vec<Weight>,
}

impl<V: Vertex> DistanceTable<V> {
    pub(crate) fn new(index: VertexIndex<V>, source: V, distances: Vec<Weight>) -> Self {
        debug_assert_eq!(index.len(), distances.len());
        Self {
            index,
            source,
            distances,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance to `vertex`, or `None` if it is not part of the graph.
    pub fn get(&self, vertex: &V) -> Option<Weight> {
        self.index
            .position(vertex)
            .map(|position| self.distances[position])
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get(vertex)
            .is_some_and(|distance| distance != UNREACHABLE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> {
        self.index
            .vertices()
            .iter()
            .zip(self.distances.iter().copied())
    }

    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    /// Distances in vertex declaration order.
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Tables compare bit for bit, so two runs agree only if every distance has
/// the same representation.
impl<V: Vertex> PartialEq for DistanceTable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.source == other.source
            && bits_eq(&self.distances, &other.distances)
    }
}

/// All-pairs result stored as a row-major |V|×|V| matrix.
#[derive(Debug, Clone)]
pub struct AllPairsTable<V> {
    index: VertexIndex<V>,
    matrix: Vec<Weight>,
}

impl<V: Vertex> AllPairsTable<V> {
    pub(crate) fn new(index: VertexIndex<V>, matrix: Vec<Weight>) -> Self {
        debug_assert_eq!(index.len() * index.len(), matrix.len());
        Self { index, matrix }
    }

    pub fn get(&self, from: &V, to: &V) -> Option<Weight> {
        let i = self.index.position(from)?;
        let j = self.index.position(to)?;
        Some(self.matrix[i * self.index.len() + j])
    }

    /// The row of `from` as a single-source table.
    pub fn row(&self, from: &V) -> Option<DistanceTable<V>> {
        let n = self.index.len();
        let i = self.index.position(from)?;
        let distances = self.matrix[i * n..(i + 1) * n].to_vec();
        Some(DistanceTable::new(self.index.clone(), from.clone(), distances))
    }

    /// Iterates `(from, to, distance)` row by row in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, Weight)> {
        let vertices = self.index.vertices();
        let n = vertices.len();
        self.matrix
            .iter()
            .enumerate()
            .map(move |(cell, &distance)| (&vertices[cell / n], &vertices[cell % n], distance))
    }

    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    /// Vertices lying on a negative-weight cycle, i.e. `dist[v][v] < 0`.
    pub fn negative_cycle_vertices(&self) -> Vec<&V> {
        let n = self.index.len();
        self.index
            .vertices()
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.matrix[i * n + i] < 0.0)
            .map(|(_, vertex)| vertex)
            .collect()
    }

    pub fn has_negative_cycle(&self) -> bool {
        let n = self.index.len();
        (0..n).any(|i| self.matrix[i * n + i] < 0.0)
    }

    /// Number of vertices (rows).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<V: Vertex> PartialEq for AllPairsTable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && bits_eq(&self.matrix, &other.matrix)
    }
}

fn bits_eq(a: &[Weight], b: &[Weight]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

#[cfg(test)]
mod table_tests {
    use super::*;

    fn index() -> VertexIndex<char> {
        VertexIndex::from_vertices(['a', 'b', 'c']).unwrap()
    }

    #[test]
    fn distance_table_lookup_and_order() {
        let table = DistanceTable::new(index(), 'a', vec![0.0, 2.5, UNREACHABLE]);

        assert_eq!(table.source(), &'a');
        assert_eq!(table.get(&'b'), Some(2.5));
        assert_eq!(table.get(&'z'), None);
        assert!(table.is_reachable(&'a'));
        assert!(!table.is_reachable(&'c'));
        assert!(!table.is_reachable(&'z'));
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(&'a', 0.0), (&'b', 2.5), (&'c', UNREACHABLE)]
        );
    }

    #[test]
    fn distance_tables_compare_bitwise() {
        let positive = DistanceTable::new(index(), 'a', vec![0.0, 1.0, 1.0]);
        let negative_zero = DistanceTable::new(index(), 'a', vec![-0.0, 1.0, 1.0]);

        assert_eq!(positive, positive.clone());
        assert_ne!(positive, negative_zero);
    }

    #[test]
    fn all_pairs_rows_and_diagonal() {
        #[rustfmt::skip]
        let matrix = vec![
            0.0, 1.0, UNREACHABLE,
            UNREACHABLE, -1.0, 3.0,
            2.0, 3.0, 0.0,
        ];
        let table = AllPairsTable::new(index(), matrix);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'b', &'c'), Some(3.0));
        assert_eq!(table.get(&'a', &'c'), Some(UNREACHABLE));
        assert_eq!(table.get(&'q', &'a'), None);

        let row = table.row(&'c').unwrap();
        assert_eq!(row.source(), &'c');
        assert_eq!(row.distances(), &[2.0, 3.0, 0.0]);

        assert!(table.has_negative_cycle());
        assert_eq!(table.negative_cycle_vertices(), vec![&'b']);
    }

    #[test]
    fn all_pairs_iterates_row_major() {
        let index = VertexIndex::from_vertices([1, 2]).unwrap();
        let table = AllPairsTable::new(index, vec![0.0, 5.0, 7.0, 0.0]);

        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(&1, &1, 0.0), (&1, &2, 5.0), (&2, &1, 7.0), (&2, &2, 0.0)]
        );
        assert!(!table.has_negative_cycle());
    }
}
