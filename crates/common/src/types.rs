use std::fmt::Debug;
use std::hash::Hash;

/// Opaque vertex identifier. No solver looks inside a vertex; it is only
/// hashed, compared and cloned into result tables.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Edge weight. Distances share the same representation, with
/// [`crate::numeric_kernel::UNREACHABLE`] as the "no finite path" sentinel.
pub type Weight = f64;

/// A labelled directed edge: (from, to, weight).
pub type Edge<V> = (V, V, Weight);

/// Type alias for an edge resolved to dense vertex positions: (from, to, weight)
pub type IndexedEdge = (usize, usize, Weight);
