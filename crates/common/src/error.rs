use thiserror::Error;

/// Failures raised while validating a graph or running one of the solvers.
///
/// Vertices are carried as their `Debug` rendering so the error type stays
/// independent of the caller's vertex type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// After the bounded relaxation phase at least one edge still relaxes.
    #[error("Graph contains a negative-weight cycle.")]
    NegativeCycle,

    /// An edge or source refers to a vertex outside the declared vertex set.
    #[error("Vertex {0} is referenced but was never declared.")]
    UndeclaredVertex(String),

    /// The same vertex appears twice in a declared vertex set.
    #[error("Vertex {0} is declared more than once.")]
    DuplicateVertex(String),

    /// Edge weights must be finite numbers.
    #[error("Edge {from} -> {to} has non-finite weight {weight}.")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Strict Dijkstra found a negative edge during its pre-scan.
    #[error("Edge {from} -> {to} has negative weight {weight}; Dijkstra requires non-negative weights.")]
    PreconditionViolation {
        from: String,
        to: String,
        weight: f64,
    },
}

impl Error {
    pub fn undeclared<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UndeclaredVertex(format!("{:?}", vertex))
    }

    pub fn duplicate<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::DuplicateVertex(format!("{:?}", vertex))
    }
}
