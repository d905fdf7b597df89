use thiserror::Error;

use common::error::Error as SolverError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed CSV record: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unknown algorithm '{0}'. Expected dijkstra, bellman-ford or floyd-warshall.")]
    UnknownAlgorithm(String),

    #[error("Algorithm {0} needs a source vertex.")]
    MissingSource(String),

    #[error("Failed to initialise logging: {0}")]
    LoggingError(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] SolverError),
}
