use thiserror::Error;

/// Errors returned when building a graph or its minimum spanning tree.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The construction source is not a two-dimensional matrix.
    #[error("input must be a path or a two-dimensional matrix, got {ndim} dimensions")]
    InvalidInputKind {
        /// Number of dimensions of the rejected array.
        ndim: usize,
    },

    /// The weight matrix has a different number of rows and columns.
    #[error("weight matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// An entry breaks the adjacency matrix conventions.
    #[error("invalid weight at ({row}, {col}): {reason}")]
    InvalidWeights {
        /// Row of the first offending entry.
        row: usize,
        /// Column of the first offending entry.
        col: usize,
        /// Human-readable explanation.
        reason: &'static str,
    },

    /// Some vertex cannot be reached from the seed vertex.
    #[error("graph is disconnected: vertex {vertex} is unreachable from vertex 0")]
    DisconnectedGraph {
        /// First vertex found with no edge into the tree.
        vertex: usize,
    },

    /// The matrix loader failed.
    #[error("failed to load weight matrix: {0:#}")]
    Load(anyhow::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, GraphError>;
