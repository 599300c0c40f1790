//! Error types for the graphwalk library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside the adjacency store.
    #[error("Vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list JSON.
    #[error("Edge list parse error: {0}")]
    EdgeList(#[from] serde_json::Error),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
