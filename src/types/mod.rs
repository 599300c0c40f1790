//! All data types for the graphwalk library.

pub mod edge;
pub mod error;

pub use edge::{AdjacencyEntry, Edge};
pub use error::{GraphError, GraphResult};

/// Index of a vertex in the adjacency store.
///
/// Vertex identifiers are dense non-negative integers; a graph with
/// `n` vertices uses ids `0..n`.
pub type VertexId = usize;
