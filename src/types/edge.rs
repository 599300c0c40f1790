//! Edge records and the adjacency entries built from them.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// A directed connection between two vertices, as supplied by the caller.
///
/// Construction stores each record as a single half-edge in its source
/// vertex's bucket; callers wanting undirected semantics supply both
/// directions (or use [`crate::AdjacencyGraph::add_edge`], which is
/// symmetric).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Vertex the edge leaves from.
    pub source: VertexId,
    /// Vertex the edge points at.
    pub destination: VertexId,
    /// Optional weight, carried for callers. No traversal reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(source: VertexId, destination: VertexId) -> Self {
        Self {
            source,
            destination,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(source: VertexId, destination: VertexId, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight: Some(weight),
        }
    }
}

/// One half-edge stored in a source vertex's bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjacencyEntry {
    /// The vertex this half-edge points at.
    pub neighbor: VertexId,
    /// Weight carried over from the originating edge.
    pub weight: Option<i64>,
}

impl AdjacencyEntry {
    /// Create an entry from an edge's far endpoint and weight.
    pub fn new(neighbor: VertexId, weight: Option<i64>) -> Self {
        Self { neighbor, weight }
    }
}
