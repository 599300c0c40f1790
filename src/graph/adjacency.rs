//! Core graph structure — per-vertex adjacency buckets.

use std::io::Write;

use log::debug;

use crate::types::{AdjacencyEntry, Edge, GraphError, GraphResult, VertexId};

/// An adjacency-list graph.
///
/// One bucket per vertex; each bucket holds the half-edges leaving that
/// vertex in insertion order. Insertion order is observable — it
/// determines traversal output order.
///
/// The store is sized by the largest vertex id seen, not by edge count,
/// and grows on demand when [`add_edge`](Self::add_edge) references a
/// vertex past the current end.
pub struct AdjacencyGraph {
    /// Adjacency buckets, indexed by vertex id.
    buckets: Vec<Vec<AdjacencyEntry>>,
}

impl AdjacencyGraph {
    /// Create an empty graph with `vertex_count` vertices and no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a graph from an edge list.
    ///
    /// Buckets are sized to cover the largest vertex id on either
    /// endpoint. Each input edge becomes exactly one half-edge in its
    /// source bucket, in input order; the reverse entry is NOT added.
    /// Undirected inputs must supply both directions.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let vertex_count = edges
            .iter()
            .map(|e| e.source.max(e.destination) + 1)
            .max()
            .unwrap_or(0);

        let mut graph = Self::with_vertices(vertex_count);
        for edge in edges {
            graph.buckets[edge.source].push(AdjacencyEntry::new(edge.destination, edge.weight));
        }
        debug!(
            "built graph: {} vertices, {} half-edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// Number of vertices (buckets).
    pub fn vertex_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of half-edges stored across all buckets.
    pub fn edge_count(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// Whether the graph has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Whether `vertex` is a valid index into the adjacency store.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.buckets.len()
    }

    /// Adjacency entries for one vertex, in insertion order.
    pub fn neighbors(&self, vertex: VertexId) -> GraphResult<&[AdjacencyEntry]> {
        self.buckets
            .get(vertex)
            .map(|b| b.as_slice())
            .ok_or(GraphError::OutOfRange {
                vertex,
                vertex_count: self.buckets.len(),
            })
    }

    /// All buckets, indexed by vertex id.
    pub fn buckets(&self) -> &[Vec<AdjacencyEntry>] {
        &self.buckets
    }

    /// Add an undirected edge: `(destination, weight)` is appended to
    /// bucket `source` AND `(source, weight)` to bucket `destination`.
    ///
    /// Unlike construction, this is always symmetric. Duplicate edges
    /// are permitted, not deduplicated. The store grows when an
    /// endpoint lies past the current end.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: Option<i64>) {
        let needed = source.max(destination) + 1;
        if needed > self.buckets.len() {
            self.buckets.resize_with(needed, Vec::new);
        }
        self.buckets[source].push(AdjacencyEntry::new(destination, weight));
        self.buckets[destination].push(AdjacencyEntry::new(source, weight));
    }

    /// Write the adjacency listing to `out`.
    ///
    /// For each vertex in ascending order, each half-edge is emitted as
    /// `"{source} ---> {neighbor} "`, followed by one line break per
    /// vertex. A vertex with no entries produces a bare line break.
    pub fn write_adjacency<W: Write>(&self, out: &mut W) -> GraphResult<()> {
        for (source, bucket) in self.buckets.iter().enumerate() {
            for entry in bucket {
                write!(out, "{} ---> {} ", source, entry.neighbor)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Print the adjacency listing to stdout.
    pub fn print(&self) -> GraphResult<()> {
        let stdout = std::io::stdout();
        self.write_adjacency(&mut stdout.lock())
    }
}
