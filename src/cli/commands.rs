//! CLI command implementations.
//!
//! Commands operate on edge-list files: a JSON array of
//! `{"source": u, "destination": v, "weight": w?}` records, the same
//! shape the construction API consumes.

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::{bfs, dfs, AdjacencyGraph};
use crate::types::{Edge, GraphResult, VertexId};

/// Load an edge list from a JSON file.
pub fn load_edges(path: &Path) -> GraphResult<Vec<Edge>> {
    let data = fs::read_to_string(path)?;
    let edges: Vec<Edge> = serde_json::from_str(&data)?;
    debug!("loaded {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Save an edge list to a JSON file.
pub fn save_edges(path: &Path, edges: &[Edge]) -> GraphResult<()> {
    let data = serde_json::to_string_pretty(edges)?;
    fs::write(path, data)?;
    Ok(())
}

fn load_graph(path: &Path) -> GraphResult<AdjacencyGraph> {
    Ok(AdjacencyGraph::from_edges(&load_edges(path)?))
}

/// The five-vertex sample graph from the crate documentation, with
/// every undirected connection supplied in both directions.
///
/// ```text
///      0---------1
///      |       / |  \
///      |    /    |    \
///      |  /      |    / 2
///      |/        |  /
///      4---------3/
/// ```
pub fn sample_edges() -> Vec<Edge> {
    vec![
        Edge::new(0, 1),
        Edge::new(0, 4),
        Edge::new(1, 0),
        Edge::new(1, 2),
        Edge::new(1, 4),
        Edge::new(1, 3),
        Edge::new(2, 1),
        Edge::new(2, 3),
        Edge::new(3, 1),
        Edge::new(3, 2),
        Edge::new(3, 4),
        Edge::new(4, 0),
        Edge::new(4, 1),
        Edge::new(4, 3),
    ]
}

/// Create a new edge-list file, empty or seeded with the sample graph.
pub fn cmd_create(path: &Path, sample: bool) -> GraphResult<()> {
    let edges = if sample { sample_edges() } else { Vec::new() };
    save_edges(path, &edges)?;
    println!("Created {} ({} edges)", path.display(), edges.len());
    Ok(())
}

/// Display summary information about an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let isolated = graph.buckets().iter().filter(|b| b.is_empty()).count();
    let max_degree = graph.buckets().iter().map(|b| b.len()).max().unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "half_edges": graph.edge_count(),
            "isolated_vertices": isolated,
            "max_out_degree": max_degree,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Half-edges: {}", graph.edge_count());
        println!("Isolated vertices: {}", isolated);
        println!("Max out-degree: {}", max_degree);
    }
    Ok(())
}

/// Print the adjacency listing.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&graph.buckets()).unwrap_or_default()
        );
    } else {
        graph.print()?;
    }
    Ok(())
}

/// Run a breadth-first traversal and emit the visitation order.
pub fn cmd_bfs(path: &Path, start: VertexId, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order = bfs(&graph, start)?;
    emit_order("bfs", start, &order, json);
    Ok(())
}

/// Run a depth-first traversal and emit the visitation order.
pub fn cmd_dfs(path: &Path, start: VertexId, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order = dfs(&graph, start)?;
    emit_order("dfs", start, &order, json);
    Ok(())
}

/// Append an undirected edge to an edge-list file.
///
/// `add_edge` on a built graph is symmetric, so symmetry is persisted
/// by appending both half-edge records.
pub fn cmd_link(
    path: &Path,
    source: VertexId,
    destination: VertexId,
    weight: Option<i64>,
    json: bool,
) -> GraphResult<()> {
    let mut edges = load_edges(path)?;
    edges.push(Edge {
        source,
        destination,
        weight,
    });
    edges.push(Edge {
        source: destination,
        destination: source,
        weight,
    });
    save_edges(path, &edges)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "destination": destination, "weight": weight})
        );
    } else {
        println!("Linked {} <---> {}", source, destination);
    }
    Ok(())
}

fn emit_order(algorithm: &str, start: VertexId, order: &[VertexId], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({"algorithm": algorithm, "start": start, "visited": order})
        );
    } else {
        let line = order
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", line);
    }
}
