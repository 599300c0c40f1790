//! 100K vertex traversal demo.
//!
//! Uses `AdjacencyGraph::from_edges` for fast bulk construction.

use std::time::Instant;

use graphwalk::*;

fn main() -> GraphResult<()> {
    let vertex_count = 100_000;
    let edges_per_vertex = 3;

    println!("Creating edge list for {} vertices...", vertex_count);
    let start = Instant::now();

    let mut edges = Vec::with_capacity(vertex_count * edges_per_vertex);
    for source in 0..vertex_count {
        for j in 1..=edges_per_vertex {
            let destination = (source + j * 7) % vertex_count;
            if destination != source {
                edges.push(Edge::new(source, destination));
            }
        }
    }
    println!("  Edge list created in {:?}", start.elapsed());

    let start = Instant::now();
    let graph = AdjacencyGraph::from_edges(&edges);
    println!(
        "  Graph built in {:?} ({} vertices, {} half-edges)",
        start.elapsed(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let order = bfs(&graph, 50_000)?;
    println!(
        "  BFS from 50000: {} vertices visited in {:?}",
        order.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let order = dfs(&graph, 50_000)?;
    println!(
        "  DFS from 50000: {} vertices visited in {:?}",
        order.len(),
        start.elapsed()
    );

    println!("\nDone!");
    Ok(())
}
