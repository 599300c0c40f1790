//! Criterion benchmarks for graphwalk.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use graphwalk::graph::{bfs, dfs, AdjacencyGraph};
use graphwalk::types::Edge;

/// Build a random edge list over `vertex_count` vertices.
fn make_edge_list(vertex_count: usize, edges_per_vertex: usize) -> Vec<Edge> {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(vertex_count * edges_per_vertex);
    for source in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let destination = rng.gen_range(0..vertex_count);
            if destination != source {
                edges.push(Edge::new(source, destination));
            }
        }
    }
    // Pin the last vertex id so the store is always full-size.
    edges.push(Edge::new(vertex_count - 1, 0));
    edges
}

fn bench_from_edges(c: &mut Criterion) {
    let edges = make_edge_list(100_000, 3);

    c.bench_function("from_edges_100k", |b| {
        b.iter(|| {
            let _ = AdjacencyGraph::from_edges(&edges);
        })
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = AdjacencyGraph::from_edges(&make_edge_list(10_000, 3));

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(0..10_000);
            let dst = rng.gen_range(0..10_000);
            if src != dst {
                graph.add_edge(src, dst, None);
            }
        })
    });
}

fn bench_bfs_100k(c: &mut Criterion) {
    let graph = AdjacencyGraph::from_edges(&make_edge_list(100_000, 3));

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let _ = bfs(&graph, 50_000).unwrap();
        })
    });
}

fn bench_dfs_100k(c: &mut Criterion) {
    let graph = AdjacencyGraph::from_edges(&make_edge_list(100_000, 3));

    c.bench_function("dfs_100k", |b| {
        b.iter(|| {
            let _ = dfs(&graph, 50_000).unwrap();
        })
    });
}

fn bench_write_adjacency(c: &mut Criterion) {
    let graph = AdjacencyGraph::from_edges(&make_edge_list(10_000, 3));

    c.bench_function("write_adjacency_10k", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            graph.write_adjacency(&mut buf).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_from_edges,
    bench_add_edge,
    bench_bfs_100k,
    bench_dfs_100k,
    bench_write_adjacency,
);
criterion_main!(benches);
