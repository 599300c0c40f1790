//! Basic build -> print -> traverse flow on the five-vertex sample graph.

use graphwalk::*;

/*
     0---------1
     |       / |  \
     |    /    |    \
     |  /      |    / 2
     |/        |  /
     4---------3/
*/

fn main() -> GraphResult<()> {
    let mut builder = GraphBuilder::new();
    builder
        .undirected(0, 1)
        .edge(0, 4)
        .edge(1, 2)
        .edge(1, 4)
        .edge(1, 3)
        .edge(2, 1)
        .edge(2, 3)
        .edge(3, 1)
        .edge(3, 2)
        .edge(3, 4)
        .edge(4, 0)
        .edge(4, 1)
        .edge(4, 3);
    let mut graph = builder.build();

    println!(
        "Graph built with {} vertices and {} half-edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph.print()?;

    let order = bfs(&graph, 2)?;
    println!(
        "bfs(2): {}",
        order
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let order = dfs(&graph, 2)?;
    println!(
        "dfs(2): {}",
        order
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    // add_edge is symmetric: one call, two new half-edges.
    graph.add_edge(2, 4, None);
    println!("\nAfter add_edge(2, 4):");
    graph.print()?;

    Ok(())
}
