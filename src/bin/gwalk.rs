//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::types::VertexId;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — adjacency-list graphs with BFS/DFS traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new edge-list file
    Create {
        /// Path to the edge-list JSON file to create
        file: PathBuf,
        /// Seed the file with the built-in five-vertex sample graph
        #[arg(long)]
        sample: bool,
    },
    /// Display information about an edge-list file
    Info {
        /// Path to the edge-list JSON file
        file: PathBuf,
    },
    /// Print the adjacency listing
    Show {
        /// Path to the edge-list JSON file
        file: PathBuf,
    },
    /// Breadth-first traversal from a starting vertex
    Bfs {
        /// Path to the edge-list JSON file
        file: PathBuf,
        /// Starting vertex
        start: VertexId,
    },
    /// Depth-first traversal from a starting vertex
    Dfs {
        /// Path to the edge-list JSON file
        file: PathBuf,
        /// Starting vertex
        start: VertexId,
    },
    /// Add an undirected edge between two vertices
    Link {
        /// Path to the edge-list JSON file
        file: PathBuf,
        /// First endpoint
        source: VertexId,
        /// Second endpoint
        destination: VertexId,
        /// Optional edge weight (stored, never read by traversals)
        #[arg(long)]
        weight: Option<i64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Create { file, sample } => commands::cmd_create(&file, sample),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Bfs { file, start } => commands::cmd_bfs(&file, start, json),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, start, json),
        Commands::Link {
            file,
            source,
            destination,
            weight,
        } => commands::cmd_link(&file, source, destination, weight, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            graphwalk::GraphError::Io(_) => 1,
            graphwalk::GraphError::EdgeList(_) => 2,
            graphwalk::GraphError::OutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
