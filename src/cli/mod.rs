//! CLI argument parsing for graphlab
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose, logging
//! controls and --step-delay-ms.

pub mod edge;
pub mod format;
pub mod output;
pub mod parse;
pub mod vertex;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use graphlab_core::algos::Strategy;
use graphlab_core::graph::Direction;

pub use edge::EdgeCommands;
pub use output::OutputFormat;
pub use vertex::VertexCommands;

use parse::{parse_direction, parse_strategy};

/// Graphlab - build graphs and step through classic graph algorithms
#[derive(Parser, Debug)]
#[command(name = "graphlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file to operate on
    #[arg(long, short = 'g', global = true, env = "GRAPHLAB_GRAPH", default_value = "graph.json")]
    pub graph: PathBuf,

    /// Configuration file (default: graphlab.toml next to the graph file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress step-by-step output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `graphlab_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Delay between replayed algorithm steps, overriding the config file
    #[arg(long, global = true)]
    pub step_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty graph file
    Init {
        /// Graph name stored in the file
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing graph file
        #[arg(long)]
        force: bool,
    },

    /// Add, remove, relabel and list vertices
    #[command(subcommand)]
    Vertex(VertexCommands),

    /// Add, update, remove and list edges
    #[command(subcommand)]
    Edge(EdgeCommands),

    /// Remove every vertex and edge
    Clear,

    /// Summarize the graph file
    Show,

    /// Print the adjacency or incidence matrix
    Matrix {
        #[arg(value_enum)]
        kind: MatrixKind,
    },

    /// Breadth-first or depth-first traversal
    Traverse {
        /// Traversal strategy: bfs or dfs
        #[arg(value_parser = parse_strategy)]
        strategy: Strategy,

        /// Start vertex (default: first vertex)
        #[arg(long, short)]
        start: Option<String>,

        /// Which way directed edges are followed: out, in, or both
        #[arg(long, short, value_parser = parse_direction)]
        direction: Option<Direction>,
    },

    /// Shortest path with Dijkstra's algorithm
    Path {
        /// Source vertex
        source: String,

        /// Sink vertex
        sink: String,

        /// Follow directed edges both ways
        #[arg(long, conflicts_with = "respect_directions")]
        ignore_directions: bool,

        /// Follow directed edges tail to head only, overriding the config
        #[arg(long)]
        respect_directions: bool,
    },

    /// Maximum flow with Edmonds-Karp
    Flow {
        /// Source vertex
        source: String,

        /// Sink vertex
        sink: String,
    },

    /// Minimum spanning tree with Prim's algorithm (undirected edges only)
    Mst {
        /// Start vertex (default: first vertex)
        #[arg(long, short)]
        start: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    Adjacency,
    Incidence,
}
