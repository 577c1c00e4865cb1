//! Vertex subcommands

use clap::Subcommand;

/// Vertex subcommands
#[derive(Subcommand, Debug)]
pub enum VertexCommands {
    /// Add a vertex with an explicit id
    Add {
        /// Vertex id
        id: String,

        /// Display label (default: the id)
        #[arg(long, short)]
        label: Option<String>,

        /// X coordinate (requires --y)
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Y coordinate (requires --x)
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f64>,
    },

    /// Add a vertex with the next free numeric id
    Auto {
        /// X coordinate (requires --y)
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Y coordinate (requires --x)
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f64>,
    },

    /// Remove a vertex and every edge touching it
    Remove {
        /// Vertex id
        id: String,
    },

    /// Change a vertex's label
    Label {
        /// Vertex id
        id: String,

        /// New label
        label: String,
    },

    /// List vertices
    List,
}
