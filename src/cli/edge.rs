//! Edge subcommands

use clap::Subcommand;

use super::parse::{parse_edge_id, parse_weight_arg};
use graphlab_core::graph::EdgeId;

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Add an edge between two existing vertices
    Add {
        /// Tail vertex id
        from: String,

        /// Head vertex id
        to: String,

        /// Numeric weight (unweighted edges count as 1)
        #[arg(long, short, value_parser = parse_weight_arg, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Make the edge directed
        #[arg(long, short)]
        directed: bool,
    },

    /// Change an edge's weight or direction
    Update {
        /// Edge id as printed by `edge list` (e.g. e3)
        #[arg(value_parser = parse_edge_id)]
        id: EdgeId,

        /// New weight
        #[arg(long, short, value_parser = parse_weight_arg, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Remove the weight
        #[arg(long, conflicts_with = "weight")]
        clear_weight: bool,

        /// Make the edge directed
        #[arg(long, short)]
        directed: bool,

        /// Make the edge undirected
        #[arg(long, conflicts_with = "directed")]
        undirected: bool,
    },

    /// Remove the edge stored for an ordered pair
    Remove {
        /// Tail vertex id
        from: String,

        /// Head vertex id
        to: String,
    },

    /// List edges
    List,
}
