//! Command dispatch logic for graphlab

use std::time::Instant;

use crate::cli::{Cli, Commands, EdgeCommands, VertexCommands};
use crate::commands;
use graphlab_core::error::Result;
use graphlab_core::graph::Position;
use tracing::debug;

mod command;

use command::NoCommand;
pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    debug!(graph = %cli.graph.display(), "dispatch");

    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

fn position(x: Option<f64>, y: Option<f64>) -> Option<Position> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Position { x, y }),
        _ => None,
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { name, force } => {
                commands::init::execute(ctx, name.as_deref(), *force)
            }
            Commands::Vertex(cmd) => cmd.execute(ctx),
            Commands::Edge(cmd) => cmd.execute(ctx),
            Commands::Clear => commands::show::clear(ctx),
            Commands::Show => commands::show::execute(ctx),
            Commands::Matrix { kind } => commands::matrix::execute(ctx, *kind),
            Commands::Traverse {
                strategy,
                start,
                direction,
            } => commands::traverse::execute(ctx, *strategy, start.clone(), *direction),
            Commands::Path {
                source,
                sink,
                ignore_directions,
                respect_directions,
            } => {
                let consider_directions = match (*ignore_directions, *respect_directions) {
                    (true, _) => Some(false),
                    (_, true) => Some(true),
                    _ => None,
                };
                commands::path::execute(ctx, source, sink, consider_directions)
            }
            Commands::Flow { source, sink } => commands::flow::execute(ctx, source, sink),
            Commands::Mst { start } => commands::mst::execute(ctx, start.clone()),
        }
    }
}

impl Command for VertexCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            VertexCommands::Add { id, label, x, y } => {
                commands::vertex::add(ctx, id, label.as_deref(), position(*x, *y))
            }
            VertexCommands::Auto { x, y } => commands::vertex::auto(ctx, position(*x, *y)),
            VertexCommands::Remove { id } => commands::vertex::remove(ctx, id),
            VertexCommands::Label { id, label } => commands::vertex::label(ctx, id, label),
            VertexCommands::List => commands::vertex::list(ctx),
        }
    }
}

impl Command for EdgeCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            EdgeCommands::Add {
                from,
                to,
                weight,
                directed,
            } => commands::edge::add(ctx, from, to, *weight, *directed),
            EdgeCommands::Update {
                id,
                weight,
                clear_weight,
                directed,
                undirected,
            } => {
                let weight = match (weight, clear_weight) {
                    (Some(w), _) => commands::edge::WeightChange::Set(*w),
                    (None, true) => commands::edge::WeightChange::Clear,
                    (None, false) => commands::edge::WeightChange::Keep,
                };
                let directed = match (directed, undirected) {
                    (true, _) => Some(true),
                    (false, true) => Some(false),
                    (false, false) => None,
                };
                commands::edge::update(ctx, *id, weight, directed)
            }
            EdgeCommands::Remove { from, to } => commands::edge::remove(ctx, from, to),
            EdgeCommands::List => commands::edge::list(ctx),
        }
    }
}
