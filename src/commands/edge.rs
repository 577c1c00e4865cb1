//! `graphlab edge` commands

use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use crate::output_by_format_result;
use graphlab_core::error::{GraphError, Result};
use graphlab_core::graph::{format_weight, Edge, EdgeId};

/// What `edge update` does with the weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightChange {
    Keep,
    Set(f64),
    Clear,
}

/// One-line human form: `e3  A->B  w=2`
pub fn describe(edge: &Edge) -> String {
    match edge.weight {
        Some(w) => format!("{}\t{}\tw={}", edge.id, edge.describe(), format_weight(w)),
        None => format!("{}\t{}", edge.id, edge.describe()),
    }
}

fn print_edge(ctx: &CommandContext, edge: &Edge, verb: &str) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => { print_json(edge) },
        human => {
            if ctx.cli.quiet {
                println!("{}", edge.id);
            } else {
                println!("{} edge {}", verb, describe(edge));
            }
        }
    )
}

pub fn add(
    ctx: &CommandContext,
    from: &str,
    to: &str,
    weight: Option<f64>,
    directed: bool,
) -> Result<()> {
    let edge = ctx.edit_graph(|store| {
        let id = store.add_edge(from, to, weight, directed)?;
        store
            .edge(id)
            .cloned()
            .ok_or_else(|| GraphError::UnknownEdge { id: id.to_string() })
    })?;
    print_edge(ctx, &edge, "Added")
}

pub fn update(
    ctx: &CommandContext,
    id: EdgeId,
    weight: WeightChange,
    directed: Option<bool>,
) -> Result<()> {
    let edge = ctx.edit_graph(|store| {
        let current = store
            .edge(id)
            .cloned()
            .ok_or_else(|| GraphError::UnknownEdge { id: id.to_string() })?;
        let weight = match weight {
            WeightChange::Keep => current.weight,
            WeightChange::Set(w) => Some(w),
            WeightChange::Clear => None,
        };
        let directed = directed.unwrap_or(current.directed);
        store.update_edge(id, weight, directed)?;
        Ok(Edge {
            weight,
            directed,
            ..current
        })
    })?;
    print_edge(ctx, &edge, "Updated")
}

pub fn remove(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let edge = ctx.edit_graph(|store| store.remove_edge_between(from, to))?;
    print_edge(ctx, &edge, "Removed")
}

pub fn list(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_graph()?;
    let edges = loaded.store.edges();

    output_by_format_result!(ctx.cli.format,
        json => { print_json(edges) },
        human => {
            for edge in edges {
                println!("{}", describe(edge));
            }
        }
    )
}
