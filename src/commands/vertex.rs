//! `graphlab vertex` commands

use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use crate::output_by_format_result;
use graphlab_core::error::Result;
use graphlab_core::graph::{Position, Vertex};

fn print_vertex(ctx: &CommandContext, vertex: &Vertex, verb: &str) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => { print_json(vertex) },
        human => {
            if !ctx.cli.quiet {
                println!("{} vertex {}", verb, vertex.id);
            } else {
                println!("{}", vertex.id);
            }
        }
    )
}

pub fn add(
    ctx: &CommandContext,
    id: &str,
    label: Option<&str>,
    position: Option<Position>,
) -> Result<()> {
    let vertex = ctx.edit_graph(|store| store.add_vertex_with(id, label, position).cloned())?;
    print_vertex(ctx, &vertex, "Added")
}

/// Add a vertex with a generated numeric id
pub fn auto(ctx: &CommandContext, position: Option<Position>) -> Result<()> {
    let vertex = ctx.edit_graph(|store| store.add_vertex_at(position).cloned())?;
    print_vertex(ctx, &vertex, "Added")
}

pub fn remove(ctx: &CommandContext, id: &str) -> Result<()> {
    let removed = ctx.edit_graph(|store| store.remove_vertex(id))?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "removed": id,
                "removed_edges": removed,
            }))
        },
        human => {
            if !ctx.cli.quiet {
                println!("Removed vertex {} and {} edge(s)", id, removed.len());
            }
        }
    )
}

pub fn label(ctx: &CommandContext, id: &str, label: &str) -> Result<()> {
    let vertex = ctx.edit_graph(|store| {
        store.set_label(id, label)?;
        Ok(store.vertex(id).cloned())
    })?;

    match vertex {
        Some(vertex) => print_vertex(ctx, &vertex, "Relabeled"),
        None => Ok(()),
    }
}

pub fn list(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_graph()?;
    let vertices = loaded.store.vertices();

    output_by_format_result!(ctx.cli.format,
        json => { print_json(vertices) },
        human => {
            for v in vertices {
                match v.position {
                    Some(p) => println!("{}\t{}\t({}, {})", v.id, v.label, p.x, p.y),
                    None => println!("{}\t{}", v.id, v.label),
                }
            }
        }
    )
}
