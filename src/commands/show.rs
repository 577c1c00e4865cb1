//! `graphlab show` and `graphlab clear`

use chrono::{DateTime, Local};

use crate::commands::dispatch::CommandContext;
use crate::commands::edge::describe;
use crate::commands::print_json;
use crate::output_by_format_result;
use graphlab_core::error::Result;
use graphlab_core::graph::GraphFile;

fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Print the graph: name, save time, vertices and edges
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = ctx.graph_path();
    let file = GraphFile::read(path)?;
    let name = file.name.clone();
    let timestamp = file.timestamp.clone();
    let store = file.into_store_at(path)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "name": name,
                "timestamp": timestamp,
                "vertices": store.vertices(),
                "edges": store.edges(),
            }))
        },
        human => {
            let title = if name.is_empty() { "(unnamed)" } else { name.as_str() };
            println!("Graph: {}", title);
            if let Some(ts) = &timestamp {
                println!("Saved: {}", display_timestamp(ts));
            }
            println!(
                "{} vertices, {} edges",
                store.vertex_count(),
                store.edge_count()
            );
            if !ctx.cli.quiet {
                if !store.is_empty() {
                    println!();
                    println!("Vertices:");
                    for v in store.vertices() {
                        if v.label == v.id {
                            println!("  {}", v.id);
                        } else {
                            println!("  {} ({})", v.id, v.label);
                        }
                    }
                }
                if store.edge_count() > 0 {
                    println!();
                    println!("Edges:");
                    for e in store.edges() {
                        println!("  {}", describe(e));
                    }
                }
            }
        }
    )
}

/// Remove every vertex and edge, keeping the graph name
pub fn clear(ctx: &CommandContext) -> Result<()> {
    let (vertices, edges) = ctx.edit_graph(|store| {
        let counts = (store.vertex_count(), store.edge_count());
        store.clear();
        Ok(counts)
    })?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "status": "ok",
                "removed_vertices": vertices,
                "removed_edges": edges,
            }))
        },
        human => {
            if !ctx.cli.quiet {
                println!("Cleared {} vertices and {} edges", vertices, edges);
            }
        }
    )
}
