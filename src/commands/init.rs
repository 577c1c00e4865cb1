//! `graphlab init` command - create an empty graph file
//!
//! Refuses to overwrite an existing file unless `--force` is given.

use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use crate::output_by_format_result;
use graphlab_core::error::Result;
use graphlab_core::graph::{self, GraphStore};

/// Execute the init command
pub fn execute(ctx: &CommandContext, name: Option<&str>, force: bool) -> Result<()> {
    let path = ctx.graph_path();
    if path.exists() && !force {
        graphlab_core::bail_usage!(format!(
            "graph file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    let config = ctx.config()?;
    let name = name.unwrap_or(&config.output.default_name);
    graph::save(path, name, &GraphStore::new())?;

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&serde_json::json!({
                "status": "ok",
                "graph": path.display().to_string(),
                "name": name,
            }))
        },
        human => {
            if !ctx.cli.quiet {
                println!("Initialized graph '{}' at {}", name, path.display());
            }
        }
    )
}
