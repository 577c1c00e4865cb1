//! `graphlab matrix` - adjacency and incidence tables

use crate::cli::MatrixKind;
use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use crate::output_by_format_result;
use graphlab_core::error::Result;
use graphlab_core::matrix;

/// Lay out a table with a header row and a leading label column.
/// Widths are measured in chars so markers like `→` line up.
fn render_table(header: &[String], labels: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(j, h)| {
            rows.iter()
                .filter_map(|row| row.get(j))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(1)
                .max(1)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut head = format!("{:label_width$}", "");
    for (h, w) in header.iter().zip(&widths) {
        head.push_str(&format!("  {:>w$}", h, w = w));
    }
    lines.push(head.trim_end().to_string());

    for (label, row) in labels.iter().zip(rows) {
        let mut line = format!("{:<label_width$}", label);
        for (cell, w) in row.iter().zip(&widths) {
            let shown = if cell.is_empty() { "." } else { cell.as_str() };
            line.push_str(&format!("  {:>w$}", shown, w = w));
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

pub fn execute(ctx: &CommandContext, kind: MatrixKind) -> Result<()> {
    let loaded = ctx.load_graph()?;
    let snapshot = loaded.store.snapshot();

    match kind {
        MatrixKind::Adjacency => {
            let m = matrix::adjacency(&snapshot);
            output_by_format_result!(ctx.cli.format,
                json => { print_json(&m) },
                human => {
                    if m.vertices.is_empty() {
                        println!("(empty graph)");
                    } else {
                        for line in render_table(&m.vertices, &m.vertices, &m.markers()) {
                            println!("{}", line);
                        }
                    }
                }
            )
        }
        MatrixKind::Incidence => {
            let m = matrix::incidence(&snapshot);
            output_by_format_result!(ctx.cli.format,
                json => { print_json(&m) },
                human => {
                    if m.vertices.is_empty() {
                        println!("(empty graph)");
                    } else if m.edges.is_empty() {
                        println!("(no edges)");
                    } else {
                        for line in render_table(&m.edge_labels(), &m.vertices, &m.markers()) {
                            println!("{}", line);
                        }
                    }
                }
            )
        }
    }
}
