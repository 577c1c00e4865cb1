//! `graphlab mst` - Prim minimum spanning tree playback

use crate::commands::dispatch::CommandContext;
use crate::commands::replay::{emit, replay};
use graphlab_core::algos::{MstEngine, MstParams, MstStep};
use graphlab_core::error::Result;
use graphlab_core::graph::format_weight;

fn describe(step: &MstStep) -> Option<String> {
    let line = match step {
        MstStep::CandidateQueued(c) => format!(
            "  queue {}--{} ({})",
            c.from,
            c.to,
            format_weight(c.weight)
        ),
        MstStep::CandidateDiscarded(c) => format!(
            "  skip {}--{} ({}), both ends in tree",
            c.from,
            c.to,
            format_weight(c.weight)
        ),
        MstStep::EdgeAdded {
            from,
            to,
            weight,
            joined,
            total_weight,
            ..
        } => format!(
            "add {}--{} ({}), {} joins, total {}",
            from,
            to,
            format_weight(*weight),
            joined,
            format_weight(*total_weight)
        ),
        MstStep::Finished(_) => return None,
    };
    Some(line)
}

pub fn execute(ctx: &CommandContext, start: Option<String>) -> Result<()> {
    let config = ctx.config()?;
    let loaded = ctx.load_graph()?;

    let engine = MstEngine::new();
    let run = engine.run(loaded.store.snapshot(), MstParams { start })?;
    let replayed = replay(ctx, &config, run, describe)?;

    emit(ctx, &replayed, |result| {
        println!(
            "Minimum spanning tree from {}: {} edge(s), total weight {}",
            result.start,
            result.edges.len(),
            format_weight(result.total_weight)
        );
        if !ctx.cli.quiet {
            for edge in &result.edges {
                println!(
                    "  {} {}--{}  {}",
                    edge.edge,
                    edge.from,
                    edge.to,
                    format_weight(edge.weight)
                );
            }
        }
        if result.disconnected {
            println!("Warning: graph is disconnected; the tree spans only the start's component");
        }
    })
}
