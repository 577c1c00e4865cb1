//! `graphlab flow` - Edmonds-Karp maximum flow playback

use crate::commands::dispatch::CommandContext;
use crate::commands::replay::{emit, replay};
use graphlab_core::algos::{FlowStep, MaxFlowEngine, MaxFlowParams};
use graphlab_core::error::Result;
use graphlab_core::graph::format_weight;

fn describe(step: &FlowStep) -> Option<String> {
    let line = match step {
        FlowStep::PathDiscovered { path } => format!("augmenting path {}", path.join(" -> ")),
        FlowStep::BottleneckComputed { bottleneck, .. } => {
            format!("  bottleneck {}", format_weight(*bottleneck))
        }
        FlowStep::FlowsUpdated { total, .. } => {
            format!("  flow is now {}", format_weight(*total))
        }
        FlowStep::NoAugmentingPath { total } => {
            format!("no augmenting path left, flow {}", format_weight(*total))
        }
        FlowStep::Finished(_) => return None,
    };
    Some(line)
}

pub fn execute(ctx: &CommandContext, source: &str, sink: &str) -> Result<()> {
    let config = ctx.config()?;
    let loaded = ctx.load_graph()?;
    let params = MaxFlowParams {
        source: source.to_string(),
        sink: sink.to_string(),
    };

    let engine = MaxFlowEngine::new();
    let run = engine.run(loaded.store.snapshot(), params)?;
    let replayed = replay(ctx, &config, run, describe)?;

    emit(ctx, &replayed, |result| {
        println!(
            "Maximum flow {} -> {}: {}",
            result.source,
            result.sink,
            format_weight(result.total)
        );
        if !ctx.cli.quiet {
            for edge in &result.edges {
                println!("  {} {}->{}  {}", edge.edge, edge.from, edge.to, edge.label);
            }
        }
    })
}
