//! `graphlab path` - Dijkstra shortest path playback

use crate::commands::dispatch::CommandContext;
use crate::commands::replay::{emit, replay};
use graphlab_core::algos::{PathStep, ShortestPathEngine, ShortestPathParams};
use graphlab_core::error::Result;
use graphlab_core::graph::format_weight;

fn describe(step: &PathStep) -> Option<String> {
    let line = match step {
        PathStep::NegativeWeightWarning { edges } => {
            let ids: Vec<String> = edges.iter().map(ToString::to_string).collect();
            format!(
                "warning: negative weights on {}; distances may be wrong",
                ids.join(", ")
            )
        }
        PathStep::Visiting { vertex, distance } => {
            format!("settle {} at {}", vertex, format_weight(*distance))
        }
        PathStep::Updated {
            vertex,
            distance,
            via,
            edge,
        } => format!(
            "  {} -> {} via {}: {}",
            via,
            vertex,
            edge,
            format_weight(*distance)
        ),
        PathStep::NotImproved {
            vertex,
            candidate,
            distance,
        } => format!(
            "  {}: {} is not better than {}",
            vertex,
            format_weight(*candidate),
            format_weight(*distance)
        ),
        PathStep::Finished(_) => return None,
    };
    Some(line)
}

pub fn execute(
    ctx: &CommandContext,
    source: &str,
    sink: &str,
    consider_directions: Option<bool>,
) -> Result<()> {
    let config = ctx.config()?;
    let loaded = ctx.load_graph()?;
    let params = ShortestPathParams {
        source: source.to_string(),
        sink: sink.to_string(),
        consider_directions: consider_directions
            .unwrap_or(config.shortest_path.consider_directions),
    };

    let engine = ShortestPathEngine::new();
    let run = engine.run(loaded.store.snapshot(), params)?;
    let replayed = replay(ctx, &config, run, describe)?;

    emit(ctx, &replayed, |result| match result.distance {
        Some(distance) if result.found => println!(
            "Shortest path {}, distance {}",
            result.path.join(" -> "),
            format_weight(distance)
        ),
        _ => println!("No path from {} to {}", result.source, result.sink),
    })
}
