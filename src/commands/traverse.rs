//! `graphlab traverse` - BFS / DFS playback

use crate::commands::dispatch::CommandContext;
use crate::commands::replay::{emit, replay};
use graphlab_core::algos::{Strategy, TraversalEngine, TraversalParams, TraversalStep};
use graphlab_core::error::Result;
use graphlab_core::graph::Direction;

fn describe(step: &TraversalStep) -> Option<String> {
    match step {
        TraversalStep::Visited(visit) => Some(match &visit.parent {
            Some(parent) => format!(
                "visit {} (level {}, from {})",
                visit.vertex, visit.level, parent
            ),
            None => format!("visit {} (start)", visit.vertex),
        }),
        TraversalStep::Completed { visited } => Some(format!("done, {} visited", visited)),
    }
}

pub fn execute(
    ctx: &CommandContext,
    strategy: Strategy,
    start: Option<String>,
    direction: Option<Direction>,
) -> Result<()> {
    let config = ctx.config()?;
    let loaded = ctx.load_graph()?;
    let params = TraversalParams {
        start,
        direction: direction.unwrap_or(config.traversal.direction),
    };

    let engine = TraversalEngine::new();
    let run = engine.run(loaded.store.snapshot(), strategy, params)?;
    let replayed = replay(ctx, &config, run, describe)?;

    emit(ctx, &replayed, |result| {
        println!(
            "{} from {}: {}",
            result.strategy.to_string().to_uppercase(),
            result.start,
            result.order().join(" -> ")
        );
    })
}
