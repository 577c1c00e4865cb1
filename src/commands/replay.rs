//! Step-by-step playback shared by the algorithm commands
//!
//! Human output prints one line per step event, optionally paced by
//! `--step-delay-ms` / `playback.step_delay_ms`. Ctrl-C during a paced
//! replay cancels the run. JSON output prints `{"steps": [...], "result": ...}`.

use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use graphlab_core::config::GraphlabConfig;
use graphlab_core::engine::Stepper;
use graphlab_core::error::Result;
use graphlab_core::Run;

/// Everything a finished run produced
pub struct Replay<S: Stepper> {
    pub steps: Vec<S::Step>,
    pub output: S::Output,
}

fn step_delay(ctx: &CommandContext, config: &GraphlabConfig) -> Duration {
    let ms = ctx
        .cli
        .step_delay_ms
        .unwrap_or(config.playback.step_delay_ms);
    Duration::from_millis(ms)
}

/// Drive `run` to completion, printing each step `describe` renders
pub fn replay<S>(
    ctx: &CommandContext,
    config: &GraphlabConfig,
    mut run: Run<S>,
    describe: fn(&S::Step) -> Option<String>,
) -> Result<Replay<S>>
where
    S: Stepper,
{
    let start = Instant::now();
    let human = ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet;
    let delay = if human {
        step_delay(ctx, config)
    } else {
        Duration::ZERO
    };

    if !delay.is_zero() {
        let handle = run.cancel_handle();
        if let Err(e) = ctrlc::set_handler(move || {
            handle.cancel();
        }) {
            warn!(error = %e, "could not install Ctrl-C handler");
        }
    }

    let mut steps = Vec::new();
    for step in run.by_ref() {
        if human {
            if let Some(line) = describe(&step) {
                println!("{:>4}  {}", steps.len() + 1, line);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }
        steps.push(step);
    }

    let output = run.finish()?;
    debug!(steps = steps.len(), elapsed = ?start.elapsed(), "replay finished");
    Ok(Replay { steps, output })
}

/// Print a finished replay: the JSON envelope, or `summary` for humans
pub fn emit<S>(
    ctx: &CommandContext,
    replay: &Replay<S>,
    summary: impl FnOnce(&S::Output),
) -> Result<()>
where
    S: Stepper,
    S::Step: Serialize,
    S::Output: Serialize,
{
    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "steps": replay.steps,
            "result": replay.output,
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet && !replay.steps.is_empty() {
                println!();
            }
            summary(&replay.output);
            Ok(())
        }
    }
}
