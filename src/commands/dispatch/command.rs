//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use graphlab_core::config::GraphlabConfig;
use graphlab_core::error::Result;
use graphlab_core::graph::{self, GraphStore};

/// A graph loaded from disk together with the name it was saved under
pub struct LoadedGraph {
    pub name: String,
    pub store: GraphStore,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn graph_path(&self) -> &Path {
        &self.cli.graph
    }

    /// Configuration from --config or the file next to the graph
    pub fn config(&self) -> Result<GraphlabConfig> {
        GraphlabConfig::resolve(self.cli.config.as_deref(), self.graph_path())
    }

    pub fn load_graph(&self) -> Result<LoadedGraph> {
        let (name, store) = graph::load(self.graph_path())?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(LoadedGraph { name, store })
    }

    pub fn save_graph(&self, loaded: &LoadedGraph) -> Result<()> {
        graph::save(self.graph_path(), &loaded.name, &loaded.store)
    }

    /// Load, apply `edit`, and save only if `edit` succeeds
    pub fn edit_graph<T>(&self, edit: impl FnOnce(&mut GraphStore) -> Result<T>) -> Result<T> {
        let mut loaded = self.load_graph()?;
        let value = edit(&mut loaded.store)?;
        self.save_graph(&loaded)?;
        Ok(value)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphlab {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Build graphs and step through classic graph algorithms.");
        println!();
        println!("Run `graphlab --help` for usage information.");
        Ok(())
    }
}
