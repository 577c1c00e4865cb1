//! Breadth-first and depth-first traversal

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::engine::{Engine, Progress, Run, RunControl, Stepper};
use crate::error::Result;
use crate::graph::{Direction, Snapshot};

use super::resolve_start;

/// Frontier discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => f.write_str("bfs"),
            Strategy::Dfs => f.write_str("dfs"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            other => Err(format!("unknown strategy '{}' (expected: bfs, dfs)", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TraversalParams {
    /// Defaults to the first vertex of the snapshot
    pub start: Option<String>,
    pub direction: Direction,
}

/// A vertex reached by the traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    pub vertex: String,
    /// Edges from the start along the traversal tree
    pub level: usize,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalStep {
    Visited(Visit),
    Completed { visited: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult {
    pub strategy: Strategy,
    pub start: String,
    pub direction: Direction,
    /// Visits in the order they happened
    pub visits: Vec<Visit>,
}

impl TraversalResult {
    pub fn level_of(&self, vertex: &str) -> Option<usize> {
        self.visits
            .iter()
            .find(|v| v.vertex == vertex)
            .map(|v| v.level)
    }

    pub fn order(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.vertex.as_str()).collect()
    }
}

/// In-progress traversal state
#[derive(Debug)]
pub struct Traversal {
    snapshot: Snapshot,
    strategy: Strategy,
    direction: Direction,
    start: String,
    frontier: VecDeque<Visit>,
    visited: HashSet<String>,
    visits: Vec<Visit>,
}

impl Traversal {
    fn new(snapshot: Snapshot, strategy: Strategy, direction: Direction, start: String) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(Visit {
            vertex: start.clone(),
            level: 0,
            parent: None,
        });
        Traversal {
            snapshot,
            strategy,
            direction,
            start,
            frontier,
            visited: HashSet::new(),
            visits: Vec::new(),
        }
    }

    fn take_next(&mut self) -> Option<Visit> {
        match self.strategy {
            Strategy::Bfs => self.frontier.pop_front(),
            Strategy::Dfs => self.frontier.pop_back(),
        }
    }
}

impl Stepper for Traversal {
    type Step = TraversalStep;
    type Output = TraversalResult;

    fn advance(&mut self, steps: &mut VecDeque<TraversalStep>) -> Progress {
        let Some(visit) = self.take_next() else {
            steps.push_back(TraversalStep::Completed {
                visited: self.visits.len(),
            });
            return Progress::Done;
        };
        if !self.visited.insert(visit.vertex.clone()) {
            return Progress::Continue;
        }
        tracing::trace!(vertex = %visit.vertex, level = visit.level, "visit");

        let mut discovered: Vec<Visit> = self
            .snapshot
            .neighbors(&visit.vertex, self.direction)
            .into_iter()
            .filter(|n| !self.visited.contains(n.vertex))
            .map(|n| Visit {
                vertex: n.vertex.to_string(),
                level: visit.level + 1,
                parent: Some(visit.vertex.clone()),
            })
            .collect();

        // reversed on the stack so the first neighbor is explored first
        if self.strategy == Strategy::Dfs {
            discovered.reverse();
        }
        self.frontier.extend(discovered);

        steps.push_back(TraversalStep::Visited(visit.clone()));
        self.visits.push(visit);
        Progress::Continue
    }

    fn into_output(self) -> TraversalResult {
        TraversalResult {
            strategy: self.strategy,
            start: self.start,
            direction: self.direction,
            visits: self.visits,
        }
    }
}

/// Runs BFS and DFS, one run at a time
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    control: RunControl,
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalEngine {
    pub fn new() -> Self {
        TraversalEngine {
            control: RunControl::new("traversal"),
        }
    }

    pub fn bfs(&self, snapshot: Snapshot, params: TraversalParams) -> Result<Run<Traversal>> {
        self.run(snapshot, Strategy::Bfs, params)
    }

    pub fn dfs(&self, snapshot: Snapshot, params: TraversalParams) -> Result<Run<Traversal>> {
        self.run(snapshot, Strategy::Dfs, params)
    }

    #[tracing::instrument(skip(self, snapshot, params), fields(start = ?params.start, direction = %params.direction))]
    pub fn run(
        &self,
        snapshot: Snapshot,
        strategy: Strategy,
        params: TraversalParams,
    ) -> Result<Run<Traversal>> {
        let start = resolve_start(&snapshot, params.start.as_deref())?;
        let traversal = Traversal::new(snapshot, strategy, params.direction, start);
        Run::start(&self.control, traversal)
    }
}

impl Engine for TraversalEngine {
    fn control(&self) -> &RunControl {
        &self.control
    }
}
