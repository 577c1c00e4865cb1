//! Prim's minimum spanning tree over the undirected subgraph
//!
//! Directed edges are ignored. When some vertices cannot be reached through
//! undirected edges the run returns the tree of the start's component and
//! flags the graph as disconnected.

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::engine::{Engine, Progress, Run, RunControl, Stepper};
use crate::error::Result;
use crate::graph::{Edge, EdgeId, Snapshot};
use crate::queue::PriorityQueue;

use super::resolve_start;

#[derive(Debug, Clone, Default)]
pub struct MstParams {
    /// Defaults to the first vertex of the snapshot
    pub start: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    pub edge: EdgeId,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl TreeEdge {
    fn from_edge(edge: &Edge) -> Self {
        TreeEdge {
            edge: edge.id,
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.cost(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    pub start: String,
    pub edges: Vec<TreeEdge>,
    pub total_weight: f64,
    /// Vertices joined to the tree, in order
    pub visited: Vec<String>,
    pub disconnected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MstStep {
    CandidateQueued(TreeEdge),
    /// Both endpoints were already in the tree
    CandidateDiscarded(TreeEdge),
    EdgeAdded {
        edge: EdgeId,
        from: String,
        to: String,
        weight: f64,
        /// Vertex that entered the tree through this edge
        joined: String,
        total_weight: f64,
    },
    Finished(MstResult),
}

type WeightOrder = fn(&TreeEdge, &TreeEdge) -> Ordering;

fn by_weight(a: &TreeEdge, b: &TreeEdge) -> Ordering {
    a.weight.total_cmp(&b.weight)
}

/// In-progress Prim state
#[derive(Debug)]
pub struct Prim {
    snapshot: Snapshot,
    start: String,
    seeded: bool,
    queue: PriorityQueue<TreeEdge, WeightOrder>,
    in_tree: HashSet<String>,
    visited: Vec<String>,
    edges: Vec<TreeEdge>,
    total_weight: f64,
    result: Option<MstResult>,
}

impl Prim {
    fn new(snapshot: Snapshot, start: String) -> Self {
        Prim {
            snapshot,
            start,
            seeded: false,
            queue: PriorityQueue::new(by_weight as WeightOrder),
            in_tree: HashSet::new(),
            visited: Vec::new(),
            edges: Vec::new(),
            total_weight: 0.0,
            result: None,
        }
    }

    /// Add `vertex` to the tree and queue its undirected edges leaving it
    fn join(&mut self, vertex: &str, steps: &mut VecDeque<MstStep>) {
        self.in_tree.insert(vertex.to_string());
        self.visited.push(vertex.to_string());

        let snapshot = self.snapshot.clone();
        for edge in snapshot.undirected_edges_at(vertex) {
            let far_visited = edge
                .other_end(vertex)
                .is_none_or(|far| self.in_tree.contains(far));
            if far_visited {
                continue;
            }
            let candidate = TreeEdge::from_edge(edge);
            steps.push_back(MstStep::CandidateQueued(candidate.clone()));
            self.queue.push(candidate);
        }
    }

    fn finish(&mut self, steps: &mut VecDeque<MstStep>) -> Progress {
        let result = MstResult {
            start: self.start.clone(),
            edges: self.edges.clone(),
            total_weight: self.total_weight,
            visited: self.visited.clone(),
            disconnected: self.visited.len() < self.snapshot.vertex_count(),
        };
        tracing::debug!(
            edges = result.edges.len(),
            total_weight = result.total_weight,
            disconnected = result.disconnected,
            "mst finished"
        );
        steps.push_back(MstStep::Finished(result.clone()));
        self.result = Some(result);
        Progress::Done
    }
}

impl Stepper for Prim {
    type Step = MstStep;
    type Output = MstResult;

    fn advance(&mut self, steps: &mut VecDeque<MstStep>) -> Progress {
        if !self.seeded {
            self.seeded = true;
            let start = self.start.clone();
            self.join(&start, steps);
            return Progress::Continue;
        }

        let Some(candidate) = self.queue.pop() else {
            return self.finish(steps);
        };

        let from_in = self.in_tree.contains(&candidate.from);
        let to_in = self.in_tree.contains(&candidate.to);
        if from_in && to_in {
            steps.push_back(MstStep::CandidateDiscarded(candidate));
            return Progress::Continue;
        }

        let joined = if from_in {
            candidate.to.clone()
        } else {
            candidate.from.clone()
        };
        self.total_weight += candidate.weight;
        self.edges.push(candidate.clone());
        tracing::trace!(edge = %candidate.edge, joined = %joined, "tree edge");
        steps.push_back(MstStep::EdgeAdded {
            edge: candidate.edge,
            from: candidate.from,
            to: candidate.to,
            weight: candidate.weight,
            joined: joined.clone(),
            total_weight: self.total_weight,
        });
        self.join(&joined, steps);
        Progress::Continue
    }

    fn into_output(self) -> MstResult {
        match self.result {
            Some(result) => result,
            None => MstResult {
                disconnected: self.visited.len() < self.snapshot.vertex_count(),
                start: self.start,
                edges: self.edges,
                total_weight: self.total_weight,
                visited: self.visited,
            },
        }
    }
}

/// Runs Prim, one run at a time
#[derive(Debug, Clone)]
pub struct MstEngine {
    control: RunControl,
}

impl Default for MstEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MstEngine {
    pub fn new() -> Self {
        MstEngine {
            control: RunControl::new("mst"),
        }
    }

    #[tracing::instrument(skip(self, snapshot), fields(start = ?params.start))]
    pub fn run(&self, snapshot: Snapshot, params: MstParams) -> Result<Run<Prim>> {
        let start = resolve_start(&snapshot, params.start.as_deref())?;
        Run::start(&self.control, Prim::new(snapshot, start))
    }
}

impl Engine for MstEngine {
    fn control(&self) -> &RunControl {
        &self.control
    }
}
