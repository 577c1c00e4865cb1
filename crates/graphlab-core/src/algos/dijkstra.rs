//! Dijkstra shortest path with lazy deletion

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::engine::{Engine, Progress, Run, RunControl, Stepper};
use crate::error::Result;
use crate::graph::{Direction, EdgeId, Snapshot};
use crate::queue::PriorityQueue;

use super::check_endpoints;

#[derive(Debug, Clone)]
pub struct ShortestPathParams {
    pub source: String,
    pub sink: String,
    /// Follow directed edges tail to head only; otherwise ignore direction
    pub consider_directions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettledVertex {
    pub vertex: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub source: String,
    pub sink: String,
    pub found: bool,
    /// Total weight of the path; absent when the sink is unreachable
    pub distance: Option<f64>,
    pub path: Vec<String>,
    pub edges: Vec<EdgeId>,
    /// Finalized vertices in the order they were settled
    pub settled: Vec<SettledVertex>,
}

impl PathResult {
    pub fn settled_distance(&self, vertex: &str) -> Option<f64> {
        self.settled
            .iter()
            .find(|s| s.vertex == vertex)
            .map(|s| s.distance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PathStep {
    /// Correctness is not guaranteed; the run continues
    NegativeWeightWarning { edges: Vec<EdgeId> },
    Visiting { vertex: String, distance: f64 },
    Updated {
        vertex: String,
        distance: f64,
        via: String,
        edge: EdgeId,
    },
    NotImproved {
        vertex: String,
        candidate: f64,
        distance: f64,
    },
    Finished(PathResult),
}

#[derive(Debug, Clone)]
struct QueueEntry {
    vertex: String,
    distance: f64,
}

type DistanceOrder = fn(&QueueEntry, &QueueEntry) -> Ordering;

fn by_distance(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    a.distance.total_cmp(&b.distance)
}

/// In-progress Dijkstra state
#[derive(Debug)]
pub struct ShortestPath {
    snapshot: Snapshot,
    source: String,
    sink: String,
    direction: Direction,
    scanned: bool,
    queue: PriorityQueue<QueueEntry, DistanceOrder>,
    distances: HashMap<String, f64>,
    predecessors: HashMap<String, (String, EdgeId)>,
    visited: HashSet<String>,
    settled: Vec<SettledVertex>,
    result: Option<PathResult>,
}

impl ShortestPath {
    fn new(snapshot: Snapshot, params: ShortestPathParams) -> Self {
        let mut queue = PriorityQueue::new(by_distance as DistanceOrder);
        queue.push(QueueEntry {
            vertex: params.source.clone(),
            distance: 0.0,
        });
        let mut distances = HashMap::new();
        distances.insert(params.source.clone(), 0.0);

        ShortestPath {
            snapshot,
            source: params.source,
            sink: params.sink,
            direction: Direction::from_consider_directions(params.consider_directions),
            scanned: false,
            queue,
            distances,
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            settled: Vec::new(),
            result: None,
        }
    }

    fn distance(&self, vertex: &str) -> f64 {
        self.distances.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    fn reconstruct(&self) -> (Vec<String>, Vec<EdgeId>) {
        let mut path = vec![self.sink.clone()];
        let mut edges = Vec::new();
        let mut current = self.sink.as_str();
        while let Some((prev, edge)) = self.predecessors.get(current) {
            path.push(prev.clone());
            edges.push(*edge);
            current = prev;
        }
        path.reverse();
        edges.reverse();
        (path, edges)
    }

    fn finish(&mut self, found: bool, steps: &mut VecDeque<PathStep>) -> Progress {
        let (path, edges, distance) = if found {
            let (path, edges) = self.reconstruct();
            (path, edges, Some(self.distance(&self.sink)))
        } else {
            (Vec::new(), Vec::new(), None)
        };
        let result = PathResult {
            source: self.source.clone(),
            sink: self.sink.clone(),
            found,
            distance,
            path,
            edges,
            settled: std::mem::take(&mut self.settled),
        };
        tracing::debug!(found, distance = ?result.distance, "shortest path finished");
        self.queue.clear();
        steps.push_back(PathStep::Finished(result.clone()));
        self.result = Some(result);
        Progress::Done
    }
}

impl Stepper for ShortestPath {
    type Step = PathStep;
    type Output = PathResult;

    fn advance(&mut self, steps: &mut VecDeque<PathStep>) -> Progress {
        if !self.scanned {
            self.scanned = true;
            let negative: Vec<EdgeId> = self
                .snapshot
                .edges()
                .iter()
                .filter(|e| e.cost() < 0.0)
                .map(|e| e.id)
                .collect();
            if !negative.is_empty() {
                tracing::warn!(count = negative.len(), "negative edge weights present");
                steps.push_back(PathStep::NegativeWeightWarning { edges: negative });
            }
            return Progress::Continue;
        }

        let Some(entry) = self.queue.pop() else {
            return self.finish(false, steps);
        };
        if !self.visited.insert(entry.vertex.clone()) {
            return Progress::Continue;
        }

        let current = entry.vertex;
        let current_distance = entry.distance;
        steps.push_back(PathStep::Visiting {
            vertex: current.clone(),
            distance: current_distance,
        });
        self.settled.push(SettledVertex {
            vertex: current.clone(),
            distance: current_distance,
        });

        if current == self.sink {
            return self.finish(true, steps);
        }

        let snapshot = self.snapshot.clone();
        for neighbor in snapshot.neighbors(&current, self.direction) {
            if self.visited.contains(neighbor.vertex) {
                continue;
            }
            let candidate = current_distance + neighbor.edge.cost();
            let stored = self.distance(neighbor.vertex);
            if candidate < stored {
                tracing::trace!(vertex = neighbor.vertex, candidate, "relaxed");
                self.distances.insert(neighbor.vertex.to_string(), candidate);
                self.predecessors.insert(
                    neighbor.vertex.to_string(),
                    (current.clone(), neighbor.edge.id),
                );
                self.queue.push(QueueEntry {
                    vertex: neighbor.vertex.to_string(),
                    distance: candidate,
                });
                steps.push_back(PathStep::Updated {
                    vertex: neighbor.vertex.to_string(),
                    distance: candidate,
                    via: current.clone(),
                    edge: neighbor.edge.id,
                });
            } else {
                steps.push_back(PathStep::NotImproved {
                    vertex: neighbor.vertex.to_string(),
                    candidate,
                    distance: stored,
                });
            }
        }
        Progress::Continue
    }

    fn into_output(self) -> PathResult {
        self.result.unwrap_or_else(|| PathResult {
            source: self.source,
            sink: self.sink,
            found: false,
            distance: None,
            path: Vec::new(),
            edges: Vec::new(),
            settled: self.settled,
        })
    }
}

/// Runs Dijkstra, one run at a time
#[derive(Debug, Clone)]
pub struct ShortestPathEngine {
    control: RunControl,
}

impl Default for ShortestPathEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortestPathEngine {
    pub fn new() -> Self {
        ShortestPathEngine {
            control: RunControl::new("shortest path"),
        }
    }

    #[tracing::instrument(skip(self, snapshot), fields(source = %params.source, sink = %params.sink))]
    pub fn run(&self, snapshot: Snapshot, params: ShortestPathParams) -> Result<Run<ShortestPath>> {
        check_endpoints(&snapshot, &params.source, &params.sink)?;
        Run::start(&self.control, ShortestPath::new(snapshot, params))
    }
}

impl Engine for ShortestPathEngine {
    fn control(&self) -> &RunControl {
        &self.control
    }
}
