//! Edmonds-Karp maximum flow
//!
//! Each edge becomes a residual arc with its weight as capacity (unit when
//! absent) plus a zero-capacity reverse arc unless a real edge already runs
//! the other way. Undirected edges carry flow from `from` to `to` like
//! directed ones.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::engine::{Engine, Progress, Run, RunControl, Stepper};
use crate::error::Result;
use crate::graph::{format_weight, EdgeId, Snapshot};

use super::check_endpoints;

#[derive(Debug, Clone)]
pub struct MaxFlowParams {
    pub source: String,
    pub sink: String,
}

/// Flow carried by one real edge at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeFlow {
    pub edge: EdgeId,
    pub from: String,
    pub to: String,
    pub flow: f64,
    pub capacity: f64,
    /// `flow/capacity`, written back onto edge labels by callers
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowResult {
    pub source: String,
    pub sink: String,
    pub total: f64,
    pub iterations: usize,
    pub edges: Vec<EdgeFlow>,
}

impl FlowResult {
    pub fn flow_on(&self, from: &str, to: &str) -> Option<f64> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.flow)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FlowStep {
    PathDiscovered { path: Vec<String> },
    BottleneckComputed { path: Vec<String>, bottleneck: f64 },
    FlowsUpdated {
        path: Vec<String>,
        bottleneck: f64,
        total: f64,
    },
    NoAugmentingPath { total: f64 },
    Finished(FlowResult),
}

#[derive(Debug, Clone, PartialEq)]
struct ResidualArc {
    capacity: f64,
    flow: f64,
    directed: bool,
    /// Set when the arc stands for a real edge
    edge: Option<EdgeId>,
}

impl ResidualArc {
    fn remaining(&self) -> f64 {
        self.capacity - self.flow
    }
}

type Residual = BTreeMap<String, BTreeMap<String, ResidualArc>>;

fn build_residual(snapshot: &Snapshot) -> Residual {
    let mut residual: Residual = snapshot
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), BTreeMap::new()))
        .collect();

    for edge in snapshot.edges() {
        residual.entry(edge.from.clone()).or_default().insert(
            edge.to.clone(),
            ResidualArc {
                capacity: edge.cost(),
                flow: 0.0,
                directed: edge.directed,
                edge: Some(edge.id),
            },
        );
        residual
            .entry(edge.to.clone())
            .or_default()
            .entry(edge.from.clone())
            .or_insert(ResidualArc {
                capacity: 0.0,
                flow: 0.0,
                directed: edge.directed,
                edge: None,
            });
    }
    residual
}

/// In-progress Edmonds-Karp state
#[derive(Debug)]
pub struct MaxFlow {
    snapshot: Snapshot,
    source: String,
    sink: String,
    residual: Residual,
    total: f64,
    iterations: usize,
    result: Option<FlowResult>,
}

impl MaxFlow {
    fn new(snapshot: Snapshot, params: MaxFlowParams) -> Self {
        let start = std::time::Instant::now();
        let residual = build_residual(&snapshot);
        crate::trace_time!(start, "build_residual", vertices = residual.len());
        MaxFlow {
            snapshot,
            source: params.source,
            sink: params.sink,
            residual,
            total: 0.0,
            iterations: 0,
            result: None,
        }
    }

    fn arc(&self, from: &str, to: &str) -> Option<&ResidualArc> {
        self.residual.get(from).and_then(|arcs| arcs.get(to))
    }

    /// Shortest augmenting path by edge count, over arcs with capacity left
    fn augmenting_path(&self) -> Option<Vec<String>> {
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        seen.insert(self.source.as_str());
        queue.push_back(self.source.as_str());

        while let Some(current) = queue.pop_front() {
            if current == self.sink {
                break;
            }
            let Some(arcs) = self.residual.get(current) else {
                continue;
            };
            for (next, arc) in arcs {
                if arc.remaining() > 0.0 && seen.insert(next.as_str()) {
                    parent.insert(next.as_str(), current);
                    queue.push_back(next.as_str());
                }
            }
        }

        if !seen.contains(self.sink.as_str()) {
            return None;
        }
        let mut path = vec![self.sink.clone()];
        let mut current = self.sink.as_str();
        while let Some(&prev) = parent.get(current) {
            path.push(prev.to_string());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    fn bottleneck(&self, path: &[String]) -> f64 {
        path.windows(2)
            .filter_map(|pair| self.arc(&pair[0], &pair[1]))
            .map(ResidualArc::remaining)
            .fold(f64::INFINITY, f64::min)
    }

    fn augment(&mut self, path: &[String], amount: f64) {
        for pair in path.windows(2) {
            let (u, v) = (&pair[0], &pair[1]);
            if let Some(forward) = self.residual.get_mut(u).and_then(|arcs| arcs.get_mut(v)) {
                forward.flow += amount;
                tracing::trace!(from = %u, to = %v, directed = forward.directed, flow = forward.flow, "arc updated");
            }
            if let Some(reverse) = self.residual.get_mut(v).and_then(|arcs| arcs.get_mut(u)) {
                reverse.flow -= amount;
            }
        }
    }

    fn edge_flows(&self) -> Vec<EdgeFlow> {
        self.snapshot
            .edges()
            .iter()
            .map(|edge| {
                let flow = self
                    .arc(&edge.from, &edge.to)
                    .filter(|arc| arc.edge == Some(edge.id))
                    .map(|arc| arc.flow.max(0.0))
                    .unwrap_or(0.0);
                let capacity = edge.cost();
                EdgeFlow {
                    edge: edge.id,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    flow,
                    capacity,
                    label: format!("{}/{}", format_weight(flow), format_weight(capacity)),
                }
            })
            .collect()
    }

    fn finish(&mut self, steps: &mut VecDeque<FlowStep>) -> Progress {
        let result = FlowResult {
            source: self.source.clone(),
            sink: self.sink.clone(),
            total: self.total,
            iterations: self.iterations,
            edges: self.edge_flows(),
        };
        tracing::debug!(total = result.total, iterations = result.iterations, "max flow finished");
        steps.push_back(FlowStep::Finished(result.clone()));
        self.result = Some(result);
        Progress::Done
    }
}

impl Stepper for MaxFlow {
    type Step = FlowStep;
    type Output = FlowResult;

    fn advance(&mut self, steps: &mut VecDeque<FlowStep>) -> Progress {
        let Some(path) = self.augmenting_path() else {
            steps.push_back(FlowStep::NoAugmentingPath { total: self.total });
            return self.finish(steps);
        };
        steps.push_back(FlowStep::PathDiscovered { path: path.clone() });

        let bottleneck = self.bottleneck(&path);
        steps.push_back(FlowStep::BottleneckComputed {
            path: path.clone(),
            bottleneck,
        });
        if bottleneck <= 0.0 || !bottleneck.is_finite() {
            tracing::warn!(bottleneck, "stopping on a path without usable capacity");
            return self.finish(steps);
        }

        self.augment(&path, bottleneck);
        self.total += bottleneck;
        self.iterations += 1;
        tracing::trace!(iteration = self.iterations, bottleneck, total = self.total, "augmented");

        steps.push_back(FlowStep::FlowsUpdated {
            path,
            bottleneck,
            total: self.total,
        });
        Progress::Continue
    }

    fn into_output(self) -> FlowResult {
        match self.result {
            Some(result) => result,
            None => FlowResult {
                edges: self.edge_flows(),
                source: self.source,
                sink: self.sink,
                total: self.total,
                iterations: self.iterations,
            },
        }
    }
}

/// Runs Edmonds-Karp, one run at a time
#[derive(Debug, Clone)]
pub struct MaxFlowEngine {
    control: RunControl,
}

impl Default for MaxFlowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxFlowEngine {
    pub fn new() -> Self {
        MaxFlowEngine {
            control: RunControl::new("max flow"),
        }
    }

    #[tracing::instrument(skip(self, snapshot), fields(source = %params.source, sink = %params.sink))]
    pub fn run(&self, snapshot: Snapshot, params: MaxFlowParams) -> Result<Run<MaxFlow>> {
        check_endpoints(&snapshot, &params.source, &params.sink)?;
        Run::start(&self.control, MaxFlow::new(snapshot, params))
    }
}

impl Engine for MaxFlowEngine {
    fn control(&self) -> &RunControl {
        &self.control
    }
}
