//! Algorithm engines
//!
//! - `traversal`: breadth-first and depth-first search
//! - `dijkstra`: single-source shortest path
//! - `flow`: Edmonds-Karp maximum flow
//! - `mst`: Prim's minimum spanning tree over undirected edges
//!
//! Every engine takes an immutable [`Snapshot`] and returns a lazy
//! [`Run`](crate::engine::Run) of step events.

pub mod dijkstra;
pub mod flow;
pub mod mst;
pub mod traversal;

pub use dijkstra::{PathResult, PathStep, SettledVertex, ShortestPath, ShortestPathEngine, ShortestPathParams};
pub use flow::{EdgeFlow, FlowResult, FlowStep, MaxFlow, MaxFlowEngine, MaxFlowParams};
pub use mst::{MstEngine, MstParams, MstResult, MstStep, Prim, TreeEdge};
pub use traversal::{
    Strategy, Traversal, TraversalEngine, TraversalParams, TraversalResult, TraversalStep, Visit,
};

use crate::error::{GraphError, Result};
use crate::graph::Snapshot;

/// Resolve an optional start vertex, defaulting to the first vertex
pub(crate) fn resolve_start(snapshot: &Snapshot, start: Option<&str>) -> Result<String> {
    match start {
        Some(id) if snapshot.contains_vertex(id) => Ok(id.to_string()),
        Some(id) => Err(GraphError::unknown_vertex(id)),
        None => snapshot
            .first_vertex()
            .map(|v| v.id.clone())
            .ok_or(GraphError::EmptyGraph),
    }
}

/// Validate a source/sink pair
pub(crate) fn check_endpoints(snapshot: &Snapshot, source: &str, sink: &str) -> Result<()> {
    if source == sink {
        return Err(GraphError::InvalidEndpoints {
            source_id: source.to_string(),
        });
    }
    for id in [source, sink] {
        if !snapshot.contains_vertex(id) {
            return Err(GraphError::unknown_vertex(id));
        }
    }
    Ok(())
}
