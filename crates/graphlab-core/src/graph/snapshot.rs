//! Immutable graph snapshots handed to the algorithm engines

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{Direction, Edge, EdgeId, Vertex};

#[derive(Debug)]
struct SnapshotData {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
}

/// Frozen copy of the graph at the moment an algorithm run begins.
///
/// Cloning is cheap: clones share the same underlying data, which is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    inner: Arc<SnapshotData>,
}

/// A vertex reachable in one step, together with the edge used to reach it
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub vertex: &'a str,
    pub edge: &'a Edge,
}

impl Snapshot {
    pub(crate) fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Snapshot {
            inner: Arc::new(SnapshotData {
                vertices,
                edges,
                index,
            }),
        }
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.inner.vertices
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.inner.edges
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.inner
            .index
            .get(id)
            .map(|&i| &self.inner.vertices[i])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.inner.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.inner.index.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.vertices.is_empty()
    }

    /// First vertex in insertion order, the default start for traversals
    pub fn first_vertex(&self) -> Option<&Vertex> {
        self.inner.vertices.first()
    }

    /// Vertices reachable from `id` in one step under `direction`, in edge
    /// insertion order.
    ///
    /// Undirected edges are always followed both ways. Self-loops are never
    /// returned since they lead back to `id`.
    pub fn neighbors(&self, id: &str, direction: Direction) -> Vec<Neighbor<'_>> {
        self.inner
            .edges
            .iter()
            .filter(|edge| !edge.is_loop())
            .filter_map(|edge| {
                let vertex = if !edge.directed {
                    edge.other_end(id)?
                } else {
                    match direction {
                        Direction::Out if edge.from == id => edge.to.as_str(),
                        Direction::In if edge.to == id => edge.from.as_str(),
                        Direction::Both => edge.other_end(id)?,
                        _ => return None,
                    }
                };
                Some(Neighbor { vertex, edge })
            })
            .collect()
    }

    /// Undirected edges touching `id`, loops included
    pub fn undirected_edges_at<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.inner
            .edges
            .iter()
            .filter(move |edge| !edge.directed && edge.touches(id))
    }
}
