//! The authoritative, editable graph
//!
//! Every mutation validates first and applies second, so a failed call
//! leaves the store exactly as it was.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

use super::snapshot::Snapshot;
use super::types::{validate_weight, Edge, EdgeId, Position, Vertex};

/// In-memory graph with vertex/edge invariants enforced on every change
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    next_edge_id: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.index.get(id).map(|&i| &self.vertices[i])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge stored for exactly this ordered pair
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    /// Edge answering a `from -> to` query; an undirected `to -- from` counts
    pub fn find_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.edge_between(from, to)
            .or_else(|| self.edges.iter().find(|e| e.covers(from, to)))
    }

    /// Add a vertex whose label equals its id
    pub fn add_vertex(&mut self, id: &str) -> Result<&Vertex> {
        self.add_vertex_with(id, None, None)
    }

    /// Add a vertex with an explicit label and/or position
    pub fn add_vertex_with(
        &mut self,
        id: &str,
        label: Option<&str>,
        position: Option<Position>,
    ) -> Result<&Vertex> {
        let id = id.trim();
        if id.is_empty() {
            crate::bail_invalid!("vertex id", "(empty)");
        }
        if self.contains_vertex(id) {
            return Err(GraphError::DuplicateVertex { id: id.to_string() });
        }

        let label = match label.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => id.to_string(),
        };

        self.index.insert(id.to_string(), self.vertices.len());
        self.vertices.push(Vertex {
            id: id.to_string(),
            label,
            position,
        });
        tracing::debug!(vertex = %id, "add_vertex");

        let last = self.vertices.len() - 1;
        Ok(&self.vertices[last])
    }

    /// Create a vertex at a position with a generated id.
    ///
    /// The id is one more than the largest numeric id present, or `"1"`.
    pub fn add_vertex_at(&mut self, position: Option<Position>) -> Result<&Vertex> {
        let id = self.next_vertex_id();
        self.add_vertex_with(&id, None, position)
    }

    /// Id that `add_vertex_at` would assign next
    pub fn next_vertex_id(&self) -> String {
        let max = self
            .vertices
            .iter()
            .filter_map(|v| v.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let mut candidate = max + 1;
        while self.contains_vertex(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Change a vertex's display label
    pub fn set_label(&mut self, id: &str, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            crate::bail_invalid!("vertex label", "(empty)");
        }
        let &i = self
            .index
            .get(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))?;
        self.vertices[i].label = label.to_string();
        Ok(())
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Returns the removed edges.
    pub fn remove_vertex(&mut self, id: &str) -> Result<Vec<Edge>> {
        let &i = self
            .index
            .get(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))?;

        let (removed, kept): (Vec<Edge>, Vec<Edge>) =
            std::mem::take(&mut self.edges)
                .into_iter()
                .partition(|e| e.touches(id));
        self.edges = kept;
        self.vertices.remove(i);
        self.reindex();

        tracing::debug!(vertex = %id, cascaded = removed.len(), "remove_vertex");
        Ok(removed)
    }

    /// Add an edge between two existing vertices
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: Option<f64>,
        directed: bool,
    ) -> Result<EdgeId> {
        for endpoint in [from, to] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::unknown_vertex(endpoint));
            }
        }
        let weight = weight.map(validate_weight).transpose()?;
        if self.edge_between(from, to).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.next_edge_id += 1;
        let id = EdgeId::new(self.next_edge_id);
        self.edges.push(Edge {
            id,
            from: from.to_string(),
            to: to.to_string(),
            weight,
            directed,
        });
        tracing::debug!(edge = %id, from = %from, to = %to, directed, "add_edge");
        Ok(id)
    }

    /// Change weight and directionality of an existing edge
    pub fn update_edge(&mut self, id: EdgeId, weight: Option<f64>, directed: bool) -> Result<()> {
        let weight = weight.map(validate_weight).transpose()?;
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| GraphError::UnknownEdge { id: id.to_string() })?;
        edge.weight = weight;
        edge.directed = directed;
        Ok(())
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| GraphError::UnknownEdge { id: id.to_string() })?;
        tracing::debug!(edge = %id, "remove_edge");
        Ok(self.edges.remove(pos))
    }

    /// Remove the edge stored for an ordered pair
    pub fn remove_edge_between(&mut self, from: &str, to: &str) -> Result<Edge> {
        let id = self
            .edge_between(from, to)
            .map(|e| e.id)
            .ok_or_else(|| GraphError::UnknownEdge {
                id: format!("{}->{}", from, to),
            })?;
        self.remove_edge(id)
    }

    /// Remove every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.edges.clear();
    }

    /// Immutable copy of the current graph for an algorithm run
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.vertices.clone(), self.edges.clone())
    }

    fn reindex(&mut self) {
        self.index = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
    }
}
