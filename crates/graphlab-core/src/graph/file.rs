//! JSON graph file format
//!
//! ```json
//! {
//!   "name": "...",
//!   "timestamp": "2024-01-01T00:00:00+00:00",
//!   "nodes": [{ "id": "1", "label": "1", "x": 10.0, "y": 20.0 }],
//!   "edges": [{ "from": "1", "to": "2", "weight": 3, "directed": true, "isLoop": false }],
//!   "metadata": { "version": "1.0", "savedAt": "...", "totalNodes": 2, "totalEdges": 1 }
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GraphError, Result};

use super::store::GraphStore;
use super::types::{parse_weight, validate_weight, Position};

/// Format version written into `metadata.version`
pub const FORMAT_VERSION: &str = "1.0";

/// On-disk representation of a graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFile {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FileMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(deserialize_with = "vertex_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    #[serde(deserialize_with = "vertex_id")]
    pub from: String,
    #[serde(deserialize_with = "vertex_id")]
    pub to: String,
    #[serde(default)]
    pub weight: Option<WeightValue>,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub is_loop: bool,
}

/// Hand-edited files may write vertex ids as bare numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawVertexId {
    Text(String),
    Integer(i64),
    Number(f64),
}

fn vertex_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawVertexId::deserialize(deserializer)? {
        RawVertexId::Text(s) => s,
        RawVertexId::Integer(n) => n.to_string(),
        RawVertexId::Number(n) => n.to_string(),
    })
}

/// Weights appear both as numbers and as numeric strings in saved files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightValue {
    Number(f64),
    Text(String),
}

impl WeightValue {
    fn resolve(&self) -> Result<Option<f64>> {
        match self {
            WeightValue::Number(n) => validate_weight(*n).map(Some),
            WeightValue::Text(s) => parse_weight(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub version: String,
    pub saved_at: String,
    pub total_nodes: usize,
    pub total_edges: usize,
}

/// A load failure pinned to the entry that caused it
#[derive(Debug)]
struct EntryError {
    entry: String,
    error: GraphError,
}

impl GraphFile {
    /// Capture a store for saving, stamped with the current time
    pub fn from_store(store: &GraphStore, name: &str) -> Self {
        let now = Utc::now().to_rfc3339();
        let nodes = store
            .vertices()
            .iter()
            .map(|v| NodeRecord {
                id: v.id.clone(),
                label: Some(v.label.clone()),
                x: v.position.map(|p| p.x),
                y: v.position.map(|p| p.y),
            })
            .collect();
        let edges = store
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                from: e.from.clone(),
                to: e.to.clone(),
                weight: e.weight.map(WeightValue::Number),
                directed: e.directed,
                is_loop: e.is_loop(),
            })
            .collect();

        GraphFile {
            name: name.to_string(),
            timestamp: Some(now.clone()),
            nodes,
            edges,
            metadata: Some(FileMetadata {
                version: FORMAT_VERSION.to_string(),
                saved_at: now,
                total_nodes: store.vertex_count(),
                total_edges: store.edge_count(),
            }),
        }
    }

    /// Build a store from the file, failing on the first invalid entry.
    ///
    /// Errors are the store's own (`DuplicateVertex`, `UnknownVertex`, ...).
    pub fn into_store(self) -> Result<GraphStore> {
        self.build().map_err(|e| e.error)
    }

    /// Like [`GraphFile::into_store`], but reports failures as
    /// `InvalidGraphFile` naming `path` and the offending entry
    pub fn into_store_at(self, path: &Path) -> Result<GraphStore> {
        self.build()
            .map_err(|e| GraphError::invalid_file(path, format!("{}: {}", e.entry, e.error)))
    }

    fn build(self) -> std::result::Result<GraphStore, EntryError> {
        let mut store = GraphStore::new();

        for (i, node) in self.nodes.iter().enumerate() {
            let position = match (node.x, node.y) {
                (Some(x), Some(y)) => Some(Position { x, y }),
                _ => None,
            };
            store
                .add_vertex_with(&node.id, node.label.as_deref(), position)
                .map_err(|error| EntryError {
                    entry: format!("nodes[{}]", i),
                    error,
                })?;
        }

        for (i, edge) in self.edges.iter().enumerate() {
            let entry_error = |error| EntryError {
                entry: format!("edges[{}]", i),
                error,
            };
            let weight = match &edge.weight {
                Some(w) => w.resolve().map_err(entry_error)?,
                None => None,
            };
            if edge.is_loop != (edge.from == edge.to) {
                tracing::debug!(entry = i, "ignoring stale isLoop flag");
            }
            store
                .add_edge(&edge.from, &edge.to, weight, edge.directed)
                .map_err(entry_error)?;
        }

        Ok(store)
    }

    /// Read and parse a graph file without validating its contents
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GraphError::GraphFileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GraphError::Io(e)
            }
        })?;
        serde_json::from_str(&content).map_err(|e| GraphError::invalid_file(path, e))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::failed("serialize graph file", e))?;
        fs::write(path, content + "\n")?;
        Ok(())
    }
}

/// Load a graph file into a store, returning the stored graph name too
pub fn load(path: &Path) -> Result<(String, GraphStore)> {
    let start = std::time::Instant::now();
    let file = GraphFile::read(path)?;
    let name = file.name.clone();
    let store = file.into_store_at(path)?;

    crate::trace_time!(
        start,
        "load_graph",
        vertices = store.vertex_count(),
        edges = store.edge_count()
    );
    Ok((name, store))
}

/// Save a store to a graph file
pub fn save(path: &Path, name: &str, store: &GraphStore) -> Result<()> {
    GraphFile::from_store(store, name).write(path)?;
    tracing::debug!(path = %path.display(), vertices = store.vertex_count(), "saved graph");
    Ok(())
}
