//! Adjacency and incidence matrices derived from a snapshot
//!
//! Rows (and adjacency columns) follow the natural order of vertex ids;
//! incidence columns follow the natural order of `(from, to)`. Neither
//! depends on insertion order, so columns carry endpoints and never the
//! store-assigned edge id.

use std::fmt;

use serde::Serialize;

use crate::graph::{format_weight, natural_cmp, Edge, Snapshot};

pub const DIRECTED_MARKER: &str = "→";
pub const UNDIRECTED_MARKER: &str = "•";
pub const LOOP_MARKER: &str = "↻";

/// One cell of the adjacency matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjacencyCell {
    Empty,
    Edge {
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
        directed: bool,
        /// Filled from an undirected edge stored the other way round
        mirrored: bool,
        is_loop: bool,
    },
}

impl fmt::Display for AdjacencyCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjacencyCell::Empty => Ok(()),
            AdjacencyCell::Edge {
                weight: Some(w), ..
            } => f.write_str(&format_weight(*w)),
            AdjacencyCell::Edge { directed: true, .. } => f.write_str(DIRECTED_MARKER),
            AdjacencyCell::Edge { .. } => f.write_str(UNDIRECTED_MARKER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    pub vertices: Vec<String>,
    pub cells: Vec<Vec<AdjacencyCell>>,
}

impl AdjacencyMatrix {
    pub fn cell(&self, from: &str, to: &str) -> Option<AdjacencyCell> {
        let i = self.vertices.iter().position(|v| v == from)?;
        let j = self.vertices.iter().position(|v| v == to)?;
        Some(self.cells[i][j])
    }

    /// Cells rendered as display markers
    pub fn markers(&self) -> Vec<Vec<String>> {
        render(&self.cells)
    }
}

/// One cell of the incidence matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidenceCell {
    Zero,
    /// Tail of a directed edge (+1)
    Tail,
    /// Head of a directed edge (-1)
    Head,
    /// Endpoint of an undirected edge (+2)
    Undirected,
    Loop,
}

impl IncidenceCell {
    /// Numeric entry; loops have none
    pub fn value(&self) -> Option<i8> {
        match self {
            IncidenceCell::Zero => Some(0),
            IncidenceCell::Tail => Some(1),
            IncidenceCell::Head => Some(-1),
            IncidenceCell::Undirected => Some(2),
            IncidenceCell::Loop => None,
        }
    }
}

impl fmt::Display for IncidenceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => f.write_str(LOOP_MARKER),
        }
    }
}

/// An incidence column: one edge, identified by its endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidenceColumn {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub directed: bool,
}

impl IncidenceColumn {
    fn of(edge: &Edge) -> Self {
        Self {
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight,
            directed: edge.directed,
        }
    }

    /// `from->to` or `from--to`
    pub fn label(&self) -> String {
        let arrow = if self.directed { "->" } else { "--" };
        format!("{}{}{}", self.from, arrow, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidenceMatrix {
    pub vertices: Vec<String>,
    pub edges: Vec<IncidenceColumn>,
    pub cells: Vec<Vec<IncidenceCell>>,
}

impl IncidenceMatrix {
    /// Column headers in `from->to` / `from--to` form
    pub fn edge_labels(&self) -> Vec<String> {
        self.edges.iter().map(IncidenceColumn::label).collect()
    }

    pub fn markers(&self) -> Vec<Vec<String>> {
        render(&self.cells)
    }
}

fn render<C: fmt::Display>(cells: &[Vec<C>]) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

fn sorted_vertex_ids(snapshot: &Snapshot) -> Vec<String> {
    let mut ids: Vec<String> = snapshot.vertices().iter().map(|v| v.id.clone()).collect();
    ids.sort_by(|a, b| natural_cmp(a, b));
    ids
}

fn row_of(ids: &[String], id: &str) -> Option<usize> {
    ids.iter().position(|v| v == id)
}

/// Build the `n x n` adjacency matrix
pub fn adjacency(snapshot: &Snapshot) -> AdjacencyMatrix {
    let vertices = sorted_vertex_ids(snapshot);
    let n = vertices.len();
    let mut cells = vec![vec![AdjacencyCell::Empty; n]; n];

    let positioned: Vec<(&Edge, usize, usize)> = snapshot
        .edges()
        .iter()
        .filter_map(|edge| {
            Some((
                edge,
                row_of(&vertices, &edge.from)?,
                row_of(&vertices, &edge.to)?,
            ))
        })
        .collect();

    // direct entries first so an undirected mirror never hides a stored edge
    for &(edge, i, j) in &positioned {
        cells[i][j] = AdjacencyCell::Edge {
            weight: edge.weight,
            directed: edge.directed,
            mirrored: false,
            is_loop: edge.is_loop(),
        };
    }
    for &(edge, i, j) in &positioned {
        if edge.directed || edge.is_loop() || cells[j][i] != AdjacencyCell::Empty {
            continue;
        }
        cells[j][i] = AdjacencyCell::Edge {
            weight: edge.weight,
            directed: false,
            mirrored: true,
            is_loop: false,
        };
    }

    AdjacencyMatrix { vertices, cells }
}

/// Build the `n x m` incidence matrix
pub fn incidence(snapshot: &Snapshot) -> IncidenceMatrix {
    let vertices = sorted_vertex_ids(snapshot);

    let mut edges: Vec<Edge> = snapshot.edges().to_vec();
    edges.sort_by(|a, b| natural_cmp(&a.from, &b.from).then_with(|| natural_cmp(&a.to, &b.to)));

    let cells = vertices
        .iter()
        .map(|vertex| {
            edges
                .iter()
                .map(|edge| incidence_cell(edge, vertex))
                .collect()
        })
        .collect();

    IncidenceMatrix {
        vertices,
        edges: edges.iter().map(IncidenceColumn::of).collect(),
        cells,
    }
}

fn incidence_cell(edge: &Edge, vertex: &str) -> IncidenceCell {
    if edge.is_loop() {
        return if edge.from == vertex {
            IncidenceCell::Loop
        } else {
            IncidenceCell::Zero
        };
    }
    match (edge.directed, edge.from == vertex, edge.to == vertex) {
        (true, true, _) => IncidenceCell::Tail,
        (true, false, true) => IncidenceCell::Head,
        (false, true, _) | (false, _, true) => IncidenceCell::Undirected,
        _ => IncidenceCell::Zero,
    }
}
