use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight used by every weighted algorithm when an edge carries none
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Store-assigned edge identifier, rendered as `e<N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EdgeId(u64);

impl EdgeId {
    pub fn new(raw: u64) -> Self {
        EdgeId(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl FromStr for EdgeId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().strip_prefix('e').unwrap_or(s.trim());
        digits
            .parse::<u64>()
            .map(EdgeId)
            .map_err(|_| GraphError::invalid_value("edge id", s))
    }
}

impl From<EdgeId> for String {
    fn from(id: EdgeId) -> String {
        id.to_string()
    }
}

impl TryFrom<String> for EdgeId {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Presentation-layer coordinates; algorithms never read them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A vertex in the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Vertex {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Vertex {
            label: id.clone(),
            id,
            position: None,
        }
    }
}

/// An edge between two vertices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub directed: bool,
}

impl Edge {
    /// True when both endpoints are the same vertex
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Weight as seen by algorithms (absent means unit weight)
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn touches(&self, vertex: &str) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// Endpoint opposite `vertex`, if the edge touches it
    pub fn other_end(&self, vertex: &str) -> Option<&str> {
        if self.from == vertex {
            Some(&self.to)
        } else if self.to == vertex {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Whether this edge answers a query for `from -> to`.
    /// Undirected edges also cover the reversed pair.
    pub fn covers(&self, from: &str, to: &str) -> bool {
        (self.from == from && self.to == to)
            || (!self.directed && self.from == to && self.to == from)
    }

    /// Short `from->to` / `from--to` form used in logs and tables
    pub fn describe(&self) -> String {
        let arrow = if self.directed { "->" } else { "--" };
        format!("{}{}{}", self.from, arrow, self.to)
    }
}

/// Which way directed edges may be followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Directed edges tail to head only
    #[default]
    Out,
    /// Directed edges head to tail only
    In,
    /// Ignore edge direction
    Both,
}

impl Direction {
    /// Map the shortest-path "consider directions" switch onto a policy
    pub fn from_consider_directions(consider: bool) -> Self {
        if consider {
            Direction::Out
        } else {
            Direction::Both
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Out => "out",
            Direction::In => "in",
            Direction::Both => "both",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "out" => Ok(Direction::Out),
            "in" => Ok(Direction::In),
            "both" => Ok(Direction::Both),
            other => Err(format!(
                "unknown direction '{}' (expected: out, in, both)",
                other
            )),
        }
    }
}

/// Check that a weight is a usable number
pub fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(GraphError::invalid_value("weight", weight))
    }
}

/// Parse a weight typed by a user or stored as text.
/// Blank input means "no weight".
pub fn parse_weight(text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| GraphError::invalid_value("weight", text))?;
    validate_weight(value).map(Some)
}

/// Render a weight the way it is shown in matrices and labels
pub fn format_weight(weight: f64) -> String {
    format!("{}", weight)
}
