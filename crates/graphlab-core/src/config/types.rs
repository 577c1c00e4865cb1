//! Configuration type definitions

use crate::graph::Direction;
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up next to the graph file
pub const CONFIG_FILE: &str = "graphlab.toml";

/// Graphlab configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphlabConfig {
    /// Step replay pacing
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// BFS / DFS defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Dijkstra defaults
    #[serde(default)]
    pub shortest_path: ShortestPathConfig,

    /// Graph file output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pacing between replayed step events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between printed steps in milliseconds (0 = no delay)
    #[serde(default)]
    pub step_delay_ms: u64,
}

/// Traversal defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Which way directed edges are followed
    #[serde(default)]
    pub direction: Direction,
}

/// Shortest path defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathConfig {
    /// Only follow directed edges tail to head
    #[serde(default = "default_consider_directions")]
    pub consider_directions: bool,
}

/// Graph file output defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Name written into freshly initialized graph files
    #[serde(default = "default_graph_name")]
    pub default_name: String,
}

fn default_consider_directions() -> bool {
    true
}

fn default_graph_name() -> String {
    "Untitled graph".to_string()
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        ShortestPathConfig {
            consider_directions: default_consider_directions(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            default_name: default_graph_name(),
        }
    }
}
