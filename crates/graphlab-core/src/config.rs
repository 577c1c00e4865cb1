//! Configuration for graphlab
//!
//! Configuration is read from `graphlab.toml`, either given explicitly or
//! looked up in the directory holding the graph file.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{
    GraphlabConfig, OutputConfig, PlaybackConfig, ShortestPathConfig, TraversalConfig,
    CONFIG_FILE,
};

impl GraphlabConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphlabConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve configuration for a graph file.
    ///
    /// An explicit path must exist. Otherwise `graphlab.toml` beside the graph
    /// file is used when present, and defaults apply when it is not.
    pub fn resolve(explicit: Option<&Path>, graph_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = Self::default_path(graph_path);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Location of the implicit config file for a graph file
    pub fn default_path(graph_path: &Path) -> PathBuf {
        graph_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }
}
