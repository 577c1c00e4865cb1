//! Error types and exit codes for graphlab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown or duplicate entities, invalid graph file, bad endpoints)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphlab binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, duplicate edge, invalid file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphlab operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown vertex: {id}")]
    UnknownVertex { id: String },

    #[error("vertex already exists: {id}")]
    DuplicateVertex { id: String },

    #[error("edge already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("unknown edge: {id}")]
    UnknownEdge { id: String },

    #[error("invalid endpoints: source and sink must differ (both are {source_id})")]
    InvalidEndpoints { source_id: String },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    #[error("graph file not found: {path:?} (run `graphlab init` first)")]
    GraphFileNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("{engine} engine is already running")]
    AlreadyRunning { engine: &'static str },

    #[error("run was cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex id missing from the graph
    pub fn unknown_vertex(id: impl Into<String>) -> Self {
        GraphError::UnknownVertex { id: id.into() }
    }

    /// Create an error for a malformed graph file entry
    pub fn invalid_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO or serialization step
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::UnknownVertex { .. }
            | GraphError::DuplicateVertex { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::UnknownEdge { .. }
            | GraphError::InvalidEndpoints { .. }
            | GraphError::EmptyGraph
            | GraphError::InvalidGraphFile { .. }
            | GraphError::GraphFileNotFound { .. } => ExitCode::Data,

            GraphError::AlreadyRunning { .. }
            | GraphError::Cancelled
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperation { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::UnknownEdge { .. } => "unknown_edge",
            GraphError::InvalidEndpoints { .. } => "invalid_endpoints",
            GraphError::EmptyGraph => "empty_graph",
            GraphError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphError::GraphFileNotFound { .. } => "graph_file_not_found",
            GraphError::AlreadyRunning { .. } => "already_running",
            GraphError::Cancelled => "cancelled",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperation { .. } => "failed_operation",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphlab operations
pub type Result<T> = std::result::Result<T, GraphError>;
