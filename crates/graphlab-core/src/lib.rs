//! Graphlab Core Library
//!
//! Graph model, matrix views and step-by-step algorithm engines for Graphlab.

pub mod algos;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
pub mod matrix;
pub mod queue;

pub use engine::{CancelHandle, Engine, Run, RunState};
pub use error::{GraphError, Result};
