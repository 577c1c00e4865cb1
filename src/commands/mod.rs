//! CLI commands for graphlab

pub mod dispatch;
pub mod edge;
pub mod flow;
pub mod init;
pub mod matrix;
pub mod mst;
pub mod path;
pub mod replay;
pub mod show;
pub mod traverse;
pub mod vertex;

use graphlab_core::error::{GraphError, Result};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| GraphError::failed("serialize output", e))?;
    println!("{}", text);
    Ok(())
}
