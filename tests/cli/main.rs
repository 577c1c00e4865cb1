//! Integration tests for graphlab subcommands

mod algorithms;
mod config;
mod edge;
mod errors;
mod matrix;
mod show;
mod support;
mod vertex;
