use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for graphlab
pub fn graphlab() -> Command {
    cargo_bin_cmd!("graphlab")
}

/// Get a Command for graphlab running inside `dir`
pub fn graphlab_in(dir: &Path) -> Command {
    let mut cmd = graphlab();
    cmd.current_dir(dir).env_remove("GRAPHLAB_GRAPH");
    cmd
}

/// Create a temp dir holding an empty `graph.json`
pub fn setup_graph_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    graphlab_in(dir.path()).arg("init").assert().success();
    dir
}

pub fn add_vertices(dir: &TempDir, ids: &[&str]) {
    for id in ids {
        graphlab_in(dir.path())
            .args(["vertex", "add", id])
            .assert()
            .success();
    }
}

/// Add an edge; `weight` of `None` leaves it unweighted
pub fn add_edge(dir: &TempDir, from: &str, to: &str, weight: Option<&str>, directed: bool) {
    let mut cmd = graphlab_in(dir.path());
    cmd.args(["edge", "add", from, to]);
    if let Some(w) = weight {
        cmd.args(["--weight", w]);
    }
    if directed {
        cmd.arg("--directed");
    }
    cmd.assert().success();
}

/// A, B, C with A->B (1), B->C (2), A->C (5), all directed
#[allow(dead_code)]
pub fn setup_abc() -> TempDir {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B", "C"]);
    add_edge(&dir, "A", "B", Some("1"), true);
    add_edge(&dir, "B", "C", Some("2"), true);
    add_edge(&dir, "A", "C", Some("5"), true);
    dir
}

/// Parse stdout of a `--format json` run
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse the JSON error envelope written to stderr
#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}
