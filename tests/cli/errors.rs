use crate::support::{add_vertices, graphlab_in, setup_graph_dir, stderr_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_json_error_envelope_for_data_error() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "vertex", "add", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let err = stderr_json(&output);
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "duplicate_vertex");
    assert_eq!(err["error"]["message"], "vertex already exists: A");
}

#[test]
fn test_json_error_envelope_for_missing_file() {
    let dir = tempdir().unwrap();

    let output = graphlab_in(dir.path())
        .args(["--format=json", "edge", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "graph_file_not_found");
}

#[test]
fn test_json_error_for_invalid_value() {
    let dir = setup_graph_dir();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "vertex", "add", "  "])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "invalid_value");
}

#[test]
fn test_quiet_suppresses_human_error_text() {
    let dir = tempdir().unwrap();

    graphlab_in(dir.path())
        .args(["--quiet", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_human_error_prefix() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["flow", "S", "T"])
        .assert()
        .code(3)
        .stderr(predicate::str::starts_with("error: unknown vertex: S"));
}
