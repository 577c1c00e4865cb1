use crate::support::{add_edge, add_vertices, graphlab_in, setup_graph_dir, stdout_json};
use predicates::prelude::*;

#[test]
fn test_vertex_add_and_list() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["vertex", "add", "A", "--label", "Alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added vertex A"));

    graphlab_in(dir.path())
        .args(["vertex", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A\tAlpha"));
}

#[test]
fn test_vertex_add_with_position() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["vertex", "add", "P", "--x", "-10", "--y", "20.5"])
        .assert()
        .success();

    graphlab_in(dir.path())
        .args(["vertex", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(-10, 20.5)"));
}

#[test]
fn test_vertex_position_requires_both_coordinates() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["vertex", "add", "P", "--x", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_vertex_duplicate_rejected() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);

    graphlab_in(dir.path())
        .args(["vertex", "add", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex already exists: A"));
}

#[test]
fn test_vertex_auto_ids() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["1", "7", "X"]);

    graphlab_in(dir.path())
        .args(["--quiet", "vertex", "auto"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_vertex_auto_on_empty_graph() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["--quiet", "vertex", "auto"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_vertex_remove_cascades_edges() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B", "C"]);
    add_edge(&dir, "A", "B", None, false);
    add_edge(&dir, "B", "C", None, true);
    add_edge(&dir, "A", "C", None, true);

    graphlab_in(dir.path())
        .args(["vertex", "remove", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed vertex B and 2 edge(s)"));

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "edge", "list"])
        .output()
        .unwrap();
    let edges = stdout_json(&output);
    let edges = edges.as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["from"], "A");
    assert_eq!(edges[0]["to"], "C");
}

#[test]
fn test_vertex_remove_unknown() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["vertex", "remove", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: ghost"));
}

#[test]
fn test_vertex_label() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);

    graphlab_in(dir.path())
        .args(["vertex", "label", "A", "Start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Relabeled vertex A"));

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "vertex", "list"])
        .output()
        .unwrap();
    let vertices = stdout_json(&output);
    assert_eq!(vertices[0]["label"], "Start");
}

#[test]
fn test_vertex_label_empty_rejected() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);

    graphlab_in(dir.path())
        .args(["vertex", "label", "A", ""])
        .assert()
        .code(2);
}
