use crate::support::{add_edge, add_vertices, graphlab_in, setup_abc, setup_graph_dir, stdout_json};
use predicates::prelude::*;

#[test]
fn test_adjacency_table() {
    let dir = setup_abc();

    graphlab_in(dir.path())
        .args(["matrix", "adjacency"])
        .assert()
        .success()
        .stdout("   A  B  C\nA  .  1  5\nB  .  .  2\nC  .  .  .\n");
}

#[test]
fn test_adjacency_mirrors_undirected_edges() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", None, false);

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "matrix", "adjacency"])
        .output()
        .unwrap();
    let m = stdout_json(&output);
    assert_eq!(m["vertices"][0], "A");
    assert_eq!(m["cells"][0][1]["kind"], "edge");
    assert_eq!(m["cells"][0][1]["mirrored"], false);
    assert_eq!(m["cells"][1][0]["kind"], "edge");
    assert_eq!(m["cells"][1][0]["mirrored"], true);
    assert_eq!(m["cells"][0][0]["kind"], "empty");
}

#[test]
fn test_adjacency_rows_in_natural_order() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["10", "2", "1"]);

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "matrix", "adjacency"])
        .output()
        .unwrap();
    let m = stdout_json(&output);
    assert_eq!(m["vertices"], serde_json::json!(["1", "2", "10"]));
}

#[test]
fn test_incidence_matrix() {
    let dir = setup_abc();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "matrix", "incidence"])
        .output()
        .unwrap();
    let m = stdout_json(&output);
    let edges = m["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[1]["from"], "A");
    assert_eq!(edges[1]["to"], "C");
    assert!(edges[1].get("id").is_none());

    // row A: tail of A->B and A->C
    assert_eq!(m["cells"][0], serde_json::json!(["tail", "tail", "zero"]));
    // row C: head of A->C and B->C
    assert_eq!(m["cells"][2], serde_json::json!(["zero", "head", "head"]));
}

#[test]
fn test_incidence_table_headers() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", None, false);
    add_edge(&dir, "B", "B", None, false);

    graphlab_in(dir.path())
        .args(["matrix", "incidence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A--B"))
        .stdout(predicate::str::contains("B--B"))
        .stdout(predicate::str::contains("↻"));
}

#[test]
fn test_matrix_empty_graph() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["matrix", "adjacency"])
        .assert()
        .success()
        .stdout("(empty graph)\n");
}

#[test]
fn test_matrix_unknown_kind() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["matrix", "laplacian"])
        .assert()
        .code(2);
}
