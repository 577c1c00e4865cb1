use crate::support::{add_edge, add_vertices, graphlab_in, setup_graph_dir, stdout_json};
use predicates::prelude::*;

#[test]
fn test_edge_add_and_list() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "B", "--weight", "2.5", "--directed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added edge e1\tA->B\tw=2.5"));

    graphlab_in(dir.path())
        .args(["edge", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e1\tA->B\tw=2.5"));
}

#[test]
fn test_quiet_edge_add_prints_id() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B", "C"]);
    add_edge(&dir, "A", "B", None, false);

    graphlab_in(dir.path())
        .args(["--quiet", "edge", "add", "B", "C"])
        .assert()
        .success()
        .stdout("e2\n");
}

#[test]
fn test_edge_negative_and_zero_weights() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", Some("-3"), true);
    add_edge(&dir, "B", "A", Some("0"), true);

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "edge", "list"])
        .output()
        .unwrap();
    let edges = stdout_json(&output);
    assert_eq!(edges[0]["weight"], -3.0);
    assert_eq!(edges[1]["weight"], 0.0);
}

#[test]
fn test_edge_unknown_vertex() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: Z"));
}

#[test]
fn test_edge_duplicate_pair_rejected() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", None, true);

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "B", "--weight", "4"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge already exists: A -> B"));

    // the reversed pair is a different edge
    graphlab_in(dir.path())
        .args(["edge", "add", "B", "A"])
        .assert()
        .success();
}

#[test]
fn test_edge_invalid_weight() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "B", "--weight", "heavy"])
        .assert()
        .code(2);

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "B", "--weight", "NaN"])
        .assert()
        .code(2);
}

#[test]
fn test_edge_self_loop() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A--A"));
}

#[test]
fn test_edge_update_weight_and_direction() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", Some("1"), false);

    graphlab_in(dir.path())
        .args(["edge", "update", "e1", "--weight", "7", "--directed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated edge e1\tA->B\tw=7"));

    graphlab_in(dir.path())
        .args(["edge", "update", "e1", "--clear-weight", "--undirected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated edge e1\tA--B"));

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "edge", "list"])
        .output()
        .unwrap();
    let edges = stdout_json(&output);
    assert!(edges[0].get("weight").is_none());
    assert_eq!(edges[0]["directed"], false);
}

#[test]
fn test_edge_update_conflicting_flags() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", None, false);

    graphlab_in(dir.path())
        .args(["edge", "update", "e1", "--weight", "2", "--clear-weight"])
        .assert()
        .code(2);
}

#[test]
fn test_edge_update_unknown() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["edge", "update", "e9", "--weight", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown edge: e9"));
}

#[test]
fn test_edge_remove_missing_pair() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);

    graphlab_in(dir.path())
        .args(["edge", "remove", "A", "B"])
        .assert()
        .code(3);
}

#[test]
fn test_failed_edit_leaves_file_untouched() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A"]);
    let before = std::fs::read_to_string(dir.path().join("graph.json")).unwrap();

    graphlab_in(dir.path())
        .args(["edge", "add", "A", "missing"])
        .assert()
        .failure();

    let after = std::fs::read_to_string(dir.path().join("graph.json")).unwrap();
    assert_eq!(before, after);
}
