use crate::support::{graphlab_in, setup_abc, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_show_summary() {
    let dir = setup_abc();

    graphlab_in(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph: Untitled graph"))
        .stdout(predicate::str::contains("Saved: "))
        .stdout(predicate::str::contains("3 vertices, 3 edges"))
        .stdout(predicate::str::contains("e3\tA->C\tw=5"));
}

#[test]
fn test_show_json() {
    let dir = setup_abc();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "show"])
        .output()
        .unwrap();
    let shown = stdout_json(&output);
    assert_eq!(shown["vertices"].as_array().unwrap().len(), 3);
    assert_eq!(shown["edges"][0]["id"], "e1");
    assert!(shown["timestamp"].is_string());
}

#[test]
fn test_clear_keeps_name() {
    let dir = tempdir().unwrap();
    graphlab_in(dir.path())
        .args(["init", "--name", "Keep me"])
        .assert()
        .success();
    graphlab_in(dir.path())
        .args(["vertex", "add", "A"])
        .assert()
        .success();

    graphlab_in(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 vertices and 0 edges"));

    graphlab_in(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph: Keep me"))
        .stdout(predicate::str::contains("0 vertices, 0 edges"));
}

#[test]
fn test_loads_hand_written_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("graph.json"),
        r#"{
  "name": "imported",
  "nodes": [{ "id": "1" }, { "id": "2", "label": "Two", "x": 1, "y": 2 }],
  "edges": [
    { "from": "1", "to": "2", "weight": "4.5", "directed": true },
    { "from": "2", "to": "2", "weight": "", "isLoop": true }
  ]
}"#,
    )
    .unwrap();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "edge", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let edges = stdout_json(&output);
    assert_eq!(edges[0]["weight"], 4.5);
    assert!(edges[1].get("weight").is_none());
}

#[test]
fn test_invalid_file_names_entry() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("graph.json"),
        r#"{ "name": "bad", "nodes": [{ "id": "A" }], "edges": [{ "from": "A", "to": "Z" }] }"#,
    )
    .unwrap();

    graphlab_in(dir.path())
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edges[0]: unknown vertex: Z"));
}

#[test]
fn test_malformed_json_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graph.json"), "{ not json").unwrap();

    graphlab_in(dir.path())
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph file"));
}
