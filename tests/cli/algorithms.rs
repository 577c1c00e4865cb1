use crate::support::{
    add_edge, add_vertices, graphlab_in, setup_abc, setup_graph_dir, stderr_json, stdout_json,
};
use predicates::prelude::*;
use tempfile::TempDir;

/// A-B, A-C, B-D, all undirected
fn setup_tree() -> TempDir {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B", "C", "D"]);
    add_edge(&dir, "A", "B", None, false);
    add_edge(&dir, "A", "C", None, false);
    add_edge(&dir, "B", "D", None, false);
    dir
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_bfs_order() {
    let dir = setup_tree();

    graphlab_in(dir.path())
        .args(["traverse", "bfs", "--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit A (start)"))
        .stdout(predicate::str::contains("visit D (level 2, from B)"))
        .stdout(predicate::str::contains("BFS from A: A -> B -> C -> D"));
}

#[test]
fn test_dfs_order() {
    let dir = setup_tree();

    graphlab_in(dir.path())
        .args(["--quiet", "traverse", "dfs"])
        .assert()
        .success()
        .stdout("DFS from A: A -> B -> D -> C\n");
}

#[test]
fn test_traverse_respects_direction() {
    let dir = setup_abc();

    graphlab_in(dir.path())
        .args(["--quiet", "traverse", "bfs", "--start", "C"])
        .assert()
        .success()
        .stdout("BFS from C: C\n");

    graphlab_in(dir.path())
        .args(["--quiet", "traverse", "bfs", "--start", "C", "--direction", "in"])
        .assert()
        .success()
        .stdout("BFS from C: C -> B -> A\n");
}

#[test]
fn test_traverse_json_steps() {
    let dir = setup_tree();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "traverse", "bfs"])
        .output()
        .unwrap();
    let run = stdout_json(&output);
    let steps = run["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["event"], "visited");
    assert_eq!(steps[4]["event"], "completed");
    assert_eq!(steps[4]["visited"], 4);
    assert_eq!(run["result"]["strategy"], "bfs");
    assert_eq!(run["result"]["visits"][3]["level"], 2);
}

#[test]
fn test_traverse_empty_graph() {
    let dir = setup_graph_dir();

    graphlab_in(dir.path())
        .args(["traverse", "bfs"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph has no vertices"));
}

// ============================================================================
// Shortest path
// ============================================================================

#[test]
fn test_shortest_path_abc() {
    let dir = setup_abc();

    graphlab_in(dir.path())
        .args(["path", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settle A at 0"))
        .stdout(predicate::str::contains("Shortest path A -> B -> C, distance 3"));
}

#[test]
fn test_shortest_path_unreachable_against_direction() {
    let dir = setup_abc();

    graphlab_in(dir.path())
        .args(["--quiet", "path", "C", "A"])
        .assert()
        .success()
        .stdout("No path from C to A\n");

    graphlab_in(dir.path())
        .args(["--quiet", "path", "C", "A", "--ignore-directions"])
        .assert()
        .success()
        .stdout("Shortest path C -> B -> A, distance 3\n");
}

#[test]
fn test_shortest_path_json() {
    let dir = setup_abc();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "path", "A", "C"])
        .output()
        .unwrap();
    let run = stdout_json(&output);
    assert_eq!(run["result"]["found"], true);
    assert_eq!(run["result"]["distance"], 3.0);
    assert_eq!(run["result"]["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(run["result"]["edges"], serde_json::json!(["e1", "e2"]));
    let last = run["steps"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["event"], "finished");
}

#[test]
fn test_shortest_path_negative_weight_warning() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B"]);
    add_edge(&dir, "A", "B", Some("-1"), true);

    graphlab_in(dir.path())
        .args(["path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: negative weights on e1"))
        .stdout(predicate::str::contains("distance -1"));
}

#[test]
fn test_shortest_path_same_endpoints() {
    let dir = setup_abc();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "path", "A", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "invalid_endpoints");
}

#[test]
fn test_shortest_path_unknown_vertex() {
    let dir = setup_abc();

    graphlab_in(dir.path())
        .args(["path", "A", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: Q"));
}

// ============================================================================
// Max flow
// ============================================================================

fn setup_flow() -> TempDir {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["S", "A", "B", "T"]);
    add_edge(&dir, "S", "A", Some("3"), true);
    add_edge(&dir, "S", "B", Some("2"), true);
    add_edge(&dir, "A", "T", Some("2"), true);
    add_edge(&dir, "B", "T", Some("3"), true);
    dir
}

#[test]
fn test_max_flow() {
    let dir = setup_flow();

    graphlab_in(dir.path())
        .args(["flow", "S", "T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("augmenting path S -> A -> T"))
        .stdout(predicate::str::contains("Maximum flow S -> T: 4"))
        .stdout(predicate::str::contains("S->A  2/3"));
}

#[test]
fn test_max_flow_json() {
    let dir = setup_flow();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "flow", "S", "T"])
        .output()
        .unwrap();
    let run = stdout_json(&output);
    assert_eq!(run["result"]["total"], 4.0);
    assert_eq!(run["result"]["iterations"], 2);
    let events: Vec<&str> = run["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["event"].as_str().unwrap())
        .collect();
    assert_eq!(events[0], "path_discovered");
    assert_eq!(events[1], "bottleneck_computed");
    assert_eq!(events[2], "flows_updated");
    assert!(events.contains(&"no_augmenting_path"));
}

#[test]
fn test_max_flow_disconnected_sink() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["S", "T"]);

    graphlab_in(dir.path())
        .args(["--quiet", "flow", "S", "T"])
        .assert()
        .success()
        .stdout("Maximum flow S -> T: 0\n");
}

// ============================================================================
// Minimum spanning tree
// ============================================================================

#[test]
fn test_mst_triangle() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B", "C"]);
    add_edge(&dir, "A", "B", Some("1"), false);
    add_edge(&dir, "B", "C", Some("2"), false);
    add_edge(&dir, "A", "C", Some("3"), false);

    graphlab_in(dir.path())
        .args(["mst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add A--B (1), B joins, total 1"))
        .stdout(predicate::str::contains(
            "Minimum spanning tree from A: 2 edge(s), total weight 3",
        ));
}

#[test]
fn test_mst_disconnected_warning() {
    let dir = setup_graph_dir();
    add_vertices(&dir, &["A", "B", "C"]);
    add_edge(&dir, "A", "B", Some("4"), false);

    graphlab_in(dir.path())
        .args(["--quiet", "mst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 4"))
        .stdout(predicate::str::contains("disconnected"));
}

#[test]
fn test_mst_ignores_directed_edges() {
    let dir = setup_abc();

    let output = graphlab_in(dir.path())
        .args(["--format", "json", "mst", "--start", "B"])
        .output()
        .unwrap();
    let run = stdout_json(&output);
    assert_eq!(run["result"]["edges"].as_array().unwrap().len(), 0);
    assert_eq!(run["result"]["disconnected"], true);
}

// ============================================================================
// Pacing
// ============================================================================

#[test]
fn test_step_delay_flag() {
    let dir = setup_tree();

    let start = std::time::Instant::now();
    graphlab_in(dir.path())
        .args(["--step-delay-ms", "20", "traverse", "bfs"])
        .assert()
        .success();
    // five printed steps
    assert!(start.elapsed() >= std::time::Duration::from_millis(100));
}
