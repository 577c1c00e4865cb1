use crate::support::{graphlab_in, setup_abc};
use graphlab_core::config::{GraphlabConfig, CONFIG_FILE};
use graphlab_core::graph::Direction;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_beside_graph_sets_defaults() {
    let dir = setup_abc();
    let text = "[traversal]\ndirection = \"in\"\n\n[shortest_path]\nconsider_directions = false\n";
    let parsed: GraphlabConfig = toml::from_str(text).unwrap();
    assert_eq!(parsed.traversal.direction, Direction::In);
    assert_eq!(parsed.playback.step_delay_ms, 0);
    fs::write(dir.path().join(CONFIG_FILE), text).unwrap();

    graphlab_in(dir.path())
        .args(["--quiet", "traverse", "bfs", "--start", "C"])
        .assert()
        .success()
        .stdout("BFS from C: C -> B -> A\n");

    graphlab_in(dir.path())
        .args(["--quiet", "path", "C", "A"])
        .assert()
        .success()
        .stdout("Shortest path C -> B -> A, distance 3\n");
}

#[test]
fn test_flag_overrides_config_direction() {
    let dir = setup_abc();
    let mut config = GraphlabConfig::default();
    config.traversal.direction = Direction::In;
    config.save(&dir.path().join(CONFIG_FILE)).unwrap();

    graphlab_in(dir.path())
        .args(["--quiet", "traverse", "bfs", "--start", "C", "--direction", "out"])
        .assert()
        .success()
        .stdout("BFS from C: C\n");
}

#[test]
fn test_respect_directions_overrides_config() {
    let dir = setup_abc();
    let mut config = GraphlabConfig::default();
    config.shortest_path.consider_directions = false;
    config.save(&dir.path().join(CONFIG_FILE)).unwrap();

    graphlab_in(dir.path())
        .args(["--quiet", "path", "C", "A", "--respect-directions"])
        .assert()
        .success()
        .stdout("No path from C to A\n");

    graphlab_in(dir.path())
        .args(["path", "C", "A", "--respect-directions", "--ignore-directions"])
        .assert()
        .code(2);
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("elsewhere.toml");
    let mut config = GraphlabConfig::default();
    config.output.default_name = "From config".to_string();
    config.save(&config_path).unwrap();

    graphlab_in(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized graph 'From config'"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();

    graphlab_in(dir.path())
        .args(["--config", "missing.toml", "init"])
        .assert()
        .code(1);
}

#[test]
fn test_malformed_config() {
    let dir = setup_abc();
    fs::write(dir.path().join(CONFIG_FILE), "[playback\nstep_delay_ms = ").unwrap();

    graphlab_in(dir.path())
        .args(["traverse", "bfs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
