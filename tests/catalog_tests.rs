//! Integration tests for custom catalog files

mod support;

use predicates::prelude::*;
use support::{grafos, write_catalog};
use tempfile::tempdir;

const MOUNTAIN_ROUTES: &str = r#"
[routes]
edges = [["Lima", "Cusco", 10.0], ["Lima", "Arequipa", 4.0], ["Arequipa", "Cusco", 3.5]]
"#;

#[test]
fn test_catalog_flag_replaces_routes() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(&dir, "mountains.toml", MOUNTAIN_ROUTES);

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["route", "Lima", "Cusco"])
        .assert()
        .success()
        .stdout("Shortest route: Lima → Arequipa → Cusco (distance: 7.5)\n");
}

#[test]
fn test_catalog_env_var() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(&dir, "mountains.toml", MOUNTAIN_ROUTES);

    grafos(dir.path())
        .env("GRAFOS_CATALOG", &catalog)
        .args(["--quiet", "nodes", "routes"])
        .assert()
        .success()
        .stdout("Lima\nCusco\nArequipa\n");
}

#[test]
fn test_missing_sections_keep_builtins() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(&dir, "mountains.toml", MOUNTAIN_ROUTES);

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--quiet", "recommend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Products connected to Luis:"));
}

#[test]
fn test_catalog_discovered_in_config_dir() {
    let dir = tempdir().unwrap();
    write_catalog(
        &dir,
        "catalog.toml",
        r#"
[social]
edges = [["Ana", "Pablo"], ["Pablo", "Sofia"]]
people = ["Lucia"]
"#,
    );

    grafos(dir.path())
        .args(["--quiet", "social", "Ana"])
        .assert()
        .success()
        .stdout("Ana: 0 steps\nPablo: 1 step\nSofia: 2 steps\n");
}

#[test]
fn test_custom_default_user() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "shop.toml",
        r#"
[recommender]
users = ["Eva", "Tomas"]
products = ["Mesa", "Silla"]
edges = [["Tomas", "Mesa"], ["Tomas", "Silla"]]
default_user = "Tomas"
"#,
    );

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--quiet", "recommend"])
        .assert()
        .success()
        .stdout("Products connected to Tomas:\n  Mesa\n  Silla\n");
}

#[test]
fn test_user_without_interactions() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "shop.toml",
        r#"
[recommender]
users = ["Eva", "Tomas"]
products = ["Mesa"]
edges = [["Tomas", "Mesa"]]
"#,
    );

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--quiet", "recommend", "Eva"])
        .assert()
        .success()
        .stdout("No interactions found for Eva\n");
}

#[test]
fn test_equal_cost_routes_prefer_first_declared_city() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "tie.toml",
        r#"
[routes]
edges = [["S", "X", 1.0], ["S", "Y", 1.0], ["X", "T", 1.0], ["Y", "T", 1.0]]
"#,
    );

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["route", "S", "T"])
        .assert()
        .success()
        .stdout("Shortest route: S → X → T (distance: 2)\n");
}

#[test]
fn test_overflowing_route_weight_is_invalid_graph() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "huge.toml",
        r#"
[routes]
edges = [["A", "B", 1.7976931348623157e308], ["B", "C", 1.7976931348623157e308]]
"#,
    );

    let output = grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "route", "A", "C"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_graph");
}

#[test]
fn test_negative_weight_is_invalid_graph() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "bad.toml",
        r#"
[routes]
edges = [["A", "B", -2.0]]
"#,
    );

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["route", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("routes"));
}

#[test]
fn test_same_partition_edge_is_invalid_graph() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "bad.toml",
        r#"
[recommender]
users = ["Eva", "Tomas"]
products = ["Mesa"]
edges = [["Eva", "Tomas"]]
"#,
    );

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("recommend")
        .assert()
        .code(3);
}

#[test]
fn test_malformed_catalog_exit_code_1() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(&dir, "broken.toml", "[routes\nedges = ");

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("apps")
        .assert()
        .success();

    grafos(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["route", "A", "E"])
        .assert()
        .code(1);
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempdir().unwrap();
    grafos(dir.path())
        .args(["--catalog", "does-not-exist.toml", "social", "Ana"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.toml"));
}
