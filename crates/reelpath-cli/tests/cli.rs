//! End-to-end tests for the reelpath binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../reelpath-imdb/tests/data")
        .join(name)
}

/// Command isolated from the user's config and environment
fn reelpath(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reelpath").unwrap();
    cmd.env("REELPATH_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("REELPATH_ACTORS")
        .env_remove("REELPATH_MOVIES")
        .env_remove("RUST_LOG");
    cmd
}

fn with_data(cmd: &mut Command) -> &mut Command {
    cmd.arg("--actors")
        .arg(data_file("testActors.tsv"))
        .arg("--movies")
        .arg(data_file("testMovies.tsv"))
}

#[test]
fn test_path_between_actors() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = reelpath(&dir);

    with_data(&mut cmd)
        .args(["path", "Kris", "Sandy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path from 'Kris' to 'Sandy' (4 hops):"))
        .stdout(predicate::str::contains("3. Sara [actor]"))
        .stdout(predicate::str::contains("5. Sandy [actor]"));
}

#[test]
fn test_path_from_movie_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = reelpath(&dir);

    let output = with_data(&mut cmd)
        .args(["--format", "json", "path", "--from-movie", "Blah1", "Sandy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 5);

    let names: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Blah1", "Kris", "Blah2", "Sara", "Blah3", "Sandy"]);
    assert_eq!(json["nodes"][0]["kind"], "movie");
}

#[test]
fn test_no_path_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = reelpath(&dir);

    with_data(&mut cmd)
        .args(["path", "Uyen2", "Kris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from 'Uyen2' to 'Kris'"));
}

#[test]
fn test_unknown_actor_is_no_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = reelpath(&dir);

    with_data(&mut cmd)
        .args(["path", "Uyen3", "aa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found"));
}

#[test]
fn test_info_counts() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = reelpath(&dir);

    with_data(&mut cmd)
        .args(["info", "Kris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph: 5 actors, 4 movies, 6 links"))
        .stdout(predicate::str::contains("eccentricity 4"));
}

#[test]
fn test_missing_data_files() {
    let dir = tempfile::tempdir().unwrap();

    reelpath(&dir)
        .args(["path", "Kris", "Sandy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No actors file given"));
}

#[test]
fn test_config_supplies_data_files() {
    let dir = tempfile::tempdir().unwrap();

    reelpath(&dir)
        .args(["config", "set", "actors_file"])
        .arg(data_file("testActors.tsv"))
        .assert()
        .success();
    reelpath(&dir)
        .args(["config", "set", "movies_file"])
        .arg(data_file("testMovies.tsv"))
        .assert()
        .success();

    reelpath(&dir)
        .args(["config", "get", "format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));

    reelpath(&dir)
        .args(["path", "Sara", "Sandy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 hops)"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();

    reelpath(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();

    reelpath(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reelpath"));
}
