use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for grafos, isolated from the user's catalog and log settings
pub fn grafos(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("grafos");
    cmd.env("GRAFOS_CONFIG_DIR", config_dir)
        .env_remove("GRAFOS_CATALOG")
        .env_remove("GRAFOS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a catalog file into a temp directory and return its path
#[allow(dead_code)]
pub fn write_catalog(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
