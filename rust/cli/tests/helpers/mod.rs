//! Shared helpers for the CLI integration tests.
//!
//! `CliRunner` drives [`equisim_cli::run`] in-process and captures its
//! exit code, stdout, and stderr.
#![allow(dead_code)]

use std::path::PathBuf;

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        Self
    }

    /// Runs `equisim <args...>`.
    pub fn run(&self, args: &[&str]) -> CliResult {
        let argv = std::iter::once("equisim").chain(args.iter().copied());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let exit_code = equisim_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
        }
    }
}

/// Extracts the percentage on a `Win:`/`Loss:`/`Tie:` report line.
pub fn pct_on_line(stdout: &str, label: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with(label))
        .unwrap_or_else(|| panic!("no {label} line in {stdout:?}"));
    line[label.len()..]
        .trim()
        .trim_end_matches('%')
        .parse()
        .unwrap_or_else(|e| panic!("bad percentage in {line:?}: {e}"))
}

/// Writes `contents` to a fresh TOML file that lives as long as the
/// returned directory.
pub fn config_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("equisim.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
