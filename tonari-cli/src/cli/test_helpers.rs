//! Small helpers shared across CLI tests.
//!
//! Instance files are written into a temporary directory that lives as long
//! as the returned [`TempDir`].

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_instance(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Runs the CLI over `paths`, returning the outcome and everything written
/// to the output stream.
pub(super) fn run_paths(paths: Vec<PathBuf>) -> (Result<usize, CliError>, String) {
    let mut output = Vec::new();
    let outcome = run_cli(Cli { paths }, &mut output);
    let text = match String::from_utf8(output) {
        Ok(text) => text,
        Err(err) => panic!("CLI output must be UTF-8: {err}"),
    };
    (outcome, text)
}
