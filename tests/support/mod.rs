use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn category_check() -> Command {
    Command::new(env!("CARGO_BIN_EXE_category-check"))
}

/// Write `value` as `name` inside `dir` and return its path.
pub fn write_catalog(dir: &TempDir, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing fixture {}", path.display()))?;
    Ok(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout was not JSON")
}

pub fn isolated_cwd(dir: &Path, cmd: &mut Command) {
    cmd.current_dir(dir).env_remove("STORE_CATALOG_PATH");
}
