//! Catalog file discovery.
//!
//! Search order: an explicit path from the caller, then `STORE_CATALOG_PATH`,
//! then `store_catalog.json` in the working directory.

use anyhow::{Result, bail};
use std::env;
use std::path::{Path, PathBuf};

pub const CATALOG_PATH_ENV: &str = "STORE_CATALOG_PATH";
pub const DEFAULT_CATALOG_FILE: &str = "store_catalog.json";

/// Locate the catalog file to load.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let env_hint = env::var(CATALOG_PATH_ENV).ok();
    let cwd = env::current_dir().ok();
    resolve_from(explicit, env_hint.as_deref(), cwd.as_deref())
}

fn resolve_from(
    explicit: Option<&Path>,
    env_hint: Option<&str>,
    cwd: Option<&Path>,
) -> Result<PathBuf> {
    // An explicit path is never silently replaced by a fallback.
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        bail!("catalog file not found: {}", path.display());
    }

    let mut tried = Vec::new();
    if let Some(hint) = env_hint.map(str::trim).filter(|hint| !hint.is_empty()) {
        let candidate = PathBuf::from(hint);
        if candidate.is_file() {
            return Ok(candidate);
        }
        tried.push(candidate);
    }

    if let Some(dir) = cwd {
        let candidate = dir.join(DEFAULT_CATALOG_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        tried.push(candidate);
    }

    let tried = tried
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    bail!("Unable to locate a store catalog (tried: {tried}). Pass --file or set {CATALOG_PATH_ENV}.");
}
