use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to an output file.
pub struct Payload {
    pub params: Value,
    pub counts: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            counts: Value::Null,
        }
    }

    pub fn with_counts(mut self, counts: Value) -> Self {
        self.counts = counts;
        self
    }
}

/// Common header shared by sidecars and `cli report`.
pub fn header() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
    })
}

/// Write `<artifact-stem>.provenance.json` with code rev, callsite, params, counts and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = header();
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    doc["params"] = payload.params;
    doc["counts"] = payload.counts;
    doc["outputs"] = json!([artifact.to_string_lossy()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/areas.json` -> `dir/areas.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or(Cow::Borrowed("artifact"));
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit the binary was built from.
///
/// Lookup order: `GIT_COMMIT` baked in at compile time, `GIT_COMMIT` in the
/// runtime environment, `git rev-parse HEAD`, then `"unknown"`.
pub fn current_git_rev() -> String {
    let non_empty = |rev: String| (!rev.is_empty()).then_some(rev);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| git_head().and_then(non_empty))
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
