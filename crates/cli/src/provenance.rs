use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata attached to a generated artifact.
pub struct Payload {
    pub params: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tags: Vec::new(),
        }
    }
}

/// Write `<artifact>.meta.json` containing the git commit, callsite, params,
/// and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let meta_path = meta_path(artifact);
    if let Some(parent) = meta_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating sidecar dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tags": payload.tags,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&meta_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", meta_path.display()))?;
    Ok(meta_path)
}

fn meta_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".meta.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    let baked = option_env!("GIT_COMMIT").unwrap_or("");
    if !baked.is_empty() {
        return baked.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn meta_path_rewrites_the_extension() {
        let base = Path::new("/tmp/output/fan.json");
        assert_eq!(meta_path(base), Path::new("/tmp/output/fan.meta.json"));
    }

    #[test]
    fn write_sidecar_creates_the_file() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("fan.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"seed": 42}));
        let path = write_sidecar(&artifact, payload).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["seed"], 42);
    }
}
