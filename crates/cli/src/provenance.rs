use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to an exported artifact.
pub struct Payload {
    /// Algebra label, e.g. `Z/2 wr Z`.
    pub algebra: String,
    pub params: Value,
}

impl Payload {
    pub fn new(algebra: impl Into<String>, params: Value) -> Self {
        Self {
            algebra: algebra.into(),
            params,
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact`: git commit, crate
/// version, callsite, algebra, params and outputs.
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
    let doc = json!({
        "code_rev": current_git_rev(),
        "cayley_version": cayley::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "algebra": payload.algebra,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let base = Path::new("/tmp/balls/l2.dot");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/balls/l2.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_algebra_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("growth.csv");
        fs::write(&artifact, "r,sphere\n").unwrap();
        let payload = Payload::new("Z/2 wr Z", json!({"radius": 4}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["algebra"], "Z/2 wr Z");
        assert_eq!(parsed["params"]["radius"], 4);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
