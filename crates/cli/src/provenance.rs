//! `<stem>.provenance.json` sidecars: which command, settings and inputs
//! produced an artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct Provenance {
    code_rev: String,
    version: &'static str,
    command: &'static str,
    params: Value,
    inputs: Vec<String>,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            code_rev: code_rev(),
            version: immersion::VERSION,
            command,
            params,
            inputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.display().to_string());
        self
    }

    /// Write next to `artifact`; returns the sidecar path.
    pub fn write_next_to(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        let mut doc = serde_json::to_value(self)?;
        doc["output"] = Value::String(artifact.display().to_string());
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "provenance");
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Build-time `GIT_COMMIT`, then the runtime variable, else `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/circle_out.json")),
            Path::new("/tmp/output/circle_out.provenance.json")
        );
    }

    #[test]
    fn records_command_params_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("a.json");
        let path = Provenance::new("area", json!({"slice_height": 0.5, "seed": 7}))
            .input(Path::new("shape.csv"))
            .write_next_to(&artifact)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "area");
        assert_eq!(parsed["output"], artifact.display().to_string());
        assert_eq!(parsed["inputs"][0], "shape.csv");
        assert_eq!(parsed["params"]["seed"], 7);
        assert_eq!(parsed["version"], immersion::VERSION);
    }
}
