use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of `<report>.provenance.json`.
#[derive(Serialize, Debug)]
pub struct Sidecar<'a> {
    pub code_rev: String,
    pub version: &'a str,
    pub command: &'a str,
    pub input: &'a str,
    pub params: Value,
    pub outputs: Vec<String>,
}

/// Write the provenance sidecar next to `report` and return its path.
pub fn write_sidecar(report: &Path, command: &str, input: &str, params: Value) -> Result<PathBuf> {
    let path = provenance_path(report);
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: topembed::VERSION,
        command,
        input,
        params,
        outputs: vec![report.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(report: &Path) -> PathBuf {
    let mut name = report
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    report.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
