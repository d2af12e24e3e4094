use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn kaiji_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("KAIJI_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".kaiji"))
}

pub fn ensure_kaiji_home() -> Result<PathBuf> {
    let dir = kaiji_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
