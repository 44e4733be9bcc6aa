use crate::error::{GenError, Result};
use crate::model::GeneratedArtifact;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

/// Delete `dir` and everything under it, then recreate it empty.
///
/// Refuses an empty path, a path that is only `.`/`..` components, and the
/// filesystem root.
pub fn reset_dir(dir: &Path) -> Result<()> {
    let has_normal = dir
        .components()
        .any(|c| matches!(c, Component::Normal(_)));
    if !has_normal {
        return Err(GenError::UnsafeOutputDir(dir.to_path_buf()));
    }
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Write every artifact under `dir`. Returns the full paths written, in order.
pub fn write_artifacts(dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
    artifacts
        .iter()
        .map(|a| {
            let path = dir.join(&a.path);
            atomic_write(&path, a.content.as_bytes())?;
            tracing::debug!(path = %path.display(), bytes = a.content.len(), "wrote artifact");
            Ok(path)
        })
        .collect()
}
