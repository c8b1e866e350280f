//! File-level operations on a manifest.
//!
//! Each call reads the file fresh and keeps nothing in memory afterwards.
//! There is no locking: concurrent bumps of the same path must be
//! serialized by the caller.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::BumpError;
use crate::manifest::{Bump, ManifestText};

/// Increment the `version_code` of the manifest at `path` and write it back.
pub fn bump(path: impl AsRef<Path>) -> Result<Bump, BumpError> {
    let path = path.as_ref();
    let (bump, updated) = bumped_manifest(path)?;

    write_atomic(path, updated.as_str()).map_err(|e| BumpError::io(path, e))?;

    tracing::info!(
        path = %path.display(),
        old = bump.old,
        new = bump.new,
        "Bumped version_code"
    );
    Ok(bump)
}

/// Compute the bump for `path` without touching the file.
pub fn preview(path: impl AsRef<Path>) -> Result<Bump, BumpError> {
    let path = path.as_ref();
    let (bump, _) = bumped_manifest(path)?;
    tracing::debug!(path = %path.display(), old = bump.old, new = bump.new, "Previewed bump");
    Ok(bump)
}

/// Read the current `version_code` of the manifest at `path`.
pub fn read_version(path: impl AsRef<Path>) -> Result<u64, BumpError> {
    let path = path.as_ref();
    let manifest = read_manifest(path)?;
    manifest
        .version_code()
        .map_err(|e| BumpError::format(path, e))
}

/// Write `content` to `path`, creating or truncating it.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<(), BumpError> {
    let path = path.as_ref();
    write_atomic(path, content).map_err(|e| BumpError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

fn read_manifest(path: &Path) -> Result<ManifestText, BumpError> {
    let raw = fs::read_to_string(path).map_err(|e| BumpError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Read manifest");
    Ok(ManifestText::from(raw))
}

fn bumped_manifest(path: &Path) -> Result<(Bump, ManifestText), BumpError> {
    let manifest = read_manifest(path)?;

    let matches = manifest.version_code_count();
    if matches > 1 {
        tracing::warn!(
            path = %path.display(),
            matches,
            "Multiple version_code fields found; only the first is updated"
        );
    }

    manifest.bumped().map_err(|e| BumpError::format(path, e))
}

/// File that a write to `path` lands in, following symlinks.
///
/// A path that does not exist yet is written as given.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

/// Atomic write: write to a temp file in the target's directory, then
/// rename over the target. The temp file is removed on any failure.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Keep the target's mode across the rename
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(&target).map_err(|e| e.error)?;

    Ok(())
}
