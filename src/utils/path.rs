//! Path utilities

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// File names checked in each directory, in priority order
pub const JUSTFILE_NAMES: &[&str] = &["justfile", "Justfile", ".justfile"];

/// Walk from `start` up to the filesystem root and return the first justfile found.
pub fn find_justfile(start: &Path) -> crate::error::Result<PathBuf> {
    for dir in start.ancestors() {
        for name in JUSTFILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                log::debug!("found justfile at {}", candidate.display());
                return Ok(candidate);
            }
        }
    }

    Err(Error::JustfileNotFound {
        start: start.to_path_buf(),
    })
}

/// Check if a file exists and is readable
pub fn check_file_readable(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    Ok(())
}

/// Directory the build tool should run in: the justfile's own directory.
pub fn working_dir(justfile: &Path) -> PathBuf {
    match justfile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
