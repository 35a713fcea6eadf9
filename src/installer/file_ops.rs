//! Basic file operations for artifact installation

use std::path::Path;

use crate::error::{Result, fs::write_failed};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
    }
    Ok(())
}

/// Write `contents` to `target`, replacing whatever is there
pub fn write_file(target: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::write(target, contents).map_err(|e| write_failed(target, &e))
}
