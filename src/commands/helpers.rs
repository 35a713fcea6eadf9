//! Command helper utilities

use std::path::PathBuf;

use crate::error::{OwnuiError, Result};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| OwnuiError::IoError {
            message: format!("Failed to get current directory: {e}"),
            source: Some(Box::new(e)),
        }),
    }
}
