//! File system errors

use std::path::Path;

use super::OwnuiError;

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: &std::io::Error) -> OwnuiError {
    OwnuiError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
