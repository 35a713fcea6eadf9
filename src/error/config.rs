//! Configuration errors

use super::OwnuiError;

/// Creates a configuration read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> OwnuiError {
    OwnuiError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> OwnuiError {
    OwnuiError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
