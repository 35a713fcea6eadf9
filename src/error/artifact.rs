//! Registry lookup and content retrieval errors

use super::OwnuiError;

/// Creates an artifact not found error
pub fn not_found(name: impl Into<String>) -> OwnuiError {
    OwnuiError::ArtifactNotFound { name: name.into() }
}

/// Creates a fetch failure for one file of an artifact
pub fn fetch_failed(
    artifact: impl Into<String>,
    file: impl Into<String>,
    reason: impl Into<String>,
) -> OwnuiError {
    OwnuiError::FetchFailed {
        artifact: artifact.into(),
        file: file.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid registry error
pub fn invalid_registry(message: impl Into<String>) -> OwnuiError {
    OwnuiError::InvalidRegistry {
        message: message.into(),
    }
}
