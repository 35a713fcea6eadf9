//! Error types and handling for ownui
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors grouped by error domain:
//! - [`artifact`]: registry lookup and content retrieval errors
//! - [`config`]: project configuration errors
//! - [`fs`]: file system errors

pub mod artifact;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ownui operations
#[derive(Error, Diagnostic, Debug)]
pub enum OwnuiError {
    // Selection errors
    #[error("No artifacts selected")]
    #[diagnostic(
        code(ownui::selection::empty),
        help(
            "Name one or more components, or pass --all / --all-blocks. Run 'ownui list' to see what is available"
        )
    )]
    EmptySelection,

    #[error("No block names given after 'block'")]
    #[diagnostic(
        code(ownui::selection::missing_block_names),
        help("Usage: ownui add block <name>... (run 'ownui list --blocks' to see available blocks)")
    )]
    MissingBlockNames,

    // Artifact errors
    #[error("Artifact \"{name}\" not found.")]
    #[diagnostic(
        code(ownui::artifact::not_found),
        help("Names are case-sensitive. Run 'ownui list' to see available artifacts")
    )]
    ArtifactNotFound { name: String },

    #[error("Could not download {file} for {artifact}: {reason}")]
    #[diagnostic(code(ownui::artifact::fetch_failed))]
    FetchFailed {
        artifact: String,
        file: String,
        reason: String,
    },

    #[error("Invalid registry: {message}")]
    #[diagnostic(code(ownui::registry::invalid))]
    InvalidRegistry { message: String },

    #[error("Every selected artifact failed to install")]
    #[diagnostic(code(ownui::install::failed))]
    InstallFailed,

    // Manifest errors
    #[error("Failed to update export manifest {path}: {reason}")]
    #[diagnostic(code(ownui::manifest::sync_failed))]
    ManifestSyncFailed { path: String, reason: String },

    // Prompt errors
    #[error("Failed to read confirmation: {reason}")]
    #[diagnostic(code(ownui::prompt::failed))]
    PromptFailed { reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(ownui::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(
        code(ownui::config::parse_failed),
        help("Supported keys: source, components_dir, manifest")
    )]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ownui::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ownui::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for OwnuiError {
    fn from(err: std::io::Error) -> Self {
        OwnuiError::IoError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<inquire::InquireError> for OwnuiError {
    fn from(err: inquire::InquireError) -> Self {
        OwnuiError::PromptFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, OwnuiError>;
