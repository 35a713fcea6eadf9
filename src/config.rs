//! Project configuration
//!
//! An optional `ownui.yaml` at the workspace root overrides where artifacts
//! come from and where they are installed:
//!
//! ```yaml
//! source: https://raw.githubusercontent.com/ownui/ownui/main/registry
//! components_dir: src/components/ui
//! ```
//!
//! The export manifest always sits at `<components_dir>/index.ts`, next to the
//! artifact directories its `./<name>` lines point at.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, config as config_error};

pub const CONFIG_FILE: &str = "ownui.yaml";
pub const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/ownui/ownui/main/registry";
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components/ui";
pub const MANIFEST_FILE: &str = "index.ts";

/// Contents of `ownui.yaml`; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub source: Option<String>,
    pub components_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load `ownui.yaml` from `workspace`; a missing file means defaults
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(CONFIG_FILE);
        let shown = path.display().to_string();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %shown, "no project config, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(config_error::read_failed(shown, e.to_string())),
        };
        Self::from_yaml(&content, &shown)
    }

    pub fn from_yaml(content: &str, path: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| config_error::parse_failed(path, e.to_string()))
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub components_dir: PathBuf,
    pub manifest_path: PathBuf,
}

impl Settings {
    /// Combine the config file with a command line override.
    /// `source_override` wins over the file, which wins over the defaults.
    pub fn resolve(workspace: &Path, config: ProjectConfig, source_override: Option<String>) -> Self {
        let source = source_override
            .or(config.source)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let components_dir = workspace.join(
            config
                .components_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPONENTS_DIR)),
        );
        let manifest_path = components_dir.join(MANIFEST_FILE);

        Self {
            source,
            components_dir,
            manifest_path,
        }
    }

    /// Load the workspace config and resolve it in one step
    pub fn load(workspace: &Path, source_override: Option<String>) -> Result<Self> {
        let config = ProjectConfig::load(workspace)?;
        Ok(Self::resolve(workspace, config, source_override))
    }
}
