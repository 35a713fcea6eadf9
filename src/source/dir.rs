//! Local directory mirror

use std::path::PathBuf;

use super::ContentSource;
use crate::error::{Result, artifact::fetch_failed};

/// Reads files from `{root}/{artifact}/{file}`
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for DirSource {
    fn fetch(&self, artifact: &str, file: &str) -> Result<String> {
        let path = self.root.join(artifact).join(file);
        std::fs::read_to_string(&path)
            .map_err(|e| fetch_failed(artifact, file, format!("{}: {e}", path.display())))
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
