//! Barrel file that re-exports every installed artifact
//!
//! The manifest is read, updated and written back once per installed
//! artifact, so an interrupted session leaves it consistent with the
//! artifacts that finished.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{OwnuiError, Result};

#[derive(Debug, Clone)]
pub struct ExportManifest {
    path: PathBuf,
}

impl ExportManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The line that re-exports `artifact`
    pub fn export_line(artifact: &str) -> String {
        format!("export * from './{artifact}';")
    }

    /// Whether `text` already has the export line for `artifact`
    pub fn contains(text: &str, artifact: &str) -> bool {
        let line = Self::export_line(artifact);
        text.lines().any(|existing| existing.trim() == line)
    }

    /// Append the export line for `artifact` unless it is already there.
    /// Returns whether the file changed.
    pub fn sync(&self, artifact: &str) -> Result<bool> {
        let current = self.read()?;
        if Self::contains(&current, artifact) {
            debug!(artifact, manifest = %self.path.display(), "export already present");
            return Ok(false);
        }

        let updated = append_line(&current, &Self::export_line(artifact));
        self.write(&updated)?;
        debug!(artifact, manifest = %self.path.display(), "export added");
        Ok(true)
    }

    fn read(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.sync_error(&e)),
        }
    }

    /// Write through a sibling temp file so the manifest is never half-written
    fn write(&self, contents: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.sync_error(&e))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.sync_error(&e))?;
        temp.write_all(contents.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| self.sync_error(&e))?;
        temp.persist(&self.path)
            .map_err(|e| self.sync_error(&e.error))?;
        Ok(())
    }

    fn sync_error(&self, err: &std::io::Error) -> OwnuiError {
        OwnuiError::ManifestSyncFailed {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// `text` with exactly one trailing newline, then `line` and a newline
fn append_line(text: &str, line: &str) -> String {
    let body = text.trim_end_matches(['\n', '\r']);
    if body.is_empty() {
        format!("{line}\n")
    } else {
        format!("{body}\n{line}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manifest_in(temp: &TempDir) -> ExportManifest {
        ExportManifest::new(temp.path().join("src/components/ui/index.ts"))
    }

    #[test]
    fn test_export_line_format() {
        assert_eq!(ExportManifest::export_line("button"), "export * from './button';");
    }

    #[test]
    fn test_creates_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_in(&temp);

        assert!(manifest.sync("button").unwrap());
        assert_eq!(
            std::fs::read_to_string(&manifest.path).unwrap(),
            "export * from './button';\n"
        );
    }

    #[test]
    fn test_sync_twice_keeps_one_line() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_in(&temp);

        assert!(manifest.sync("button").unwrap());
        assert!(!manifest.sync("button").unwrap());

        let text = std::fs::read_to_string(&manifest.path).unwrap();
        assert_eq!(text.matches("export * from './button';").count(), 1);
    }

    #[test]
    fn test_prefix_names_do_not_collide() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_in(&temp);

        manifest.sync("accordion-item").unwrap();
        assert!(manifest.sync("accordion").unwrap());

        let text = std::fs::read_to_string(&manifest.path).unwrap();
        assert_eq!(
            text,
            "export * from './accordion-item';\nexport * from './accordion';\n"
        );
    }

    #[test]
    fn test_normalises_trailing_newlines() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_in(&temp);
        std::fs::create_dir_all(manifest.path.parent().unwrap()).unwrap();

        std::fs::write(&manifest.path, "export * from './card';").unwrap();
        manifest.sync("tabs").unwrap();
        assert_eq!(
            std::fs::read_to_string(&manifest.path).unwrap(),
            "export * from './card';\nexport * from './tabs';\n"
        );

        std::fs::write(&manifest.path, "export * from './card';\n\n\n").unwrap();
        manifest.sync("tabs").unwrap();
        assert_eq!(
            std::fs::read_to_string(&manifest.path).unwrap(),
            "export * from './card';\nexport * from './tabs';\n"
        );
    }

    #[test]
    fn test_keeps_hand_written_content() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_in(&temp);
        std::fs::create_dir_all(manifest.path.parent().unwrap()).unwrap();
        std::fs::write(&manifest.path, "// generated\nexport { theme } from './theme';\n").unwrap();

        manifest.sync("badge").unwrap();
        assert_eq!(
            std::fs::read_to_string(&manifest.path).unwrap(),
            "// generated\nexport { theme } from './theme';\nexport * from './badge';\n"
        );
    }

    #[test]
    fn test_recognises_indented_existing_line() {
        assert!(ExportManifest::contains(
            "  export * from './button';  \r\n",
            "button"
        ));
        assert!(!ExportManifest::contains(
            "export * from './button-group';\n",
            "button"
        ));
    }

    #[test]
    fn test_unreadable_manifest_is_a_sync_error() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text.
        let path = temp.path().join("index.ts");
        std::fs::create_dir_all(&path).unwrap();

        let err = ExportManifest::new(&path).sync("button").unwrap_err();
        assert!(matches!(err, OwnuiError::ManifestSyncFailed { .. }));
    }
}
