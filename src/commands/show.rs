//! Show command implementation

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::commands::helpers::resolve_workspace_path;
use crate::config::Settings;
use crate::error::{Result, artifact};
use crate::registry::{ArtifactDescriptor, ArtifactKind, Registry};
use crate::ui::display;

/// Run show command
pub fn run(workspace: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;
    let settings = Settings::load(&workspace, None)?;

    let kind = if args.block {
        ArtifactKind::Block
    } else {
        ArtifactKind::Component
    };
    let descriptor = Registry::builtin(kind)?
        .lookup(&args.name)
        .ok_or_else(|| artifact::not_found(&args.name))?;

    display::display_descriptor(kind, descriptor, is_installed(&settings, descriptor));
    Ok(())
}

/// An artifact counts as installed when its primary file exists
fn is_installed(settings: &Settings, descriptor: &ArtifactDescriptor) -> bool {
    descriptor.primary_file().is_some_and(|primary| {
        settings
            .components_dir
            .join(descriptor.name)
            .join(primary)
            .exists()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OwnuiError;
    use tempfile::TempDir;

    #[test]
    fn test_is_installed_checks_primary_file() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(temp.path(), None).unwrap();
        let button = Registry::components().lookup("button").unwrap();

        assert!(!is_installed(&settings, button));

        let dir = settings.components_dir.join("button");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("button.ts"), "").unwrap();
        assert!(is_installed(&settings, button));
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = run(
            Some(temp.path().to_path_buf()),
            ShowArgs {
                name: "Button".to_string(),
                block: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, OwnuiError::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_block_flag_uses_block_registry() {
        let temp = TempDir::new().unwrap();
        let result = run(
            Some(temp.path().to_path_buf()),
            ShowArgs {
                name: "accordion".to_string(),
                block: true,
            },
        );
        assert!(result.is_ok());
    }
}
