//! Add command implementation
//!
//! 1. Load project settings (config file, `--source` / `OWNUI_SOURCE`)
//! 2. Resolve the selection into install requests
//! 3. Install each artifact, prompting on conflicts unless told otherwise
//! 4. Print a summary; fail only if nothing was selected or everything failed

use std::path::PathBuf;

use tracing::debug;

use crate::cli::AddArgs;
use crate::commands::helpers::resolve_workspace_path;
use crate::config::Settings;
use crate::confirm::{Confirmer, FixedConfirmer, PromptConfirmer};
use crate::error::{OwnuiError, Result};
use crate::installer::Installer;
use crate::manifest::ExportManifest;
use crate::progress::ProgressDisplay;
use crate::registry::Registry;
use crate::selection::{self, SelectionMode};
use crate::source;
use crate::ui::display;

/// Run add command
pub fn run(workspace: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;
    let settings = Settings::load(&workspace, args.source)?;

    let mode = SelectionMode::from_input(&args.names, args.all, args.all_blocks)?;
    let registry = Registry::builtin(mode.kind())?;
    let requests = selection::resolve(&mode, &registry, args.force)?;
    debug!(?mode, count = requests.len(), "selection resolved");

    let source = source::from_location(&settings.source);
    let mut prompt = PromptConfirmer;
    let mut keep = FixedConfirmer::new(false);
    let confirmer: &mut dyn Confirmer = if args.skip_existing {
        &mut keep
    } else {
        &mut prompt
    };

    println!(
        "Installing {} {}(s) from {}",
        requests.len(),
        mode.kind(),
        source.location()
    );

    let report = Installer::new(
        &settings.components_dir,
        ExportManifest::new(&settings.manifest_path),
        &*source,
        confirmer,
    )
    .with_registry(registry)
    .with_progress(ProgressDisplay::new(requests.len() as u64))
    .install_all(&requests);

    display::display_report(&report, &settings);

    if report.all_failed() {
        return Err(OwnuiError::InstallFailed);
    }
    Ok(())
}
