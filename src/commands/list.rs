//! List command implementation
//!
//! The built-in registries are the only source for names and totals.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::registry::{ArtifactKind, Registry};
use crate::ui::display;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    for kind in kinds(&args) {
        let registry = Registry::builtin(kind)?;
        if registry.is_empty() {
            continue;
        }
        display::display_registry(kind, registry.iter());
        println!();
    }
    Ok(())
}

fn kinds(args: &ListArgs) -> Vec<ArtifactKind> {
    match (args.components, args.blocks) {
        (true, false) => vec![ArtifactKind::Component],
        (false, true) => vec![ArtifactKind::Block],
        _ => vec![ArtifactKind::Component, ArtifactKind::Block],
    }
}
