//! Display functions for install reports and registry entries

use console::Style;

use crate::config::Settings;
use crate::installer::{InstallReport, InstallStatus};
use crate::registry::{ArtifactDescriptor, ArtifactKind};

/// Print the session summary: one line per artifact in request order,
/// then warnings, then the packages the installed artifacts need
pub fn display_report(report: &InstallReport, settings: &Settings) {
    println!();
    for outcome in report.outcomes() {
        match outcome.status {
            InstallStatus::Installed => println!(
                "  {} {} ({}, {} file(s))",
                Style::new().green().bold().apply_to("installed"),
                outcome.artifact_name,
                outcome.kind,
                outcome.files_written.len()
            ),
            InstallStatus::Skipped => println!(
                "  {} {} (kept your copy)",
                Style::new().yellow().bold().apply_to("skipped  "),
                outcome.artifact_name
            ),
            InstallStatus::Failed => println!(
                "  {} {}: {}",
                Style::new().red().bold().apply_to("failed   "),
                outcome.artifact_name,
                outcome.error_detail.as_deref().unwrap_or("unknown error")
            ),
        }
        for warning in &outcome.warnings {
            println!(
                "      {} {warning}",
                Style::new().yellow().apply_to("warning:")
            );
        }
    }

    let installed = report.installed().count();
    let skipped = report.skipped().count();
    let failed = report.failed().count();
    println!();
    println!(
        "{} installed, {} skipped, {} failed",
        Style::new().bold().apply_to(installed),
        skipped,
        failed
    );

    if installed > 0 {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Installed into:"),
            settings.components_dir.display()
        );
    }

    let dependencies = report.dependencies();
    if !dependencies.is_empty() {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Make sure these packages are installed:"),
            dependencies.join(" ")
        );
    }
}

/// Print registry entries of one kind with a total
pub fn display_registry<'a>(
    kind: ArtifactKind,
    entries: impl Iterator<Item = &'a ArtifactDescriptor>,
) {
    let entries: Vec<_> = entries.collect();
    let heading = match kind {
        ArtifactKind::Component => "Components",
        ArtifactKind::Block => "Blocks",
    };
    println!(
        "{} ({})",
        Style::new().bold().green().apply_to(heading),
        entries.len()
    );

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        println!(
            "  {}  {}",
            Style::new()
                .bold()
                .yellow()
                .apply_to(format!("{:width$}", entry.name)),
            entry.description
        );
    }
}

/// Print every detail of one descriptor
pub fn display_descriptor(kind: ArtifactKind, descriptor: &ArtifactDescriptor, installed: bool) {
    let label = Style::new().bold();
    println!(
        "{} ({kind})",
        Style::new().bold().yellow().apply_to(descriptor.display_name)
    );
    println!("  {} {}", label.apply_to("Name:"), descriptor.name);
    println!("  {} {}", label.apply_to("Description:"), descriptor.description);

    if descriptor.dependencies.is_empty() {
        println!("  {} none", label.apply_to("Dependencies:"));
    } else {
        println!(
            "  {} {}",
            label.apply_to("Dependencies:"),
            descriptor.dependencies.join(", ")
        );
    }

    println!("  {}", label.apply_to("Files:"));
    for file in descriptor.files {
        println!("    - {file}");
    }

    let status = if installed {
        Style::new().green().apply_to("installed")
    } else {
        Style::new().dim().apply_to("not installed")
    };
    println!("  {} {status}", label.apply_to("Status:"));
}
