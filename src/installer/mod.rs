//! Artifact installation
//!
//! Artifacts are processed one at a time, in request order:
//! 1. Look up the descriptor in the registry of the requested kind
//! 2. Create `<components_dir>/<name>/`
//! 3. Resolve a conflict on the primary file (see [`conflict`])
//! 4. Fetch, rewrite and write every file of the artifact
//! 5. Add the artifact to the export manifest
//!
//! Nothing here returns early across artifacts: every problem becomes part of
//! that artifact's [`InstallOutcome`] and the session carries on.

pub mod conflict;
pub mod file_ops;
pub mod outcome;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::confirm::Confirmer;
use crate::error::{artifact, fs::write_failed};
use crate::manifest::ExportManifest;
use crate::progress::ProgressDisplay;
use crate::registry::{ArtifactDescriptor, ArtifactKind, Registry};
use crate::rewrite::rewrite;
use crate::selection::InstallRequest;
use crate::source::ContentSource;

pub use outcome::{InstallOutcome, InstallReport, InstallStatus};

/// Installs artifacts from a [`ContentSource`] into a components directory
pub struct Installer<'a> {
    components: Registry,
    blocks: Registry,
    source: &'a dyn ContentSource,
    confirmer: &'a mut dyn Confirmer,
    components_dir: PathBuf,
    manifest: ExportManifest,
    progress: Option<ProgressDisplay>,
}

impl<'a> Installer<'a> {
    pub fn new(
        components_dir: impl Into<PathBuf>,
        manifest: ExportManifest,
        source: &'a dyn ContentSource,
        confirmer: &'a mut dyn Confirmer,
    ) -> Self {
        Self {
            components: Registry::components(),
            blocks: Registry::blocks(),
            source,
            confirmer,
            components_dir: components_dir.into(),
            manifest,
            progress: None,
        }
    }

    /// Use `registry` instead of the built-in catalog of its kind
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        match registry.kind() {
            ArtifactKind::Component => self.components = registry,
            ArtifactKind::Block => self.blocks = registry,
        }
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressDisplay) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Install every request in order and collect the outcomes
    pub fn install_all(&mut self, requests: &[InstallRequest]) -> InstallReport {
        let mut report = InstallReport::default();

        for request in requests {
            if let Some(progress) = &self.progress {
                progress.start_artifact(&request.artifact_name);
            }

            let outcome = self.install_one(request);
            match outcome.status {
                InstallStatus::Installed => info!(
                    artifact = %outcome.artifact_name,
                    files = outcome.files_written.len(),
                    "installed"
                ),
                InstallStatus::Skipped => info!(artifact = %outcome.artifact_name, "skipped"),
                InstallStatus::Failed => warn!(
                    artifact = %outcome.artifact_name,
                    error = outcome.error_detail.as_deref().unwrap_or_default(),
                    "failed"
                ),
            }
            report.push(outcome);

            if let Some(progress) = &self.progress {
                progress.inc_artifact();
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish();
        }
        report
    }

    fn registry(&self, kind: ArtifactKind) -> &Registry {
        match kind {
            ArtifactKind::Component => &self.components,
            ArtifactKind::Block => &self.blocks,
        }
    }

    fn install_one(&mut self, request: &InstallRequest) -> InstallOutcome {
        let name = request.artifact_name.as_str();
        let Some(descriptor) = self.registry(request.kind).lookup(name) else {
            return InstallOutcome::failed(request, artifact::not_found(name).to_string());
        };
        let Some(primary) = descriptor.primary_file() else {
            return InstallOutcome::failed(request, format!("{name} lists no files"));
        };

        let artifact_dir = self.components_dir.join(descriptor.name);
        let created = !artifact_dir.exists();
        if let Err(e) = std::fs::create_dir_all(&artifact_dir) {
            return InstallOutcome::failed(request, write_failed(&artifact_dir, &e).to_string());
        }

        let state = conflict::resolve(&artifact_dir.join(primary), request, |message| {
            self.ask(message)
        });
        debug!(artifact = name, ?state, "conflict resolved");
        if !state.proceeds() {
            return InstallOutcome::skipped(request);
        }

        let outcome = self.write_files(request, descriptor, &artifact_dir);
        if created && outcome.files_written.is_empty() {
            // Only removes the directory if it is still empty
            if let Err(e) = std::fs::remove_dir(&artifact_dir) {
                debug!(artifact = name, error = %e, "left artifact directory in place");
            }
        }
        outcome
    }

    fn ask(&mut self, message: &str) -> bool {
        match &self.progress {
            Some(progress) => progress.suspend(|| self.confirmer.confirm(message)),
            None => self.confirmer.confirm(message),
        }
    }

    fn write_files(
        &self,
        request: &InstallRequest,
        descriptor: &ArtifactDescriptor,
        artifact_dir: &std::path::Path,
    ) -> InstallOutcome {
        let name = descriptor.name;
        let mut warnings = Vec::new();
        let mut write_failures = Vec::new();
        let mut written = Vec::new();

        for file in descriptor.files {
            if let Some(progress) = &self.progress {
                progress.update_file(name, file);
            }

            let contents = match self.source.fetch(name, file) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!(artifact = name, file, error = %e, "download failed, continuing");
                    warnings.push(e.to_string());
                    continue;
                }
            };

            let target = artifact_dir.join(file);
            match file_ops::write_file(&target, &rewrite(&contents)) {
                Ok(()) => written.push(target),
                Err(e) => {
                    warn!(artifact = name, file, error = %e, "write failed");
                    write_failures.push(e.to_string());
                }
            }
        }

        if !write_failures.is_empty() {
            return InstallOutcome::failed(request, write_failures.join("; "))
                .with_warnings(warnings)
                .with_files(written);
        }
        if written.is_empty() {
            return InstallOutcome::failed(
                request,
                format!("no files could be downloaded for {name}"),
            )
            .with_warnings(warnings);
        }

        if let Err(e) = self.manifest.sync(name) {
            warn!(artifact = name, error = %e, "export manifest not updated");
            warnings.push(e.to_string());
        }

        InstallOutcome::installed(request, written, warnings, descriptor.dependencies)
    }
}
