//! Per-artifact results and the session summary

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::registry::ArtifactKind;
use crate::selection::InstallRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Installed,
    Skipped,
    Failed,
}

/// What happened to one requested artifact
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub artifact_name: String,
    pub kind: ArtifactKind,
    pub status: InstallStatus,
    /// Always set when `status` is `Failed`
    pub error_detail: Option<String>,
    /// Non-fatal problems, e.g. a file that could not be downloaded
    pub warnings: Vec<String>,
    pub files_written: Vec<PathBuf>,
    pub dependencies: Vec<String>,
}

impl InstallOutcome {
    fn base(request: &InstallRequest, status: InstallStatus) -> Self {
        Self {
            artifact_name: request.artifact_name.clone(),
            kind: request.kind,
            status,
            error_detail: None,
            warnings: Vec::new(),
            files_written: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn installed(
        request: &InstallRequest,
        files_written: Vec<PathBuf>,
        warnings: Vec<String>,
        dependencies: &[&str],
    ) -> Self {
        Self {
            files_written,
            warnings,
            dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
            ..Self::base(request, InstallStatus::Installed)
        }
    }

    pub fn skipped(request: &InstallRequest) -> Self {
        Self::base(request, InstallStatus::Skipped)
    }

    pub fn failed(request: &InstallRequest, detail: impl Into<String>) -> Self {
        Self {
            error_detail: Some(detail.into()),
            ..Self::base(request, InstallStatus::Failed)
        }
    }

    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    #[must_use]
    pub fn with_files(mut self, files_written: Vec<PathBuf>) -> Self {
        self.files_written = files_written;
        self
    }
}

/// Outcomes of a session, in the order the artifacts were requested
#[derive(Debug, Default)]
pub struct InstallReport {
    outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    pub fn push(&mut self, outcome: InstallOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[InstallOutcome] {
        &self.outcomes
    }

    fn with_status(&self, status: InstallStatus) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(move |o| o.status == status)
    }

    pub fn installed(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.with_status(InstallStatus::Installed)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.with_status(InstallStatus::Skipped)
    }

    pub fn failed(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.with_status(InstallStatus::Failed)
    }

    /// True when there was work and none of it succeeded or was skipped
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.failed().count() == self.outcomes.len()
    }

    /// Packages the installed artifacts expect, sorted and deduplicated
    pub fn dependencies(&self) -> Vec<&str> {
        self.installed()
            .flat_map(|o| o.dependencies.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> InstallRequest {
        InstallRequest {
            artifact_name: name.to_string(),
            kind: ArtifactKind::Component,
            force: false,
            bulk: false,
        }
    }

    #[test]
    fn test_failed_carries_detail() {
        let outcome = InstallOutcome::failed(&request("nope"), "Artifact \"nope\" not found.");
        assert_eq!(outcome.status, InstallStatus::Failed);
        assert_eq!(
            outcome.error_detail.as_deref(),
            Some("Artifact \"nope\" not found.")
        );
    }

    #[test]
    fn test_all_failed() {
        let mut report = InstallReport::default();
        assert!(!report.all_failed());

        report.push(InstallOutcome::failed(&request("a"), "x"));
        assert!(report.all_failed());

        report.push(InstallOutcome::skipped(&request("b")));
        assert!(!report.all_failed());
    }

    #[test]
    fn test_dependencies_only_from_installed() {
        let mut report = InstallReport::default();
        report.push(InstallOutcome::installed(
            &request("dialog"),
            vec![],
            vec![],
            &["lit", "@floating-ui/dom"],
        ));
        report.push(InstallOutcome::installed(&request("button"), vec![], vec![], &["lit"]));
        let mut skipped = InstallOutcome::skipped(&request("calendar"));
        skipped.dependencies = vec!["date-fns".to_string()];
        report.push(skipped);

        assert_eq!(report.dependencies(), vec!["@floating-ui/dom", "lit"]);
    }

    #[test]
    fn test_filters_keep_order() {
        let mut report = InstallReport::default();
        report.push(InstallOutcome::installed(&request("a"), vec![], vec![], &[]));
        report.push(InstallOutcome::skipped(&request("b")));
        report.push(InstallOutcome::installed(&request("c"), vec![], vec![], &[]));

        let installed: Vec<_> = report.installed().map(|o| o.artifact_name.as_str()).collect();
        assert_eq!(installed, vec!["a", "c"]);
        assert_eq!(report.skipped().count(), 1);
        assert_eq!(report.failed().count(), 0);
    }
}
