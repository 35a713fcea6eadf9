//! Overwrite decisions for artifacts that are already present
//!
//! Each artifact starts `Unchecked`. If its primary file is absent it is
//! `Clear`. If present, `force` or bulk mode move it straight to
//! `ResolvedOverwrite`; otherwise it waits in `ConflictPending` until the
//! confirmer answers. No answer, or "no", ends in `ResolvedSkip`.

use std::path::Path;

use crate::selection::InstallRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictState {
    Unchecked,
    Clear,
    ConflictPending,
    ResolvedOverwrite,
    ResolvedSkip,
}

impl ConflictState {
    /// Apply the existence check to an `Unchecked` state
    pub fn check(self, primary_exists: bool, request: &InstallRequest) -> Self {
        match self {
            Self::Unchecked if !primary_exists => Self::Clear,
            Self::Unchecked if request.force || request.bulk => Self::ResolvedOverwrite,
            Self::Unchecked => Self::ConflictPending,
            other => other,
        }
    }

    /// Apply the confirmer's answer to a `ConflictPending` state
    pub fn answer(self, overwrite: bool) -> Self {
        match self {
            Self::ConflictPending if overwrite => Self::ResolvedOverwrite,
            Self::ConflictPending => Self::ResolvedSkip,
            other => other,
        }
    }

    /// Whether files may be written
    pub fn proceeds(self) -> bool {
        matches!(self, Self::Clear | Self::ResolvedOverwrite)
    }
}

/// Drive the state machine for one artifact, calling `ask` only when needed
pub fn resolve(
    primary: &Path,
    request: &InstallRequest,
    ask: impl FnOnce(&str) -> bool,
) -> ConflictState {
    let state = ConflictState::Unchecked.check(primary.exists(), request);
    if state != ConflictState::ConflictPending {
        return state;
    }

    let message = format!(
        "The {} \"{}\" already exists at {}. Overwrite it?",
        request.kind,
        request.artifact_name,
        primary.display()
    );
    state.answer(ask(&message))
}
