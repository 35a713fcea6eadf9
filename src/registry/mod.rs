//! Static catalog of installable artifacts
//!
//! Two registries ship with the binary: single-file components and multi-file
//! blocks. Both are plain ordered slices of [`ArtifactDescriptor`], so
//! iteration order is declaration order and lookups never allocate.

mod blocks;
mod components;

use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path};

use crate::error::{Result, artifact::invalid_registry};

/// Which registry an artifact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Component,
    Block,
}

impl ArtifactKind {
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Component => "component",
            ArtifactKind::Block => "block",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One installable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Registry key, also the destination directory name
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Packages the artifact expects the consuming project to depend on
    pub dependencies: &'static [&'static str],
    /// Paths relative to the artifact directory; the first one is the primary file
    pub files: &'static [&'static str],
}

impl ArtifactDescriptor {
    /// The file whose presence decides whether the artifact is already installed
    pub fn primary_file(&self) -> Option<&'static str> {
        self.files.first().copied()
    }
}

/// Read-only catalog for one artifact kind
#[derive(Debug, Clone)]
pub struct Registry {
    kind: ArtifactKind,
    entries: &'static [ArtifactDescriptor],
}

impl Registry {
    /// Build a registry over `entries`, checking the catalog invariants
    ///
    /// Names must be non-empty and unique, every descriptor needs at least one
    /// file, and file paths must stay inside the artifact directory.
    pub fn new(kind: ArtifactKind, entries: &'static [ArtifactDescriptor]) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(invalid_registry(format!("empty {kind} name")));
            }
            if !seen.insert(entry.name) {
                return Err(invalid_registry(format!(
                    "duplicate {kind} name: {}",
                    entry.name
                )));
            }
            if entry.files.is_empty() {
                return Err(invalid_registry(format!("{} has no files", entry.name)));
            }
            if let Some(bad) = entry.files.iter().find(|f| !is_contained(f)) {
                return Err(invalid_registry(format!(
                    "{} lists a file outside its directory: {bad}",
                    entry.name
                )));
            }
        }
        Ok(Self { kind, entries })
    }

    /// Built-in component catalog
    pub fn components() -> Self {
        Self {
            kind: ArtifactKind::Component,
            entries: components::COMPONENTS,
        }
    }

    /// Built-in block catalog
    pub fn blocks() -> Self {
        Self {
            kind: ArtifactKind::Block,
            entries: blocks::BLOCKS,
        }
    }

    /// Built-in catalog for `kind`, checked against the catalog invariants
    pub fn builtin(kind: ArtifactKind) -> Result<Self> {
        let entries = match kind {
            ArtifactKind::Component => components::COMPONENTS,
            ArtifactKind::Block => blocks::BLOCKS,
        };
        Self::new(kind, entries)
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, name: &str) -> Option<&'static ArtifactDescriptor> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ArtifactDescriptor> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_contained(file: &str) -> bool {
    !file.is_empty()
        && Path::new(file)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
