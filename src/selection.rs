//! Turns command line input into the ordered list of artifacts to install
//!
//! Precedence is decided once, up front, by [`SelectionMode::from_input`]:
//! `--all` beats `--all-blocks`, which beats a leading `block` marker, which
//! beats plain component names.

use crate::error::{OwnuiError, Result};
use crate::registry::{ArtifactKind, Registry};

/// First positional token that switches name resolution to the block registry
pub const BLOCK_MARKER: &str = "block";

/// What the user asked for, before any registry is consulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    AllComponents,
    AllBlocks,
    ExplicitBlocks(Vec<String>),
    ExplicitComponents(Vec<String>),
}

impl SelectionMode {
    pub fn from_input(names: &[String], all: bool, all_blocks: bool) -> Result<Self> {
        if all {
            return Ok(Self::AllComponents);
        }
        if all_blocks {
            return Ok(Self::AllBlocks);
        }

        match names.split_first() {
            Some((first, rest)) if first == BLOCK_MARKER => {
                if rest.is_empty() {
                    return Err(OwnuiError::MissingBlockNames);
                }
                Ok(Self::ExplicitBlocks(rest.to_vec()))
            }
            Some(_) => Ok(Self::ExplicitComponents(names.to_vec())),
            None => Err(OwnuiError::EmptySelection),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::AllComponents | Self::ExplicitComponents(_) => ArtifactKind::Component,
            Self::AllBlocks | Self::ExplicitBlocks(_) => ArtifactKind::Block,
        }
    }

    pub fn is_bulk(&self) -> bool {
        matches!(self, Self::AllComponents | Self::AllBlocks)
    }
}

/// A concrete unit of work for the installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub artifact_name: String,
    pub kind: ArtifactKind,
    pub force: bool,
    pub bulk: bool,
}

/// Expand `mode` against the registry of its kind
///
/// Explicit names are kept as given (unknown names included, so the installer
/// can report them), minus repeats. Bulk modes yield every registry entry in
/// registry order.
pub fn resolve(mode: &SelectionMode, registry: &Registry, force: bool) -> Result<Vec<InstallRequest>> {
    let bulk = mode.is_bulk();
    let names: Vec<String> = match mode {
        SelectionMode::AllComponents | SelectionMode::AllBlocks => {
            registry.names().map(str::to_string).collect()
        }
        SelectionMode::ExplicitBlocks(names) | SelectionMode::ExplicitComponents(names) => {
            let mut unique: Vec<String> = Vec::with_capacity(names.len());
            for name in names {
                if !unique.contains(name) {
                    unique.push(name.clone());
                }
            }
            unique
        }
    };

    if names.is_empty() {
        return Err(OwnuiError::EmptySelection);
    }

    Ok(names
        .into_iter()
        .map(|artifact_name| InstallRequest {
            artifact_name,
            kind: mode.kind(),
            force,
            bulk,
        })
        .collect())
}
