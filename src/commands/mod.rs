//! Command implementations for ownui CLI

pub mod add;
pub mod completions;
pub mod helpers;
pub mod list;
pub mod show;
pub mod version;
