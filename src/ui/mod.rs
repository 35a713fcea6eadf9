//! Terminal output for commands

pub mod display;
