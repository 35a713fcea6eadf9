//! ownui - components you own
//!
//! A command line tool that copies UI components and multi-file blocks from a
//! registry into a project's source tree, so they become local, editable code
//! instead of a packaged dependency.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod confirm;
mod error;
mod installer;
mod manifest;
mod progress;
mod registry;
mod rewrite;
mod selection;
mod source;
mod ui;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "ownui=debug" } else { "ownui=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(cli.workspace, args),
        Commands::List(args) => commands::list::run(args),
        Commands::Show(args) => commands::show::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
