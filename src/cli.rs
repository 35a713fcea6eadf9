//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ownui - components you own
///
/// Pull UI components and blocks into your project as editable source.
#[derive(Parser, Debug)]
#[command(
    name = "ownui",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pull UI components and blocks into your project as source you own",
    long_about = "ownui copies UI components and multi-file blocks from a registry straight into \
                  your source tree, rewrites their utility imports for the new location and keeps \
                  an export barrel up to date. The copied files are yours to edit.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ownui add button card\n    \
                  ownui add block hero-section footer\n    \
                  ownui add --all\n    \
                  ownui list\n    \
                  ownui show dialog"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install components or blocks into the project
    Add(AddArgs),

    /// List available components and blocks
    List(ListArgs),

    /// Show details of one component or block
    Show(ShowArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add components:\n    ownui add button dialog\n\n\
                   Add blocks:\n    ownui add block accordion footer\n\n\
                   Add every component without prompting:\n    ownui add --all\n\n\
                   Add every block:\n    ownui add --all-blocks\n\n\
                   Overwrite local copies:\n    ownui add button --force\n\n\
                   Install from a local mirror:\n    ownui add button --source ./registry")]
pub struct AddArgs {
    /// Names to install; a leading `block` installs the following names as blocks
    pub names: Vec<String>,

    /// Install every component (explicit names are ignored)
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Install every block (explicit names are ignored)
    #[arg(long)]
    pub all_blocks: bool,

    /// Overwrite artifacts that are already installed without asking
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Keep artifacts that are already installed without asking
    #[arg(long, conflicts_with = "force")]
    pub skip_existing: bool,

    /// Registry location: base URL or local directory
    #[arg(long, env = "OWNUI_SOURCE", value_name = "URL|DIR")]
    pub source: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List everything:\n    ownui list\n\n\
                  List blocks only:\n    ownui list --blocks")]
pub struct ListArgs {
    /// Only list components
    #[arg(long, conflicts_with = "blocks")]
    pub components: bool,

    /// Only list blocks
    #[arg(long)]
    pub blocks: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a component:\n    ownui show dialog\n\n\
                  Show a block:\n    ownui show accordion --block")]
pub struct ShowArgs {
    /// Component or block name
    pub name: String,

    /// Look the name up among blocks
    #[arg(long)]
    pub block: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ownui completions --shell bash > ~/.bash_completion.d/ownui\n\n\
                  Generate zsh completions:\n    ownui completions --shell zsh > ~/.zfunc/_ownui")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_add() {
        let cli = Cli::try_parse_from(["ownui", "add", "button", "card"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.names, vec!["button", "card"]);
                assert!(!args.all);
                assert!(!args.all_blocks);
                assert!(!args.force);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_blocks() {
        let cli = Cli::try_parse_from(["ownui", "add", "block", "footer", "--force"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.names, vec!["block", "footer"]);
                assert!(args.force);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_all() {
        let cli = Cli::try_parse_from(["ownui", "add", "-a"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert!(args.all);
                assert!(args.names.is_empty());
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_force_conflicts_with_skip_existing() {
        assert!(Cli::try_parse_from(["ownui", "add", "button", "-f", "--skip-existing"]).is_err());
    }

    #[test]
    fn test_cli_parsing_add_source() {
        let cli = Cli::try_parse_from(["ownui", "add", "button", "--source", "./mirror"]).unwrap();
        match cli.command {
            Commands::Add(args) => assert_eq!(args.source.as_deref(), Some("./mirror")),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["ownui", "list", "--blocks"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert!(args.blocks);
                assert!(!args.components);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["ownui", "show", "accordion", "--block"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.name, "accordion");
                assert!(args.block);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["ownui", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["ownui", "-v", "-w", "/tmp/project", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["ownui", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
