//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// kitbag - Personal development environment bootstrapper.
#[derive(Debug, Parser)]
#[command(name = "kitbag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check, install, and configure the selected tools
    Setup(SetupArgs),

    /// Show which managed tools are installed
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Configure git (~/.gitconfig)
    #[arg(long)]
    pub git: bool,

    /// Configure vim (~/.vimrc, vim-plug)
    #[arg(long)]
    pub vim: bool,

    /// Configure zsh (oh-my-zsh, theme, plugins, shell tools)
    #[arg(long)]
    pub zsh: bool,

    /// Install macOS desktop extras via Homebrew
    #[arg(long)]
    pub macos: bool,

    /// Install and configure GVM (Go version manager)
    #[arg(long)]
    pub gvm: bool,

    /// Install and configure SDKMAN (Java version manager)
    #[arg(long)]
    pub java: bool,

    /// Install and configure rustup (Rust version manager)
    #[arg(long)]
    pub rust: bool,

    /// Configure everything
    #[arg(long)]
    pub all: bool,

    /// Git user.name written to ~/.gitconfig
    #[arg(long, value_name = "NAME")]
    pub git_name: Option<String>,

    /// Git user.email written to ~/.gitconfig
    #[arg(long, value_name = "EMAIL")]
    pub git_email: Option<String>,

    /// Overwrite existing config files (the old file is backed up)
    #[arg(short, long)]
    pub force: bool,

    /// Preview without executing commands or writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Skip install confirmations
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Emit a machine-readable JSON report
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_setup_selection_flags() {
        let cli = Cli::parse_from(["kitbag", "setup", "--zsh", "--rust", "--dry-run"]);
        match cli.command {
            Commands::Setup(args) => {
                assert!(args.zsh);
                assert!(args.rust);
                assert!(args.dry_run);
                assert!(!args.git);
            }
            other => panic!("expected Setup, got {:?}", other),
        }
    }

    #[test]
    fn parses_git_identity() {
        let cli = Cli::parse_from([
            "kitbag",
            "setup",
            "--git",
            "--git-name",
            "Alice",
            "--git-email",
            "alice@example.com",
        ]);
        match cli.command {
            Commands::Setup(args) => {
                assert_eq!(args.git_name.as_deref(), Some("Alice"));
                assert_eq!(args.git_email.as_deref(), Some("alice@example.com"));
            }
            other => panic!("expected Setup, got {:?}", other),
        }
    }

    #[test]
    fn parses_status_json() {
        let cli = Cli::parse_from(["kitbag", "status", "--json"]);
        match cli.command {
            Commands::Status(args) => assert!(args.json),
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["kitbag", "status", "--debug", "--no-color"]);
        assert!(cli.debug);
        assert!(cli.no_color);
    }
}
