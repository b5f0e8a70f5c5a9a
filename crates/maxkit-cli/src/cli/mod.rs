//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "maxkit",
    bin_name = "maxkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold MSDK firmware projects from installed SDK examples",
    long_about = "Maxkit creates new firmware projects for MAX32xxx/MAX78xxx parts \
                  by copying and configuring the examples bundled with an installed MaximSDK.",
    after_help = "EXAMPLES:\n\
        \x20 maxkit new my_proj -t MAX32655\n\
        \x20 maxkit new blinky  -t 32690 --template GPIO -b FTHR\n\
        \x20 maxkit list -t MAX32655\n\
        \x20 maxkit completions bash > /usr/share/bash-completion/completions/maxkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from an SDK example.
    #[command(
        visible_alias = "init",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 maxkit new my_proj -t MAX32655\n\
            \x20 maxkit new my_proj -t 32655 --template I2C\n\
            \x20 maxkit new ../fthr_app -t MAX32655 -b FTHR_Apps_P1 --no-vscode"
    )]
    New(NewArgs),

    /// List SDK targets, or one target's templates and BSPs.
    #[command(
        visible_alias = "ls",
        about = "List targets, templates, and BSPs",
        after_help = "EXAMPLES:\n\
            \x20 maxkit list\n\
            \x20 maxkit list -t MAX32655\n\
            \x20 maxkit list -t 32655 --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 maxkit completions bash > ~/.local/share/bash-completion/completions/maxkit\n\
            \x20 maxkit completions zsh  > ~/.zfunc/_maxkit\n\
            \x20 maxkit completions fish > ~/.config/fish/completions/maxkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the maxkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 maxkit config init\n\
            \x20 maxkit config path\n\
            \x20 maxkit config show"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `maxkit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path. A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Target part.
    #[arg(
        short = 't',
        long = "target",
        value_name = "TGT",
        required = true,
        help = "Target part (MAX32655, 32690, ...)"
    )]
    pub target: String,

    /// Board support package. Falls back to the config default, then to the
    /// SDK's standard evaluation kit.
    #[arg(
        short = 'b',
        long = "bsp",
        value_name = "BSP",
        help = "Board support package (default: EvKit_V1)"
    )]
    pub bsp: Option<String>,

    /// Template (example) name from the SDK.
    #[arg(
        long = "template",
        value_name = "TEM",
        help = "Template name from the SDK (default: Hello_World)"
    )]
    pub template: Option<String>,

    /// Skip VS Code integration files.
    #[arg(long = "no-vscode", help = "Don't generate VS Code configuration")]
    pub no_vscode: bool,

    /// Skip README creation.
    #[arg(long = "no-readme", help = "Don't create README.md")]
    pub no_readme: bool,

    /// Skip git repository initialization.
    #[arg(long = "no-git", help = "Don't initialize a git repository")]
    pub no_git: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `maxkit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// List templates and BSPs for this target instead of all targets.
    #[arg(
        short = 't',
        long = "target",
        value_name = "TGT",
        help = "Show templates and BSPs for one target"
    )]
    pub target: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `maxkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `maxkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
    /// Print the path to the active configuration file.
    Path,
    /// Print the effective configuration.
    Show,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["maxkit", "new", "my_proj", "-t", "MAX32655"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "my_proj");
                assert_eq!(args.target, "MAX32655");
                assert!(args.bsp.is_none());
                assert!(!args.no_vscode);
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn init_is_an_alias_for_new() {
        let cli = Cli::parse_from(["maxkit", "init", "my_proj", "-t", "32655"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn new_requires_target() {
        assert!(Cli::try_parse_from(["maxkit", "new", "my_proj"]).is_err());
    }

    #[test]
    fn opt_out_flags_parse() {
        let cli = Cli::parse_from([
            "maxkit", "new", "p", "-t", "32655", "--no-vscode", "--no-readme", "--no-git",
        ]);
        if let Commands::New(args) = cli.command {
            assert!(args.no_vscode && args.no_readme && args.no_git);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn list_accepts_target_filter() {
        let cli = Cli::parse_from(["maxkit", "list", "-t", "MAX32655", "--format", "json"]);
        if let Commands::List(args) = cli.command {
            assert_eq!(args.target.as_deref(), Some("MAX32655"));
            assert!(matches!(args.format, ListFormat::Json));
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["maxkit", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
