//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shiroha_core::domain::TemplateVariant;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shiroha",
    bin_name = "shiroha",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold, build and run layered Gin web services",
    long_about = "Shiroha generates a layered Go/Gin web-service skeleton, \
                  cross-compiles it for common platforms and runs it.",
    after_help = "EXAMPLES:\n\
        \x20 shiroha new demo\n\
        \x20 shiroha new user-api --template swagger --yes\n\
        \x20 shiroha build --target 5\n\
        \x20 shiroha completions bash > /usr/share/bash-completion/completions/shiroha",
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
    /// Create a new Gin project.
    #[command(
        visible_aliases = ["generate", "init"],
        about = "Create a new Go project structure",
        after_help = "EXAMPLES:\n\
            \x20 shiroha new demo\n\
            \x20 shiroha new demo --no-run\n\
            \x20 shiroha new api --template swagger --yes\n\
            \x20 shiroha new demo --dry-run"
    )]
    New(NewArgs),

    /// Cross-compile the project in the current directory.
    #[command(
        about = "Build the project for a target platform",
        after_help = "EXAMPLES:\n\
            \x20 shiroha build             # pick from a menu\n\
            \x20 shiroha build --target 1  # linux/amd64\n\
            \x20 shiroha build -t 5        # windows/amd64"
    )]
    Build(BuildArgs),

    /// Generate Swagger documentation with `swag init`.
    #[command(about = "Generate Swagger API documentation")]
    Doc(ProjectDirArgs),

    /// Start the project's server with `go run cmd/server.go`.
    #[command(about = "Run the project's main server")]
    Run(ProjectDirArgs),

    /// List template variants and build platforms.
    #[command(
        visible_alias = "ls",
        about = "List templates and build platforms",
        after_help = "EXAMPLES:\n\
            \x20 shiroha list\n\
            \x20 shiroha list --platforms\n\
            \x20 shiroha list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shiroha completions bash > ~/.local/share/bash-completion/completions/shiroha\n\
            \x20 shiroha completions zsh  > ~/.zfunc/_shiroha\n\
            \x20 shiroha completions fish > ~/.config/fish/completions/shiroha.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Shiroha configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shiroha config get toolchain.program\n\
            \x20 shiroha config list\n\
            \x20 shiroha config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `shiroha new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; also the Go module path and the folder name.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template variant (defaults to `defaults.template` from config).
    #[arg(
        short = 't',
        long = "template",
        value_name = "VARIANT",
        value_enum,
        help = "Template variant"
    )]
    pub template: Option<VariantArg>,

    /// Directory the project folder is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the project"
    )]
    pub output: PathBuf,

    /// Run `swag init` after `go mod tidy` (default: on for swagger).
    #[arg(long = "docs", overrides_with = "no_docs", help = "Generate Swagger docs")]
    pub docs: bool,

    /// Never run `swag init`.
    #[arg(long = "no-docs", help = "Skip Swagger docs generation")]
    pub no_docs: bool,

    /// Answer yes to "run the project now?".
    #[arg(short = 'y', long = "yes", help = "Tidy and run without asking")]
    pub yes: bool,

    /// Answer no to "run the project now?".
    #[arg(long = "no-run", conflicts_with = "yes", help = "Only generate files")]
    pub no_run: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl NewArgs {
    /// `Some(true)` for `--docs`, `Some(false)` for `--no-docs`.
    pub fn docs_override(&self) -> Option<bool> {
        match (self.docs, self.no_docs) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Template variants as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    #[value(alias = "default")]
    Basic,
    #[value(alias = "swag")]
    Swagger,
}

impl From<VariantArg> for TemplateVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Basic => TemplateVariant::Basic,
            VariantArg::Swagger => TemplateVariant::Swagger,
        }
    }
}

// ── build / doc / run ─────────────────────────────────────────────────────────

/// Arguments for `shiroha build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Menu number of the target platform (1-5). Prompts when omitted.
    #[arg(short = 't', long = "target", value_name = "N", help = "Target platform number")]
    pub target: Option<String>,

    #[command(flatten)]
    pub project: ProjectDirArgs,
}

/// Where the generated project lives.
#[derive(Debug, Args)]
pub struct ProjectDirArgs {
    /// Project root or its `cmd` folder (default: current directory).
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `shiroha list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only template variants.
    #[arg(long = "templates", conflicts_with = "platforms", help = "Only list templates")]
    pub templates: bool,

    /// Only build platforms.
    #[arg(long = "platforms", help = "Only list build platforms")]
    pub platforms: bool,

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
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shiroha config init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.shiroha.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shiroha completions`.
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

/// Subcommands for `shiroha config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.program`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a default configuration file.
    #[command(
        after_help = "EXAMPLES:\n\
            \x20 shiroha config init           # platform config directory\n\
            \x20 shiroha config init --local   # ./.shiroha.toml\n\
            \x20 shiroha config init --force   # overwrite"
    )]
    Init(InitArgs),
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_with_defaults() {
        let cli = Cli::parse_from(["shiroha", "new", "demo"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "demo");
        assert_eq!(args.template, None);
        assert_eq!(args.output, PathBuf::from("."));
        assert_eq!(args.docs_override(), None);
    }

    #[test]
    fn variant_aliases() {
        let cli = Cli::parse_from(["shiroha", "new", "api", "-t", "swag"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(
            args.template.map(TemplateVariant::from),
            Some(TemplateVariant::Swagger)
        );
    }

    #[test]
    fn last_docs_flag_wins() {
        let cli = Cli::parse_from(["shiroha", "new", "api", "--no-docs", "--docs"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.docs_override(), Some(true));
    }

    #[test]
    fn yes_and_no_run_conflict() {
        assert!(Cli::try_parse_from(["shiroha", "new", "demo", "--yes", "--no-run"]).is_err());
    }

    #[test]
    fn build_target_is_free_text() {
        // range checking happens in the platform catalog, not in clap
        let cli = Cli::parse_from(["shiroha", "build", "--target", "9"]);
        let Commands::Build(args) = cli.command else {
            panic!("expected Build command");
        };
        assert_eq!(args.target.as_deref(), Some("9"));
    }

    #[test]
    fn init_is_an_alias_for_new() {
        let cli = Cli::parse_from(["shiroha", "init", "demo", "--no-run"]);
        let Commands::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.name, "demo");
        assert!(args.no_run);
    }

    #[test]
    fn config_init_takes_local_and_force() {
        let cli = Cli::parse_from(["shiroha", "config", "init", "--local", "-f"]);
        let Commands::Config(ConfigCommands::Init(args)) = cli.command else {
            panic!("expected config init");
        };
        assert!(args.local && args.force);
    }

    #[test]
    fn no_color_flag_needs_no_value() {
        let cli = Cli::parse_from(["shiroha", "--no-color", "list"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["shiroha", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
