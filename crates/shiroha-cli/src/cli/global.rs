//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace. Logs go to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)",
        long_help = "More log output on stderr:
    (none)  - warnings and errors
    -v      - scaffold and build progress
    -vv     - every command line and resolved path
    -vvv    - every filesystem call"
    )]
    pub verbose: u8,

    /// Only errors are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Use this TOML file instead of the platform config file.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "SHIROHA_CONFIG",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Tracing level for the workspace crates; `--quiet` beats `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colors, symbols and spinners.
    Human,
    /// No colors, no spinners.
    Plain,
    /// One JSON document on stdout; JSON log lines on stderr.
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value.
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(args_with(0, false).log_level(), "warn");
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(args_with(1, false).log_level(), "info");
        assert_eq!(args_with(2, false).log_level(), "debug");
        assert_eq!(args_with(3, false).log_level(), "trace");
        assert_eq!(args_with(10, false).log_level(), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(args_with(0, true).log_level(), "error");
        assert_eq!(args_with(3, true).log_level(), "error");
    }

    #[test]
    fn config_format_is_case_insensitive() {
        assert_eq!(OutputFormat::from_config("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }
}
