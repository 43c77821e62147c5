//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use shiroha_core::application::{Stage, StageObserver, StageOutcome, StageReport};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// With `--output-format json` the decorated helpers (`success`, `info`,
/// `warning`, `header`) stay silent and commands emit one JSON document
/// through [`OutputManager::json`] instead.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // the flag wins unless it was left at `auto`
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_config(&config.output.format).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.decorations_hidden() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. Shown even in quiet mode, on stderr.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        Term::stderr().write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.decorations_hidden() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.decorations_hidden() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.decorations_hidden() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON on stdout. Not affected by `--quiet`.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    /// Spinner on stderr while a captured subprocess runs.
    ///
    /// Hidden unless the output is human-facing.
    pub fn spinner(&self, msg: impl Into<String>) -> ProgressBar {
        if self.decorations_hidden()
            || self.resolved_format != OutputFormat::Human
            || !io::stderr().is_terminal()
        {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(msg.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// Interactive prompts are only offered on a human-facing terminal.
    pub fn is_interactive(&self) -> bool {
        self.resolved_format == OutputFormat::Human && io::stdin().is_terminal()
    }

    fn decorations_hidden(&self) -> bool {
        self.quiet || self.is_json()
    }
}

// ── stage reporting ───────────────────────────────────────────────────────────

/// How a stage report is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageLine {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
    Steps(Vec<String>),
}

/// Map a report to the line(s) the user sees, if any.
pub fn describe_stage(report: &StageReport) -> Option<StageLine> {
    use StageOutcome::*;

    let line = match (report.stage, &report.outcome) {
        (stage, Failed(_)) => StageLine::Error(format!("{stage} failed")),
        (Stage::Scaffold, Completed) => StageLine::Success("Project files generated".into()),
        (Stage::NextSteps, _) => StageLine::Steps(report.notes.clone()),
        (Stage::Confirm, Completed) => StageLine::Info("Running the project...".into()),
        (Stage::Confirm, Skipped) => {
            StageLine::Info("Skipped running the project".into())
        }
        (Stage::SyncDependencies, Completed) => {
            StageLine::Success("Dependencies synced (go mod tidy)".into())
        }
        (Stage::GenerateDocs, Completed) => {
            StageLine::Success("Swagger docs generated in docs/".into())
        }
        (Stage::GenerateDocs, Warning(reason)) => StageLine::Warning(format!(
            "Swagger docs generation failed, continuing: {}",
            reason.lines().next().unwrap_or_default()
        )),
        (Stage::Run, Completed) => StageLine::Success("Server exited".into()),
        _ => return None,
    };
    Some(line)
}

/// Prints orchestrator progress through an [`OutputManager`].
pub struct ConsoleObserver<'a> {
    output: &'a OutputManager,
}

impl<'a> ConsoleObserver<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self { output }
    }

    fn show(&self, line: StageLine) -> io::Result<()> {
        match line {
            StageLine::Success(msg) => self.output.success(&msg),
            StageLine::Info(msg) => self.output.info(&msg),
            StageLine::Warning(msg) => self.output.warning(&msg),
            StageLine::Error(msg) => self.output.error(&msg),
            StageLine::Steps(steps) => {
                if self.output.is_json() {
                    return Ok(());
                }
                self.output.print("")?;
                self.output.header("Next steps:")?;
                for step in steps {
                    self.output.print(&format!("  {step}"))?;
                }
                self.output.print("")
            }
        }
    }
}

impl StageObserver for ConsoleObserver<'_> {
    fn on_stage(&self, report: &StageReport) {
        tracing::debug!(stage = %report.stage, outcome = ?report.outcome, "stage finished");
        if let Some(line) = describe_stage(report) {
            // a closed stdout must not abort the flow
            if let Err(e) = self.show(line) {
                tracing::debug!(error = %e, "could not print stage report");
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
