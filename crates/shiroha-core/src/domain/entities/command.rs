//! External tool invocations as plain values.
//!
//! Every subprocess Shiroha starts (dependency sync, doc generation, the
//! compiler, the dev server, the version probe) is described by a
//! [`CommandSpec`] built here, then executed through the `CommandRunner`
//! port. Nothing in this module spawns anything.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::build_job::BuildJob;

/// Subfolder holding the generated entrypoint.
pub const ENTRYPOINT_DIR: &str = "cmd";
/// Entrypoint of a generated project, relative to its root.
pub const ENTRYPOINT: &str = "cmd/server.go";
/// Output folder for generated Swagger docs.
pub const DOCS_DIR: &str = "docs";

/// One external command: program, arguments, working directory and the
/// environment overrides layered on top of the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Value of an override, if this spec sets one.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What came back from a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Combined stdout + stderr. Empty for commands run with inherited stdio.
    pub output: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            output: String::new(),
        }
    }

    pub fn failure(code: i32, output: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// `exit status 2` / `terminated by signal`.
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Program names for the Go toolchain and the Swagger generator.
///
/// Kept configurable so a pinned toolchain (`go1.22.4`) or a vendored `swag`
/// binary can be used; the argument lists are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainCommands {
    pub go: String,
    pub swag: String,
}

impl Default for ToolchainCommands {
    fn default() -> Self {
        Self {
            go: "go".into(),
            swag: "swag".into(),
        }
    }
}

impl ToolchainCommands {
    pub fn new(go: impl Into<String>, swag: impl Into<String>) -> Self {
        Self {
            go: go.into(),
            swag: swag.into(),
        }
    }

    /// `go env GOVERSION`, prints e.g. `go1.22.4`.
    pub fn version(&self) -> CommandSpec {
        CommandSpec::new(&self.go).args(["env", "GOVERSION"])
    }

    /// `go mod tidy` in the project directory.
    pub fn mod_tidy(&self, project_dir: &Path) -> CommandSpec {
        CommandSpec::new(&self.go)
            .args(["mod", "tidy"])
            .current_dir(project_dir)
    }

    /// `swag init -g cmd/server.go -o docs` in the project directory.
    pub fn swag_init(&self, project_dir: &Path) -> CommandSpec {
        CommandSpec::new(&self.swag)
            .args(["init", "-g", ENTRYPOINT, "-o", DOCS_DIR])
            .current_dir(project_dir)
    }

    /// `go run cmd/server.go` in the project directory.
    pub fn run(&self, project_dir: &Path) -> CommandSpec {
        CommandSpec::new(&self.go)
            .args(["run", ENTRYPOINT])
            .current_dir(project_dir)
    }

    /// `GOOS=.. GOARCH=.. go build -o <output> ./cmd/server.go`.
    pub fn build(&self, job: &BuildJob) -> CommandSpec {
        CommandSpec::new(&self.go)
            .arg("build")
            .arg("-o")
            .arg(job.output_path.display().to_string())
            .arg(format!("./{ENTRYPOINT}"))
            .current_dir(&job.project_root)
            .env("GOOS", job.platform.os.as_str())
            .env("GOARCH", job.platform.arch.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let spec = ToolchainCommands::default().mod_tidy(Path::new("demo"));
        assert_eq!(spec.to_string(), "go mod tidy");
        assert_eq!(spec.cwd.as_deref(), Some(Path::new("demo")));
    }

    #[test]
    fn swag_init_targets_entrypoint_and_docs() {
        let spec = ToolchainCommands::default().swag_init(Path::new("demo"));
        assert_eq!(spec.args, ["init", "-g", "cmd/server.go", "-o", "docs"]);
    }

    #[test]
    fn custom_program_names_are_used() {
        let tools = ToolchainCommands::new("go1.22.4", "/opt/bin/swag");
        assert_eq!(tools.version().program, "go1.22.4");
        assert_eq!(tools.swag_init(Path::new(".")).program, "/opt/bin/swag");
    }

    #[test]
    fn later_env_override_wins() {
        let spec = CommandSpec::new("go").env("GOOS", "linux").env("GOOS", "darwin");
        assert_eq!(spec.env_value("GOOS"), Some("darwin"));
        assert_eq!(spec.env_value("GOARCH"), None);
    }

    #[test]
    fn status_text_covers_signals() {
        assert_eq!(CommandOutput::failure(2, "").status_text(), "exit status 2");
        let killed = CommandOutput {
            code: None,
            output: String::new(),
        };
        assert!(!killed.is_success());
        assert_eq!(killed.status_text(), "terminated by signal");
    }
}
