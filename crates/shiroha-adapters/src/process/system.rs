//! Command runner backed by `std::process`.

use std::io;
use std::process::{Command, Stdio};

use shiroha_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutput, CommandSpec},
    error::{ShirohaError, ShirohaResult},
};
use tracing::{debug, instrument};

/// Production runner. Blocks until the child exits; no timeout.
///
/// The child inherits the parent environment; `CommandSpec::env` entries are
/// layered on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

fn command_for(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    if let Some(dir) = &spec.cwd {
        cmd.current_dir(dir);
    }
    for (key, value) in &spec.env {
        cmd.env(key, value);
    }
    cmd
}

fn launch_error(spec: &CommandSpec, e: io::Error) -> ShirohaError {
    ApplicationError::CommandLaunch {
        command: spec.to_string(),
        reason: e.to_string(),
    }
    .into()
}

impl CommandRunner for SystemCommandRunner {
    /// stdout followed by stderr, decoded lossily.
    #[instrument(skip_all, fields(command = %spec))]
    fn run_captured(&self, spec: &CommandSpec) -> ShirohaResult<CommandOutput> {
        let output = command_for(spec)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| launch_error(spec, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(code = ?output.status.code(), bytes = combined.len(), "Command finished");
        Ok(CommandOutput {
            code: output.status.code(),
            output: combined,
        })
    }

    #[instrument(skip_all, fields(command = %spec))]
    fn run_inherited(&self, spec: &CommandSpec) -> ShirohaResult<CommandOutput> {
        let status = command_for(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| launch_error(spec, e))?;

        debug!(code = ?status.code(), "Command finished");
        Ok(CommandOutput {
            code: status.code(),
            output: String::new(),
        })
    }
}
