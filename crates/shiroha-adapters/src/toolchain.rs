//! Toolchain version probes.

use shiroha_core::{
    application::ports::{CommandRunner, ToolchainProbe},
    domain::ToolchainCommands,
};
use tracing::{debug, warn};

/// Asks the installed `go` binary for its version (`go env GOVERSION`).
pub struct GoToolchainProbe {
    runner: Box<dyn CommandRunner>,
    commands: ToolchainCommands,
}

impl GoToolchainProbe {
    pub fn new(runner: Box<dyn CommandRunner>, commands: ToolchainCommands) -> Self {
        Self { runner, commands }
    }
}

impl ToolchainProbe for GoToolchainProbe {
    fn detect_version(&self) -> Option<String> {
        let spec = self.commands.version();
        let output = match self.runner.run_captured(&spec) {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "Go toolchain not available");
                return None;
            }
        };

        if !output.is_success() {
            warn!(status = %output.status_text(), "'{spec}' failed");
            return None;
        }

        let version = output.output.trim();
        debug!(version, "Detected Go toolchain");
        (!version.is_empty()).then(|| version.to_string())
    }
}

/// Probe returning a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct StaticToolchainProbe(Option<String>);

impl StaticToolchainProbe {
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// A machine without Go.
    pub fn missing() -> Self {
        Self(None)
    }
}

impl ToolchainProbe for StaticToolchainProbe {
    fn detect_version(&self) -> Option<String> {
        self.0.clone()
    }
}
