//! Recording command runner for tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shiroha_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutput, CommandSpec},
    error::ShirohaResult,
};

/// How a command was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Captured,
    Inherited,
}

/// Scripted result for commands whose display text starts with a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    Exit { code: i32, output: String },
    LaunchFailure(String),
}

impl ScriptedResponse {
    pub fn exit(code: i32, output: impl Into<String>) -> Self {
        Self::Exit {
            code,
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub spec: CommandSpec,
    pub mode: RunMode,
}

/// Runner that records every call instead of spawning anything.
///
/// Unscripted commands succeed with empty output. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<RecordedCall>,
    script: Vec<(String, ScriptedResponse)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` (e.g. `"swag init"`).
    pub fn respond_to(self, prefix: impl Into<String>, response: ScriptedResponse) -> Self {
        self.lock().script.push((prefix.into(), response));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Display text of every call, in order.
    pub fn commands(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .map(|c| c.spec.to_string())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, spec: &CommandSpec, mode: RunMode) -> ShirohaResult<CommandOutput> {
        let mut inner = self.lock();
        inner.calls.push(RecordedCall {
            spec: spec.clone(),
            mode,
        });

        let display = spec.to_string();
        let response = inner
            .script
            .iter()
            .find(|(prefix, _)| display.starts_with(prefix.as_str()))
            .map(|(_, r)| r.clone());

        match response {
            None => Ok(CommandOutput::success()),
            Some(ScriptedResponse::Exit { code, output }) => Ok(CommandOutput {
                code: Some(code),
                output,
            }),
            Some(ScriptedResponse::LaunchFailure(reason)) => {
                Err(ApplicationError::CommandLaunch {
                    command: display,
                    reason,
                }
                .into())
            }
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run_captured(&self, spec: &CommandSpec) -> ShirohaResult<CommandOutput> {
        self.record(spec, RunMode::Captured)
    }

    fn run_inherited(&self, spec: &CommandSpec) -> ShirohaResult<CommandOutput> {
        self.record(spec, RunMode::Inherited)
    }
}
