//! Command runner adapters.

mod recording;
mod system;

pub use recording::{RecordedCall, RecordingRunner, RunMode, ScriptedResponse};
pub use system::SystemCommandRunner;
