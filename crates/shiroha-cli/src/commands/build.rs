//! `shiroha build` - cross-compile the project for one platform.

use serde_json::json;
use tracing::instrument;

use crate::{
    cli::BuildArgs,
    commands::{build_service, project_dir},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::TerminalPrompter,
};

/// Pick a platform (flag or menu), then build into `<root>/bin`.
///
/// The selection is validated before anything is created or spawned.
#[instrument(skip_all)]
pub fn execute(args: BuildArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_service(&config);
    let dir = project_dir(args.project.dir.as_deref())?;

    let selector = match args.target {
        Some(selector) => selector,
        None => TerminalPrompter::new(output.is_interactive()).select_platform(service.catalog())?,
    };
    let job = service.plan(&selector, &dir)?;

    output.info(&format!("Building for {}...", job.platform))?;
    let spinner = output.spinner(format!("go build ({})", job.platform));
    let result = service.execute(&job);
    spinner.finish_and_clear();
    let binary = result?;

    if output.is_json() {
        output.json(&json!({
            "platform": job.platform.to_string(),
            "project": job.project_name,
            "output": binary.display().to_string(),
        }))?;
    } else {
        output.success(&format!(
            "Build successful! Output file: {}",
            binary.display()
        ))?;
    }
    Ok(())
}
