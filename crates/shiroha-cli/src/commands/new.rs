//! Implementation of the `shiroha new` command.
//!
//! Responsibility: turn CLI arguments into [`OrchestratorOptions`], run the
//! orchestrator (or only the planner for `--dry-run`) and display results.
//! No business logic lives here.

use serde_json::json;
use tracing::{info, instrument};

use shiroha_core::{
    application::{
        Confirmation, OrchestratorOptions, OrchestratorReport, ProjectOrchestrator,
        ScaffoldService,
    },
    domain::{ProjectStructure, TemplateVariant},
};

use crate::{
    cli::NewArgs,
    commands::{scaffold_service, tooling_service},
    config::AppConfig,
    error::CliResult,
    output::{ConsoleObserver, OutputManager},
    prompt::TerminalPrompter,
};

/// Execute the `shiroha new` command.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let variant = match args.template {
        Some(arg) => arg.into(),
        None => config.default_variant()?,
    };
    let scaffold = scaffold_service(&config)?;

    if args.dry_run {
        return dry_run(&scaffold, &args, variant, &output);
    }

    let options = orchestrator_options(&args, variant);
    info!(?options, output_dir = %args.output.display(), "Creating project");
    output.header(&format!("Creating '{}' ({variant} template)...", args.name))?;

    let orchestrator = ProjectOrchestrator::new(
        scaffold,
        tooling_service(&config),
        Box::new(TerminalPrompter::new(output.is_interactive())),
    );
    let observer = ConsoleObserver::new(&output);
    let report = orchestrator.run(&args.name, &args.output, options, &observer)?;

    if output.is_json() {
        output.json(&report_json(&report))?;
    } else if !report.ran {
        output.success(&format!(
            "Project '{}' is ready in {} (go {})",
            report.scaffold.project_name,
            report.scaffold.project_root.display(),
            report.scaffold.version,
        ))?;
    }
    Ok(())
}

/// Flags layered over the variant's defaults.
fn orchestrator_options(args: &NewArgs, variant: TemplateVariant) -> OrchestratorOptions {
    let mut options = OrchestratorOptions::for_variant(variant).confirmation(confirmation(args));
    if let Some(docs) = args.docs_override() {
        options = options.generate_docs(docs);
    }
    options
}

fn confirmation(args: &NewArgs) -> Confirmation {
    if args.yes {
        Confirmation::AssumeYes
    } else if args.no_run {
        Confirmation::AssumeNo
    } else {
        Confirmation::Ask
    }
}

fn dry_run(
    scaffold: &ScaffoldService,
    args: &NewArgs,
    variant: TemplateVariant,
    output: &OutputManager,
) -> CliResult<()> {
    let structure = scaffold.plan(&args.name, &args.output, variant)?;

    if output.is_json() {
        output.json(&plan_json(&structure, variant))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' from the {variant} template",
        structure.root().display()
    ))?;
    output.header("Directories:")?;
    for dir in structure.directories() {
        output.print(&format!("  {}/", dir.path.display()))?;
    }
    output.header("Files:")?;
    for file in structure.files() {
        output.print(&format!("  {} ({} bytes)", file.path.display(), file.size()))?;
    }
    Ok(())
}

fn plan_json(structure: &ProjectStructure, variant: TemplateVariant) -> serde_json::Value {
    json!({
        "dry_run": true,
        "root": structure.root().display().to_string(),
        "variant": variant.as_str(),
        "directories": structure
            .directories()
            .map(|d| d.path.display().to_string())
            .collect::<Vec<_>>(),
        "files": structure
            .files()
            .map(|f| f.path.display().to_string())
            .collect::<Vec<_>>(),
    })
}

fn report_json(report: &OrchestratorReport) -> serde_json::Value {
    json!({
        "project": report.scaffold.project_name.as_str(),
        "root": report.scaffold.project_root.display().to_string(),
        "variant": report.scaffold.variant.as_str(),
        "go_version": report.scaffold.version.to_string(),
        "directories": report.scaffold.directories,
        "files": report.scaffold.files,
        "ran": report.ran,
        "docs_warning": report.docs_warning,
    })
}
