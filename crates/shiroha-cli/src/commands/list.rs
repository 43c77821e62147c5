//! Implementation of the `shiroha list` command.

use serde_json::json;

use shiroha_core::{application::TemplateInfo, domain::PlatformCatalog};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::scaffold_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let templates = scaffold_service(&config)?.list_templates()?;
    let catalog = PlatformCatalog::builtin();
    let show_templates = !args.platforms;
    let show_platforms = !args.templates;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if show_templates {
                output.header("Templates:")?;
                for t in &templates {
                    output.print(&template_row(t))?;
                }
            }
            if show_templates && show_platforms {
                output.print("")?;
            }
            if show_platforms {
                output.header("Build platforms:")?;
                for p in catalog.iter() {
                    output.print(&format!("  {}. {:<14} {}", p.selector, p.to_string(), p.description))?;
                }
            }
        }

        ListFormat::List => {
            if show_templates {
                for t in &templates {
                    output.print(&t.name)?;
                }
            }
            if show_platforms {
                for p in catalog.iter() {
                    output.print(&p.to_string())?;
                }
            }
        }

        ListFormat::Json => {
            let mut doc = serde_json::Map::new();
            if show_templates {
                doc.insert("templates".into(), templates_json(&templates));
            }
            if show_platforms {
                doc.insert("platforms".into(), platforms_json(&catalog));
            }
            output.json(&serde_json::Value::Object(doc))?;
        }
    }

    Ok(())
}

fn template_row(t: &TemplateInfo) -> String {
    let docs = if t.api_docs { ", swagger docs" } else { "" };
    format!(
        "  {:<8} {} ({} dirs, {} files{docs})",
        t.name, t.description, t.directories, t.files
    )
}

fn templates_json(templates: &[TemplateInfo]) -> serde_json::Value {
    templates
        .iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.description,
                "directories": t.directories,
                "files": t.files,
                "api_docs": t.api_docs,
            })
        })
        .collect()
}

fn platforms_json(catalog: &PlatformCatalog) -> serde_json::Value {
    catalog
        .iter()
        .map(|p| serde_json::to_value(p).unwrap_or(serde_json::Value::Null))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platforms_serialise_in_menu_order() {
        let value = platforms_json(&PlatformCatalog::builtin());
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["selector"], "1");
        assert_eq!(rows[4]["os"], "windows");
    }

    #[test]
    fn template_row_flags_api_docs() {
        let info = TemplateInfo {
            name: "swagger".into(),
            description: "Gin with Swagger".into(),
            directories: 15,
            files: 7,
            api_docs: true,
        };
        let row = template_row(&info);
        assert!(row.contains("swagger docs"));
        assert!(row.contains("15 dirs"));
    }
}
