//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the values derived from
//! it ([`ToolchainCommands`], the default [`TemplateVariant`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SHIROHA_*` environment variables (`SHIROHA_TOOLCHAIN__PROGRAM=go1.22.4`)
//! 3. `./.shiroha.toml`
//! 4. `--config FILE`, or the platform config file when no flag is given
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use shiroha_core::domain::{TemplateVariant, ToolchainCommands};

/// Project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".shiroha.toml";

const ENV_PREFIX: &str = "SHIROHA";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// The Go toolchain.
    pub toolchain: ToolConfig,
    /// The Swagger generator.
    pub docs: ToolConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// `basic` or `swagger`.
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Program looked up on `PATH` (or an absolute path).
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let commands = ToolchainCommands::default();
        Self {
            defaults: Defaults {
                template: TemplateVariant::default().to_string(),
            },
            toolchain: ToolConfig {
                program: commands.go,
            },
            docs: ToolConfig {
                program: commands.swag,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the platform and local files
    /// are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("serialising built-in defaults")?;

        let primary = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let merged = Config::builder()
            .add_source(defaults)
            .add_source(primary)
            .add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("reading configuration sources")?;

        let config: Self = merged
            .try_deserialize()
            .context("configuration has an unexpected shape")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the CLI cannot use.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.default_variant()?;
        if self.toolchain.program.trim().is_empty() {
            anyhow::bail!("toolchain.program must not be empty");
        }
        if self.docs.program.trim().is_empty() {
            anyhow::bail!("docs.program must not be empty");
        }
        Ok(())
    }

    /// `defaults.template` as a variant.
    pub fn default_variant(&self) -> anyhow::Result<TemplateVariant> {
        self.defaults
            .template
            .parse()
            .with_context(|| format!("defaults.template = '{}'", self.defaults.template))
    }

    /// Program names handed to the core services.
    pub fn toolchain_commands(&self) -> ToolchainCommands {
        ToolchainCommands::new(&self.toolchain.program, &self.docs.program)
    }

    /// Look up a dotted key such as `toolchain.program`.
    ///
    /// Strings are returned without quotes; other values as JSON.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&root, |node, segment| node.get(segment))?;
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// The whole configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serialising configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shiroha.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "shiroha", "shiroha")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_match_the_go_toolchain() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_variant().unwrap(), TemplateVariant::Basic);
        assert_eq!(cfg.toolchain_commands(), ToolchainCommands::default());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[defaults]\ntemplate = \"swagger\"\n\n[toolchain]\nprogram = \"go1.22.4\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.default_variant().unwrap(), TemplateVariant::Swagger);
        assert_eq!(cfg.toolchain.program, "go1.22.4");
        // untouched keys keep their defaults
        assert_eq!(cfg.docs.program, "swag");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/shiroha.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn unknown_template_fails_validation() {
        let mut cfg = AppConfig::default();
        cfg.defaults.template = "react".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn get_walks_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("toolchain.program").as_deref(), Some("go"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("toolchain.nope"), None);
        assert_eq!(cfg.get(""), None);
    }

    #[test]
    fn toml_lists_every_section() {
        let rendered = AppConfig::default().to_toml().unwrap();
        for section in ["[defaults]", "[toolchain]", "[docs]", "[output]"] {
            assert!(rendered.contains(section), "missing {section}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
