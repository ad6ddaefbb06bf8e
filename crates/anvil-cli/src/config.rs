//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command handlers)
//! 2. `ANVIL__<SECTION>__<KEY>` environment variables (`.env` is loaded first)
//! 3. `--config FILE`, or else `./anvil.toml` over the platform config file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anvil_adapters::metadata::{DEFAULT_METADATA_URL, DEFAULT_TIMEOUT_SECS};
use anvil_core::domain::{ApiStyle, DbDriver};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

pub const LOCAL_CONFIG_FILE: &str = "anvil.toml";
pub const ENV_PREFIX: &str = "ANVIL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a question is skipped.
    pub defaults: Defaults,
    pub metadata: MetadataConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub project_name: String,
    pub group_id: String,
    /// `None` takes the resolved catalog default.
    pub java_version: Option<String>,
    pub boot_version: Option<String>,
    pub jpa: bool,
    pub db_drivers: Vec<DbDriver>,
    pub lombok: bool,
    pub mapstruct: bool,
    pub api_styles: Vec<ApiStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Never contact the metadata service.
    pub offline: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            metadata: MetadataConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: "my-project".into(),
            group_id: "com.example".into(),
            java_version: None,
            boot_version: None,
            jpa: true,
            db_drivers: Vec::new(),
            lombok: true,
            mapstruct: true,
            api_styles: vec![ApiStyle::Rest],
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_METADATA_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// An explicit `config_file` must exist; the implicit files are optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                if let Some(global) = Self::global_path() {
                    builder = builder.add_source(toml_file(&global).required(false));
                }
                builder = builder.add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("defaults.db_drivers")
            .with_list_parse_key("defaults.api_styles")
            .try_parsing(true);

        let config = builder.add_source(env).build()?.try_deserialize()?;
        Ok(config)
    }

    /// Platform config file, e.g. `~/.config/anvil/config.toml` on Linux.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "anvil", "anvil")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Serialise for `init` and `config list`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Look up one dotted key, e.g. `metadata.url`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = serde_json::to_value(self).ok()?;
        let found = key
            .split('.')
            .try_fold(&value, |node, segment| node.get(segment))?;
        Some(match found {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_interactive_answers() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_name, "my-project");
        assert_eq!(cfg.defaults.group_id, "com.example");
        assert!(cfg.defaults.jpa && cfg.defaults.lombok && cfg.defaults.mapstruct);
        assert!(cfg.defaults.db_drivers.is_empty());
        assert_eq!(cfg.defaults.api_styles, vec![ApiStyle::Rest]);
        assert_eq!(cfg.metadata.timeout_secs, 5);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("anvil.toml");
        fs::write(
            &path,
            r#"
[defaults]
group_id = "org.acme"
jpa = false
db_drivers = ["postgresql", "h2"]
api_styles = ["graphql"]

[metadata]
offline = true
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.group_id, "org.acme");
        assert!(!cfg.defaults.jpa);
        assert_eq!(cfg.defaults.db_drivers, vec![DbDriver::PostgreSql, DbDriver::H2]);
        assert_eq!(cfg.defaults.api_styles, vec![ApiStyle::GraphQl]);
        assert!(cfg.metadata.offline);
        // untouched keys keep their defaults
        assert_eq!(cfg.defaults.project_name, "my-project");
        assert!(cfg.defaults.lombok);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&tmp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn toml_round_trip_is_loadable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("anvil.toml");
        fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults, Defaults::default());
    }

    #[test]
    fn get_reads_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.group_id").as_deref(), Some("com.example"));
        assert_eq!(cfg.get("defaults.jpa").as_deref(), Some("true"));
        assert_eq!(cfg.get("defaults.java_version").as_deref(), Some(""));
        assert_eq!(cfg.get("output.format").as_deref(), Some("auto"));
        assert!(cfg.get("defaults.nope").is_none());
    }
}
