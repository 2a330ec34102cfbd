//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DECLGEN_` prefix, `__` between sections,
//!    e.g. `DECLGEN_GENERATOR__INTERFACES=4`
//! 3. The file passed with `--config`
//! 4. `./.declgen.toml`
//! 5. `~/.declgen.toml`
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// File name looked up in the home and current directories.
pub const CONFIG_FILE_NAME: &str = ".declgen.toml";

const ENV_PREFIX: &str = "DECLGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation defaults.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Interface count used when `--interfaces` is absent.
    pub interfaces: i32,
    /// URL hashed into declaration ids when `--url` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose templates replace the built-in ones by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interfaces: 3,
            id_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// Missing home/local files are skipped; a `config_file` given explicitly
    /// must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::load_from(home_config_path().as_deref(), &cwd, config_file.map(PathBuf::as_path))
    }

    fn load_from(home: Option<&Path>, cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?,
        );

        if let Some(home) = home {
            builder = builder.add_source(File::from(home.join(CONFIG_FILE_NAME)).required(false));
        }
        builder = builder.add_source(File::from(cwd.join(CONFIG_FILE_NAME)).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// `~/.declgen.toml`, falling back to `.declgen.toml` in the current
    /// directory when no home directory can be determined.
    pub fn config_path() -> PathBuf {
        home_config_path()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }
}

fn home_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_files() {
        let home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(Some(home.path()), cwd.path(), None).unwrap();
        assert_eq!(cfg.generator.interfaces, 3);
        assert!(cfg.templates.local_path.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn local_file_overrides_home_file() {
        let home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        fs::write(
            home.path().join(CONFIG_FILE_NAME),
            "[generator]\ninterfaces = 5\nid_url = \"https://home\"\n",
        )
        .unwrap();
        fs::write(
            cwd.path().join(CONFIG_FILE_NAME),
            "[generator]\ninterfaces = 2\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(home.path()), cwd.path(), None).unwrap();

        assert_eq!(cfg.generator.interfaces, 2);
        assert_eq!(cfg.generator.id_url.as_deref(), Some("https://home"));
    }

    #[test]
    fn explicit_file_must_exist() {
        let cwd = TempDir::new().unwrap();
        let missing = cwd.path().join("missing.toml");
        assert!(AppConfig::load_from(None, cwd.path(), Some(&missing)).is_err());
    }

    #[test]
    fn explicit_file_sets_template_path() {
        let cwd = TempDir::new().unwrap();
        let explicit = cwd.path().join("custom.toml");
        fs::write(&explicit, "[templates]\nlocal_path = \"/srv/templates\"\n").unwrap();

        let cfg = AppConfig::load_from(None, cwd.path(), Some(&explicit)).unwrap();

        assert_eq!(
            cfg.templates.local_path.as_deref(),
            Some(Path::new("/srv/templates"))
        );
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("interfaces = 3"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
