//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI positionals (handled at the call-site, not here)
//! 2. `SERVGEN_*` environment variables
//! 3. Config file (`--config`, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed fallback for the services directory (first positional).
pub const DEFAULT_SERVICES_DIR: &str = "../src/services";

/// Fixed fallback for the service name (second positional).
pub const DEFAULT_SERVICE_NAME: &str = "Demo";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values applied when a positional argument is omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub services_dir: String,
    pub service_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                services_dir: DEFAULT_SERVICES_DIR.into(),
                service_name: DEFAULT_SERVICE_NAME.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from built-in defaults.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.  `SERVGEN_DEFAULTS__SERVICE_NAME`-style environment
    /// variables override file values.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let settings = config::Config::builder()
            .set_default("defaults.services_dir", DEFAULT_SERVICES_DIR)?
            .set_default("defaults.service_name", DEFAULT_SERVICE_NAME)?
            .set_default("output.no_color", false)?
            .add_source(config::File::from(path).required(config_file.is_some()))
            .add_source(config::Environment::with_prefix("SERVGEN").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.servgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cosecruz", "servgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".servgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults_match_the_documented_table() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.services_dir, "../src/services");
        assert_eq!(cfg.defaults.service_name, "Demo");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.defaults.service_name, "Demo");
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/servgen.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("servgen.toml");
        std::fs::write(
            &file,
            "[defaults]\nservices_dir = \"svc\"\nservice_name = \"Acme\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file)).unwrap();
        assert_eq!(cfg.defaults.services_dir, "svc");
        assert_eq!(cfg.defaults.service_name, "Acme");
        // Untouched section keeps its default.
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
