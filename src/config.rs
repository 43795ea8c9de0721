//! Site configuration.
//!
//! Stored as TOML at `~/.config/folio/config.toml` (or XDG equivalent). A
//! missing file yields the defaults; `--config PATH` points somewhere else.
//!
//! # Example Configuration
//!
//! ```toml
//! catalog = "~/portfolio/catalog.toml"
//! route_overlay = true
//! overlay_routes = "~/portfolio/routes.toml"
//! log_dir = "/tmp/folio-logs"
//!
//! [export]
//! include_scripts = true
//! title = "Shahab Uddin | Graphic Designer"
//! ```
//!
//! `FOLIO_ROUTE_OVERLAY` and `FOLIO_CATALOG` override the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_ROUTE_OVERLAY: &str = "FOLIO_ROUTE_OVERLAY";
pub const ENV_CATALOG: &str = "FOLIO_CATALOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Catalog file (TOML or JSON). Built-in content when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Enables the extra-routes provider.
    #[serde(default)]
    pub route_overlay: bool,

    /// Extra-routes file, read only when `route_overlay` is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_routes: Option<PathBuf>,

    /// Directory for the interactive page's log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportSettings {
    #[serde(default = "default_true")]
    pub include_scripts: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_scripts: true,
            title: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl SiteConfig {
    /// Load configuration from the default location.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path.
    ///
    /// - Primary: `$XDG_CONFIG_HOME/folio/config.toml`
    /// - Fallback: platform config dir (e.g. `~/.config/folio/config.toml`)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config).join("folio").join("config.toml"));
        }

        dirs::config_dir()
            .map(|p| p.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(title) = &self.export.title
            && title.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "export.title must not be blank".to_string(),
            ));
        }
        for (field, path) in [
            ("catalog", &self.catalog),
            ("overlay_routes", &self.overlay_routes),
            ("log_dir", &self.log_dir),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "{field} must not be an empty path"
                )));
            }
        }
        Ok(())
    }

    /// Apply `FOLIO_*` environment overrides.
    pub fn apply_env(mut self) -> Self {
        if let Ok(raw) = std::env::var(ENV_ROUTE_OVERLAY) {
            self.route_overlay = flag_enabled(&raw);
        }
        if let Ok(raw) = std::env::var(ENV_CATALOG)
            && !raw.trim().is_empty()
        {
            self.catalog = Some(expand_tilde(raw.trim()));
        }
        self
    }

    /// Log directory for the interactive page.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("folio")
                .join("logs")
        })
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .as_ref()
            .map(|p| expand_tilde(&p.to_string_lossy()))
    }

    pub fn overlay_routes_path(&self) -> Option<PathBuf> {
        self.overlay_routes
            .as_ref()
            .map(|p| expand_tilde(&p.to_string_lossy()))
    }
}

/// Only the literal `true` (any case) or `1` switch the overlay on.
pub fn flag_enabled(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("true") || raw == "1"
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
