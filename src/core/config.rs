//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::filter::Region;
use crate::core::format::NumberLocale;
use crate::core::theme::Theme;
use crate::directory::rest::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub region: Option<Region>,
    pub number_locale: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub base_url: Option<String>,
}

pub const DEFAULT_NUMBER_LOCALE: &str = "de-DE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub region: Region,
    pub locale: NumberLocale,
    pub directory_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Atlas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults, then this file, then env vars, then CLI flags.

# [general]
# theme = "dark"                 # "light" or "dark"
# region = "all"                 # initial region filter
# number_locale = "de-DE"        # digit grouping: "de-DE" or "en-US"

# [directory]
# base_url = "https://restcountries.com/v3.1"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` and `cli_region` are from CLI flags (None = not specified).
pub fn resolve(
    config: &AtlasConfig,
    cli_theme: Option<Theme>,
    cli_region: Option<Region>,
) -> ResolvedConfig {
    use clap::ValueEnum;

    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| {
            std::env::var("ATLAS_THEME")
                .ok()
                .and_then(|s| Theme::from_str(&s, true).ok())
        })
        .or(config.general.theme)
        .unwrap_or_default();

    // Region: CLI → env → config → default
    let region = cli_region
        .or_else(|| {
            std::env::var("ATLAS_REGION")
                .ok()
                .and_then(|s| Region::from_str(&s, true).ok())
        })
        .or(config.general.region)
        .unwrap_or_default();

    // Number locale: config → default
    let locale_tag = config
        .general
        .number_locale
        .clone()
        .unwrap_or_else(|| DEFAULT_NUMBER_LOCALE.to_string());

    // Directory base URL: env → config → default
    let directory_base_url = std::env::var("ATLAS_DIRECTORY_URL")
        .ok()
        .or_else(|| config.directory.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        theme,
        region,
        locale: NumberLocale::from_tag(&locale_tag),
        directory_base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AtlasConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.directory.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AtlasConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.region, Region::All);
        assert_eq!(resolved.locale, NumberLocale::De);
        assert_eq!(resolved.directory_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AtlasConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                region: Some(Region::Europe),
                number_locale: Some("en-US".to_string()),
            },
            directory: DirectoryConfig {
                base_url: Some("http://localhost:9000/v3.1".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.region, Region::Europe);
        assert_eq!(resolved.locale, NumberLocale::En);
        assert_eq!(resolved.directory_base_url, "http://localhost:9000/v3.1");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = AtlasConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                region: Some(Region::Europe),
                number_locale: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Theme::Dark), Some(Region::Asia));
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.region, Region::Asia);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
theme = "light"
region = "americas"
number_locale = "en-US"

[directory]
base_url = "http://localhost:9000/v3.1"
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Light));
        assert_eq!(config.general.region, Some(Region::Americas));
        assert_eq!(config.general.number_locale.as_deref(), Some("en-US"));
        assert_eq!(
            config.directory.base_url.as_deref(),
            Some("http://localhost:9000/v3.1")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
theme = "light"
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Light));
        assert!(config.general.region.is_none());
        assert!(config.directory.base_url.is_none());
    }
}
