use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::I18nError;

/// Top-level lexicon configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where language files live and which language to fall back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory scanned for `<base_name>_<lang>.properties` files.
    #[serde(default = "default_dir")]
    pub dir: String,
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Served when the requested language has no file.
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            base_name: default_base_name(),
            default_lang: default_lang(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_dir() -> String {
    "locales".to_string()
}
fn default_base_name() -> String {
    "messages".to_string()
}
fn default_lang() -> String {
    "en".to_string()
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, I18nError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| I18nError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| I18nError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
