//! Application configuration for Leadbase.
//!
//! User config lives at `~/.leadbase/leadbase.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LeadbaseError, Result};
use crate::types::Settings;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "leadbase.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".leadbase";

/// Placeholder key value treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_APOLLO_API_KEY";

// ---------------------------------------------------------------------------
// Config structs (matching leadbase.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial sourcing settings applied at startup.
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Contact-enrichment gateway settings.
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
}

/// `[settings]` section — startup values for the in-process [`Settings`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_quality_level")]
    pub prospect_quality_level: String,

    #[serde(default = "default_sub_pipeline")]
    pub sub_pipeline: String,

    #[serde(default = "default_stage")]
    pub stage: String,

    #[serde(default)]
    pub industry_vertical: String,

    #[serde(default)]
    pub industry: String,

    #[serde(default)]
    pub sourcing_analyst: String,

    #[serde(default)]
    pub investment_cycle: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            prospect_quality_level: default_quality_level(),
            sub_pipeline: default_sub_pipeline(),
            stage: default_stage(),
            industry_vertical: String::new(),
            industry: String::new(),
            sourcing_analyst: String::new(),
            investment_cycle: String::new(),
        }
    }
}

fn default_quality_level() -> String {
    "Prospect".into()
}
fn default_sub_pipeline() -> String {
    "HV STEM".into()
}
fn default_stage() -> String {
    "1. Source".into()
}

impl From<&SettingsConfig> for Settings {
    fn from(config: &SettingsConfig) -> Self {
        Self {
            prospect_quality_level: config.prospect_quality_level.clone(),
            sub_pipeline: config.sub_pipeline.clone(),
            stage: config.stage.clone(),
            industry_vertical: config.industry_vertical.clone(),
            industry: config.industry.clone(),
            sourcing_analyst: config.sourcing_analyst.clone(),
            investment_cycle: config.investment_cycle.clone(),
        }
    }
}

/// `[enrichment]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Name of the env var holding the API key (never store the key itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_api_key_env() -> String {
    "APOLLO_API_KEY".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.leadbase/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LeadbaseError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.leadbase/leadbase.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LeadbaseError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| LeadbaseError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| LeadbaseError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| LeadbaseError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| LeadbaseError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Write the given config to `~/.leadbase/leadbase.toml`, creating the
/// directory if needed. Returns the path written.
pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| LeadbaseError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content =
        toml::to_string_pretty(config).map_err(|e| LeadbaseError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| LeadbaseError::io(&path, e))?;
    tracing::debug!(?path, "config saved");

    Ok(path)
}

/// Resolve the enrichment API key from the configured env var.
///
/// Returns `None` when the variable is unset, empty, or still holds the
/// placeholder value — the gateway then uses synthetic addresses only.
pub fn resolve_api_key(config: &AppConfig) -> Option<String> {
    match std::env::var(&config.enrichment.api_key_env) {
        Ok(val) if !val.is_empty() && val != PLACEHOLDER_API_KEY => Some(val),
        _ => None,
    }
}
