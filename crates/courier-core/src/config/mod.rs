mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::CourierError;
use defaults::*;

/// Top-level Courier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub courier: CourierConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Also write logs to this file. Unset = stderr only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// How batches of updates are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Skip batch entries that are not objects instead of aborting.
    #[serde(default = "default_true")]
    pub skip_undecodable: bool,
    /// Accept the `{"ok": true, "result": [...]}` response wrapper.
    #[serde(default = "default_true")]
    pub unwrap_response: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            skip_undecodable: true,
            unwrap_response: true,
        }
    }
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
pub fn load(path: &str) -> Result<Config, CourierError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| CourierError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, CourierError> {
    toml::from_str(content)
        .map_err(|e| CourierError::Config(format!("failed to parse config: {e}")))
}

/// Render configuration back to TOML.
pub fn render(config: &Config) -> Result<String, CourierError> {
    toml::to_string_pretty(config)
        .map_err(|e| CourierError::Config(format!("failed to render config: {e}")))
}
