//! mockgrade configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::OutputFormat;

/// Top-level mockgrade configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockgradeConfig {
    /// Simulated grading latency in milliseconds. Zero disables it.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Format used when the CLI is not given one.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Directory for records written without an explicit path.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_delay_ms() -> u64 {
    700
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./mockgrade-results")
}

impl Default for MockgradeConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            default_format: OutputFormat::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl MockgradeConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `mockgrade.toml` in the current directory
/// 2. `~/.config/mockgrade/config.toml`
///
/// Environment variable override: `MOCKGRADE_DELAY_MS`.
pub fn load_config() -> Result<MockgradeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<MockgradeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mockgrade.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MockgradeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MockgradeConfig::default(),
    };

    if let Ok(raw) = std::env::var("MOCKGRADE_DELAY_MS") {
        config.delay_ms = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid MOCKGRADE_DELAY_MS: {raw}"))?;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mockgrade"))
}
