pub mod compare;
pub mod grade;
pub mod init;
pub mod session;

use std::path::Path;

use anyhow::Result;

use mockgrade_core::config::{load_config, load_config_from, MockgradeConfig};
use mockgrade_core::model::OutputFormat;

/// Load config and apply command-line overrides shared by grading commands.
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    delay_ms: Option<u64>,
) -> Result<MockgradeConfig> {
    let mut config = match config_path {
        Some(path) => load_config_from(Some(path))?,
        None => load_config()?,
    };
    if let Some(ms) = delay_ms {
        config.delay_ms = ms;
    }
    Ok(config)
}

pub(crate) fn resolve_format(
    format: Option<&str>,
    config: &MockgradeConfig,
) -> Result<OutputFormat> {
    match format {
        Some(f) => f.parse().map_err(anyhow::Error::msg),
        None => Ok(config.default_format),
    }
}
