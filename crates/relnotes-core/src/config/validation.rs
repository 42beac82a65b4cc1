//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Output formats the renderer understands
pub const VALID_FORMATS: &[&str] = &["html", "markdown", "md"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_source(config)?;
    validate_render(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_source(config: &Config) -> Result<()> {
    if config.source.location.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "source.location".to_string(),
            message: "location cannot be empty".to_string(),
        }
        .into());
    }

    config.source.parsed_base_url()?;

    Ok(())
}

fn validate_render(config: &Config) -> Result<()> {
    if !VALID_FORMATS.contains(&config.render.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "render.format".to_string(),
            message: format!("must be one of: {}", VALID_FORMATS.join(", ")),
        }
        .into());
    }

    Ok(())
}
