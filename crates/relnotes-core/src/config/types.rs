//! Configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::accessor::{ConfigSource, DEFAULT_CONFIG_LOCATION};
use crate::error::{ConfigError, Result};

/// Main configuration for relnotes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the shared configuration resource lives
    pub source: SourceConfig,

    /// Rendering options
    pub render: RenderConfig,
}

/// Location of the configuration resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path or URL of the resource
    pub location: String,

    /// Base URL that relative locations are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_CONFIG_LOCATION.to_string(),
            base_url: None,
        }
    }
}

impl SourceConfig {
    /// Resolve the configured location into a [`ConfigSource`]
    pub fn to_source(&self) -> Result<ConfigSource> {
        let base = self.parsed_base_url()?;
        ConfigSource::resolve(&self.location, base.as_ref())
    }

    /// Anchor a relative filesystem location to `dir`.
    ///
    /// URLs, absolute paths and locations resolved through `base_url` are
    /// left untouched.
    pub fn anchor_to(&mut self, dir: &Path) {
        if self.base_url.is_some() {
            return;
        }
        let location = self.location.trim();
        if location.is_empty() || location.contains("://") || Path::new(location).is_absolute() {
            return;
        }
        self.location = dir.join(location).to_string_lossy().into_owned();
    }

    /// Parse `base_url`, if set
    pub fn parsed_base_url(&self) -> Result<Option<Url>> {
        let Some(raw) = self.base_url.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
            field: "source.base_url".to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(url))
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output format (html, markdown)
    pub format: String,

    /// Escape text fields before interpolating them into HTML
    pub escape_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: "html".to_string(),
            escape_html: false,
        }
    }
}
