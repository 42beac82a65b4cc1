//! Access to the shared `config.json` resource
//!
//! The resource is a JSON object with optional `tags` and `authors` lists.
//! Every read goes back to the source: nothing is cached between calls, and
//! each call runs fetch, parse, extract in that order.

use std::fmt;
use std::path::PathBuf;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{Result, SourceError};

/// Location used when nothing else is configured
pub const DEFAULT_CONFIG_LOCATION: &str = "config.json";

/// Field holding the known change tags
pub const TAGS_FIELD: &str = "tags";

/// Field holding the known authors
pub const AUTHORS_FIELD: &str = "authors";

/// Where the configuration resource is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Fetched with an HTTP GET
    Http(Url),
    /// Read from the local filesystem
    File(PathBuf),
}

impl ConfigSource {
    /// Interpret a location string.
    ///
    /// `http://` and `https://` locations become [`ConfigSource::Http`],
    /// `file://` URLs and bare paths become [`ConfigSource::File`].
    pub fn parse(location: &str) -> Result<Self> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(invalid_location(location, "location is empty"));
        }

        if is_url_like(trimmed) {
            let url = Url::parse(trimmed).map_err(|e| invalid_location(location, e.to_string()))?;
            return Self::from_url(url, location);
        }

        Ok(Self::File(PathBuf::from(trimmed)))
    }

    /// Interpret a location relative to an optional base URL, the way a
    /// page resolves `config.json` against its own address.
    pub fn resolve(location: &str, base_url: Option<&Url>) -> Result<Self> {
        match base_url {
            Some(base) if !is_url_like(location.trim()) => {
                let joined = base
                    .join(location.trim())
                    .map_err(|e| invalid_location(location, e.to_string()))?;
                Self::from_url(joined, location)
            }
            _ => Self::parse(location),
        }
    }

    fn from_url(url: Url, location: &str) -> Result<Self> {
        match url.scheme() {
            "http" | "https" => Ok(Self::Http(url)),
            "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|_| invalid_location(location, "file URL has no local path")),
            other => Err(invalid_location(
                location,
                format!("unsupported scheme '{}'", other),
            )),
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_CONFIG_LOCATION))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_url_like(location: &str) -> bool {
    location.contains("://")
}

fn invalid_location(location: &str, reason: impl Into<String>) -> crate::error::RelnotesError {
    SourceError::InvalidLocation {
        location: location.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Reads named lists from the configuration resource.
///
/// Holds no document state; each operation issues its own request.
#[derive(Debug, Clone)]
pub struct ConfigAccessor {
    source: ConfigSource,
    client: Client,
}

impl ConfigAccessor {
    /// Create an accessor for the given source
    pub fn new(source: ConfigSource) -> Self {
        Self {
            source,
            client: Client::new(),
        }
    }

    /// Known change tags, or an empty list when the document has none
    pub async fn change_tags(&self) -> Result<Vec<String>> {
        self.list_field(TAGS_FIELD).await
    }

    /// Known authors, or an empty list when the document has none
    pub async fn authors(&self) -> Result<Vec<String>> {
        self.list_field(AUTHORS_FIELD).await
    }

    /// Fetch the document and extract `field` as a list of strings.
    ///
    /// An absent or falsy field yields an empty list. Fetch and parse
    /// failures are returned unchanged.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn list_field(&self, field: &str) -> Result<Vec<String>> {
        let document = self.fetch_document().await?;
        let values = extract_list(&document, field).map_err(|source| SourceError::InvalidField {
            location: self.source.to_string(),
            field: field.to_string(),
            source,
        })?;
        debug!(field, count = values.len(), "list field extracted");
        Ok(values)
    }

    /// Fetch the document and return `field` exactly as it appears
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn raw_field(&self, field: &str) -> Result<Option<Value>> {
        let document = self.fetch_document().await?;
        Ok(document.get(field).cloned())
    }

    /// Fetch and parse the whole document.
    ///
    /// A body that parses to `null` is rejected: it has no fields to read.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn fetch_document(&self) -> Result<Value> {
        info!("fetching configuration resource");
        let body = self.fetch_bytes().await?;
        let document: Value =
            serde_json::from_slice(&body).map_err(|source| SourceError::Parse {
                location: self.source.to_string(),
                source,
            })?;
        if document.is_null() {
            return Err(SourceError::NullDocument {
                location: self.source.to_string(),
            }
            .into());
        }
        debug!(bytes = body.len(), "configuration resource parsed");
        Ok(document)
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>> {
        match &self.source {
            ConfigSource::Http(url) => {
                let location = url.to_string();
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|source| SourceError::Fetch {
                        location: location.clone(),
                        source,
                    })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(SourceError::Status {
                        location,
                        status: status.as_u16(),
                    }
                    .into());
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|source| SourceError::Fetch { location, source })?;
                Ok(bytes.to_vec())
            }
            ConfigSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| SourceError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Ok(bytes)
            }
        }
    }
}

/// Extract `field` from a parsed document as a list of strings.
///
/// Absent fields, non-null scalar or array documents and falsy values
/// (`null`, `false`, `0`, `""`) all produce an empty list. A `null`
/// document is rejected by [`ConfigAccessor::fetch_document`] before this
/// runs. Element order is kept.
pub fn extract_list(document: &Value, field: &str) -> serde_json::Result<Vec<String>> {
    match document.get(field) {
        None => Ok(Vec::new()),
        Some(value) if is_falsy(value) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
