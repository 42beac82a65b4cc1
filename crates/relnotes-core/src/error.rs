//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Settings-file errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration-resource errors (fetch, parse, field shape)
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Release-note file errors
    #[error(transparent)]
    Notes(#[from] NotesError),
}

/// Settings-file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Settings file already exists
    #[error("Configuration file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading the shared configuration resource
#[derive(Debug, Error)]
pub enum SourceError {
    /// Location could not be interpreted
    #[error("Invalid configuration location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("Failed to fetch {location}")]
    Fetch {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Fetching {location} returned HTTP {status}")]
    Status { location: String, status: u16 },

    /// Local file could not be read
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Body was not valid JSON
    #[error("Configuration at {location} is not valid JSON")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Document parsed to `null`, so it has no fields to read
    #[error("Configuration at {location} is null")]
    NullDocument { location: String },

    /// Field present but not a list of strings
    #[error("Field '{field}' in {location} is not a list of strings")]
    InvalidField {
        location: String,
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors reading release-note input files
#[derive(Debug, Error)]
pub enum NotesError {
    /// File extension is not a supported format
    #[error("Unsupported notes file format: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    /// File contents could not be parsed
    #[error("Failed to parse notes file {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Requested output format has no renderer
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// IO error
    #[error("IO error reading notes: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Whether the failure happened before a document was obtained
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Status { .. } | Self::Read { .. }
        )
    }
}
