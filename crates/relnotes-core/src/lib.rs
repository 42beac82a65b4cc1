//! relnotes core - configuration access for release-note pages
//!
//! This crate provides the error types, the tool settings file, and the
//! [`ConfigAccessor`] that reads the shared `config.json` resource listing
//! known change tags and authors.

pub mod accessor;
pub mod config;
pub mod error;

pub use accessor::{ConfigAccessor, ConfigSource, DEFAULT_CONFIG_LOCATION};
pub use config::{Config, RenderConfig, SourceConfig};
pub use error::{ConfigError, NotesError, RelnotesError, Result, SourceError};
