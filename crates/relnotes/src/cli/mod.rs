//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use relnotes_core::config::{load_config_or_default, validate_config};
use relnotes_core::{Config, ConfigAccessor};

use commands::{AuthorsCommand, InitCommand, RenderCommand, TagsCommand};

/// relnotes - render version notes and read the shared tag/author list
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Path or URL of the configuration resource (overrides settings)
    #[arg(long, global = true, env = "RELNOTES_SOURCE", value_name = "LOCATION")]
    pub source: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the change tags known to the configuration resource
    Tags(TagsCommand),

    /// List the authors known to the configuration resource
    Authors(AuthorsCommand),

    /// Render version notes from a file
    Render(RenderCommand),

    /// Write a default relnotes.toml
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Tags(ref cmd) => cmd.execute(&self),
            Commands::Authors(ref cmd) => cmd.execute(&self),
            Commands::Render(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load settings from the working directory, applying flag overrides
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let cwd = std::env::current_dir()?;
        let (mut config, path) = load_config_or_default(&cwd)?;
        debug!(config_path = ?path, "settings resolved");

        if let Some(location) = &self.source {
            config.source.location = location.clone();
            validate_config(&config)?;
        }

        Ok(config)
    }

    /// Build an accessor for the configured resource
    pub fn accessor(&self, config: &Config) -> anyhow::Result<ConfigAccessor> {
        let source = config.source.to_source()?;
        debug!(source = %source, "configuration resource located");
        Ok(ConfigAccessor::new(source))
    }
}
