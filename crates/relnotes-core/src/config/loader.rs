//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, RelnotesError, Result};

use super::defaults::{config_file_names, default_config_toml, DEFAULT_CONFIG_TOML};
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// Each level checks `<dir>/<name>` then `<dir>/.github/<name>`; the first
/// match wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults.
///
/// Only a missing file falls back to defaults; a file that exists but
/// fails to parse or validate is an error. Relative filesystem locations in
/// a loaded file are anchored to the directory that owns it.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match load_config_from_dir(dir) {
        Ok((mut config, path)) => {
            config.source.anchor_to(&settings_root(&path));
            Ok((config, Some(path)))
        }
        Err(RelnotesError::Config(ConfigError::NotFound(_))) => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
        Err(e) => Err(e),
    }
}

/// Directory a settings file belongs to: its parent, or the project root
/// when the file sits in `.github/`.
pub fn settings_root(config_path: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or_else(|| Path::new(""));
    match parent.file_name() {
        Some(name) if name == ".github" => parent
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| parent.to_path_buf()),
        _ => parent.to_path_buf(),
    }
}

/// Write the default configuration into `dir`, returning the new file path
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_TOML);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    std::fs::write(&path, default_config_toml()).map_err(ConfigError::Io)?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}
