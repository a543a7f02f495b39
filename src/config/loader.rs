// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Load the config at `path` if the file exists, otherwise fall back to the
/// built-in defaults. A missing file is not an error because the harness is
/// fully usable with no config at all.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ConfigFile::default());
    }
    load_from_path(path)
}

/// Load (or default) a configuration and run basic validation.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_or_default(path)?;
    validate_config(&config)?;
    Ok(config)
}
