// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load the configuration from `path`, falling back to defaults when the
/// file does not exist.
///
/// A present-but-malformed file is an error; only absence falls back. The
/// result is semantically validated either way, so callers always get a
/// usable configuration or a startup failure.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    let config = if path.is_file() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file at {path:?}"))?;
        toml::from_str(&contents)
            .with_context(|| format!("parsing TOML config from {path:?}"))?
    } else {
        debug!("no config file at {:?}, using defaults", path);
        ConfigFile::default()
    };

    validate_config(&config)?;
    Ok(config)
}

/// Default config path: `Sitepipe.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Sitepipe.toml")
}
