// src/config/validate.rs

use anyhow::{Result, anyhow};

use crate::config::model::ConfigFile;

/// Run semantic validation against a loaded configuration.
///
/// Serde has already applied defaults and rejected unknown enum values;
/// this checks the ranges serde cannot express. A failure here aborts
/// startup before any pipeline runs.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow!("[server].port must be non-zero"));
    }

    if cfg.images.jpeg_quality == 0 || cfg.images.jpeg_quality > 100 {
        return Err(anyhow!(
            "[images].jpeg_quality must be in 1..=100 (got {})",
            cfg.images.jpeg_quality
        ));
    }

    if cfg.html.prefix.trim().is_empty() {
        return Err(anyhow!("[html].prefix must not be empty"));
    }

    Ok(())
}
