// src/units/clean.rs

//! Clean unit: delete every entry directly under the output root.
//!
//! The output tree is fully regenerable from the sources, so this is always
//! safe. An absent output root is a no-op, not an error.

use std::fs as std_fs;

use tracing::{debug, info};

use crate::errors::{UnitError, UnitResult};
use crate::units::BuildContext;

pub fn run(ctx: &BuildContext) -> UnitResult {
    let public = ctx.paths.public_dir();
    if !public.exists() {
        debug!(unit = "clean", root = ?public, "output root absent, nothing to clean");
        return Ok(());
    }

    let mut removed = 0usize;
    let entries = std_fs::read_dir(&public).map_err(|e| UnitError::io(&public, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| UnitError::io(&public, e))?;
        let path = entry.path();
        if path.is_dir() {
            std_fs::remove_dir_all(&path).map_err(|e| UnitError::io(&path, e))?;
        } else {
            std_fs::remove_file(&path).map_err(|e| UnitError::io(&path, e))?;
        }
        removed += 1;
    }

    info!(unit = "clean", root = ?public, removed, "output root cleaned");
    Ok(())
}
