// src/fs.rs

//! Shared filesystem helpers used by the transform units.
//!
//! All fallible operations return [`UnitError::Io`] with the offending path
//! attached, so per-unit log lines always name the file at fault.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{UnitError, UnitResult};

/// Recursively list all regular files under `dir`, sorted by path.
///
/// A missing directory yields an empty list rather than an error; units
/// treat an absent source directory as "nothing to do".
pub fn collect_files(dir: &Path) -> UnitResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    if dir.is_dir() {
        collect_into(dir, &mut files)?;
    }
    // Sort for deterministic ordering independent of readdir order.
    files.sort();
    Ok(files)
}

fn collect_into(dir: &Path, files: &mut Vec<PathBuf>) -> UnitResult {
    let entries = fs::read_dir(dir).map_err(|e| UnitError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| UnitError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_into(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Read a file to a string, with the path attached on failure.
pub fn read_to_string(path: &Path) -> UnitResult<String> {
    fs::read_to_string(path).map_err(|e| UnitError::io(path, e))
}

/// Write `contents` to `dest`, creating parent directories as needed.
pub fn write_file(dest: &Path, contents: &[u8]) -> UnitResult {
    ensure_parent(dest)?;
    fs::write(dest, contents).map_err(|e| UnitError::io(dest, e))
}

/// Copy `src` to `dest` verbatim, creating parent directories as needed.
pub fn copy_file(src: &Path, dest: &Path) -> UnitResult {
    ensure_parent(dest)?;
    fs::copy(src, dest).map_err(|e| UnitError::io(src, e))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> UnitResult {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| UnitError::io(parent, e))?;
    }
    Ok(())
}

/// Relativize `path` against `base`; falls back to the full path if `path`
/// is not under `base`.
pub fn rel_path<'a>(base: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}
