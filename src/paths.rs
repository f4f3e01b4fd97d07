// src/paths.rs

//! The path-group registry: a fixed `src/` → `public/` layout derived from
//! the project root.
//!
//! Every transform unit consults this and nothing else for where to read and
//! write. The layout is part of the tool's contract and is deliberately not
//! configurable:
//!
//! ```text
//! src/styles/main.scss     -> public/styles/main.bundle.css
//! src/scripts/**/*.js      -> public/scripts/main.bundle.js
//! src/assets/images/**/*   -> public/assets/images/
//! src/assets/fonts/**/*    -> public/assets/fonts/
//! src/views/**/*.html      -> public/
//! ```

use std::path::{Path, PathBuf};

use crate::errors::{UnitError, UnitResult};

/// Filename of the compiled stylesheet bundle.
pub const STYLE_BUNDLE: &str = "main.bundle.css";

/// Filename of the concatenated script bundle.
pub const SCRIPT_BUNDLE: &str = "main.bundle.js";

/// Resolved source and destination directories for one project.
#[derive(Debug, Clone)]
pub struct SitePaths {
    root: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public")
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.src_dir().join("styles")
    }

    /// The single entry stylesheet; partials are pulled in by the compiler.
    pub fn styles_entry(&self) -> PathBuf {
        self.styles_dir().join("main.scss")
    }

    pub fn styles_dest(&self) -> PathBuf {
        self.public_dir().join("styles")
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.src_dir().join("scripts")
    }

    pub fn scripts_dest(&self) -> PathBuf {
        self.public_dir().join("scripts")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.src_dir().join("assets").join("images")
    }

    pub fn images_dest(&self) -> PathBuf {
        self.public_dir().join("assets").join("images")
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.src_dir().join("assets").join("fonts")
    }

    pub fn fonts_dest(&self) -> PathBuf {
        self.public_dir().join("assets").join("fonts")
    }

    pub fn views_dir(&self) -> PathBuf {
        self.src_dir().join("views")
    }

    /// Expanded views land directly under the output root.
    pub fn views_dest(&self) -> PathBuf {
        self.public_dir()
    }

    /// Check the layout before any pipeline runs.
    ///
    /// Only the source root is required to exist; a missing per-concern
    /// subdirectory makes that unit a no-op. The output root is created on
    /// demand by the units that write into it.
    pub fn validate(&self) -> UnitResult {
        let src = self.src_dir();
        if !src.is_dir() {
            return Err(UnitError::Config(format!(
                "source root {src:?} does not exist (expected a src/ directory under {:?})",
                self.root
            )));
        }
        Ok(())
    }
}
