// src/errors.rs

//! Crate-wide error types.
//!
//! `UnitError` is the transform-error taxonomy: everything that can go wrong
//! inside a single transform unit, carrying enough context (unit, file) to
//! locate the fault from a log line. Wiring-level code uses `anyhow` on top.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnitError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("sass compile failed for {path:?}: {message}")]
    Sass { path: PathBuf, message: String },

    #[error("css transform failed for {path:?}: {message}")]
    Css { path: PathBuf, message: String },

    #[error("script minify failed for {path:?}: {message}")]
    Script { path: PathBuf, message: String },

    #[error("image encode failed for {path:?}: {message}")]
    Image { path: PathBuf, message: String },

    #[error("include '{include}' referenced from {from:?} does not exist")]
    MissingInclude { include: String, from: PathBuf },

    #[error("include cycle detected through {path:?}")]
    IncludeCycle { path: PathBuf },

    #[error("{failed} of {total} files failed in the {unit} unit")]
    Partial {
        unit: &'static str,
        failed: usize,
        total: usize,
    },

    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UnitError {
    /// Attach a path to a raw io error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UnitError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type UnitResult<T = ()> = Result<T, UnitError>;
