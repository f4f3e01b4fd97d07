// src/config/mod.rs

//! Configuration loading, models, and validation for `Sitepipe.toml`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_or_default};
pub use model::{ConfigFile, HtmlMode, HtmlSection, ImagesSection, PngCompression, ScriptsSection, ServerSection};
pub use validate::validate_config;
