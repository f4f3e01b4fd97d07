// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from `Sitepipe.toml`.
///
/// Every section is optional with defaults, so an absent config file is the
/// same as an empty one:
///
/// ```toml
/// [server]
/// port = 5000
///
/// [html]
/// mode = "include"
/// prefix = "@@"
///
/// [images]
/// jpeg_quality = 75
/// png_compression = "best"
///
/// [scripts]
/// module = false
/// ```
///
/// The source/output layout itself is fixed (see `paths`); the config only
/// tunes behaviour inside it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Dev server settings from `[server]`.
    #[serde(default)]
    pub server: ServerSection,

    /// HTML unit settings from `[html]`.
    #[serde(default)]
    pub html: HtmlSection,

    /// Image re-encoding settings from `[images]`.
    #[serde(default)]
    pub images: ImagesSection,

    /// Script bundle settings from `[scripts]`.
    #[serde(default)]
    pub scripts: ScriptsSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Port the dev server binds on localhost.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// How the HTML unit treats view files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlMode {
    /// Resolve include directives in views before writing them out.
    Include,
    /// Copy views verbatim, leaving directives untouched.
    Copy,
}

/// `[html]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlSection {
    #[serde(default = "default_html_mode")]
    pub mode: HtmlMode,

    /// Prefix that marks an include directive, e.g. `@@include('nav.html')`.
    #[serde(default = "default_include_prefix")]
    pub prefix: String,
}

fn default_html_mode() -> HtmlMode {
    HtmlMode::Include
}

fn default_include_prefix() -> String {
    "@@".to_string()
}

impl Default for HtmlSection {
    fn default() -> Self {
        Self {
            mode: default_html_mode(),
            prefix: default_include_prefix(),
        }
    }
}

/// PNG compression effort, mapped onto the encoder's compression types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    Fast,
    Default,
    Best,
}

/// `[images]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesSection {
    /// JPEG re-encode quality, 1..=100.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    #[serde(default = "default_png_compression")]
    pub png_compression: PngCompression,
}

fn default_jpeg_quality() -> u8 {
    75
}

fn default_png_compression() -> PngCompression {
    PngCompression::Best
}

impl Default for ImagesSection {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
            png_compression: default_png_compression(),
        }
    }
}

/// `[scripts]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptsSection {
    /// Minify the bundle as an ES module instead of a classic script.
    #[serde(default)]
    pub module: bool,
}
