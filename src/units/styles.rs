// src/units/styles.rs

//! Styles unit: compile the entry stylesheet, vendor-prefix and minify the
//! result, write the bundle, and push a CSS inject signal.
//!
//! The whole chain runs in memory; the bundle on disk is only replaced once
//! every step has succeeded, so a syntax error during a watch session leaves
//! the previous output in place.

use std::path::Path;

use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};
use tracing::info;

use crate::errors::{UnitError, UnitResult};
use crate::fs;
use crate::paths::STYLE_BUNDLE;
use crate::server::ReloadSignal;
use crate::units::BuildContext;

pub fn run(ctx: &BuildContext) -> UnitResult {
    let entry = ctx.paths.styles_entry();
    if !entry.is_file() {
        return Err(UnitError::Sass {
            path: entry,
            message: "entry stylesheet not found".to_string(),
        });
    }

    let css = grass::from_path(&entry, &grass::Options::default()).map_err(|e| {
        UnitError::Sass {
            path: entry.clone(),
            message: e.to_string(),
        }
    })?;

    let optimized = optimize(&css, &entry)?;

    let dest = ctx.paths.styles_dest().join(STYLE_BUNDLE);
    fs::write_file(&dest, optimized.as_bytes())?;
    info!(
        unit = "styles",
        path = ?dest,
        bytes = optimized.len(),
        "stylesheet bundle written"
    );

    ctx.reload.notify(ReloadSignal::Inject);
    Ok(())
}

/// Parse compiled CSS, add vendor prefixes for the supported browser set,
/// and print it minified.
fn optimize(css: &str, entry: &Path) -> UnitResult<String> {
    let css_err = |message: String| UnitError::Css {
        path: entry.to_path_buf(),
        message,
    };

    let mut sheet =
        StyleSheet::parse(css, ParserOptions::default()).map_err(|e| css_err(e.to_string()))?;

    let targets = browser_targets();

    let mut minify = MinifyOptions::default();
    minify.targets = targets.clone();
    sheet.minify(minify).map_err(|e| css_err(e.to_string()))?;

    let mut printer = PrinterOptions::default();
    printer.minify = true;
    printer.targets = targets;
    let out = sheet.to_css(printer).map_err(|e| css_err(e.to_string()))?;

    Ok(out.code)
}

/// Conservative browser floor used for prefixing and feature lowering.
/// Versions are encoded as `major << 16 | minor << 8 | patch`.
fn browser_targets() -> Targets {
    let mut browsers = Browsers::default();
    browsers.chrome = Some(60 << 16);
    browsers.edge = Some(15 << 16);
    browsers.firefox = Some(55 << 16);
    browsers.ie = Some(11 << 16);
    browsers.ios_saf = Some(10 << 16);
    browsers.safari = Some(10 << 16);

    let mut targets = Targets::default();
    targets.browsers = Some(browsers);
    targets
}
