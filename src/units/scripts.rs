// src/units/scripts.rs

//! Scripts unit: concatenate all script sources into one bundle, minify it,
//! and write it to the scripts destination.
//!
//! Sources are concatenated in lexicographic path order so the bundle is
//! deterministic across platforms and repeated runs.

use minify_js::{Session, TopLevelMode, minify};
use tracing::{debug, info};

use crate::errors::{UnitError, UnitResult};
use crate::fs;
use crate::paths::SCRIPT_BUNDLE;
use crate::units::BuildContext;

pub fn run(ctx: &BuildContext) -> UnitResult {
    let src_dir = ctx.paths.scripts_dir();
    let sources: Vec<_> = fs::collect_files(&src_dir)?
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == "js"))
        .collect();

    if sources.is_empty() {
        debug!(unit = "scripts", dir = ?src_dir, "no script sources, nothing to do");
        return Ok(());
    }

    let mut bundle = String::new();
    for path in &sources {
        bundle.push_str(&fs::read_to_string(path)?);
        // Keep statements from distinct files from running together.
        if !bundle.ends_with('\n') {
            bundle.push('\n');
        }
    }

    let dest = ctx.paths.scripts_dest().join(SCRIPT_BUNDLE);

    let mode = if ctx.settings.scripts.module {
        TopLevelMode::Module
    } else {
        TopLevelMode::Global
    };

    let session = Session::new();
    let mut minified = Vec::new();
    minify(&session, mode, bundle.as_bytes(), &mut minified).map_err(|e| {
        UnitError::Script {
            path: dest.clone(),
            message: format!("{e:?}"),
        }
    })?;

    fs::write_file(&dest, &minified)?;
    info!(
        unit = "scripts",
        path = ?dest,
        files = sources.len(),
        bytes = minified.len(),
        "script bundle written"
    );

    Ok(())
}
