// src/units/fonts.rs

//! Fonts unit: verbatim copy of font assets to the fonts destination.

use tracing::{debug, info};

use crate::errors::UnitResult;
use crate::fs;
use crate::units::BuildContext;

pub fn run(ctx: &BuildContext) -> UnitResult {
    let src_dir = ctx.paths.fonts_dir();
    let dest_dir = ctx.paths.fonts_dest();

    let files = fs::collect_files(&src_dir)?;
    if files.is_empty() {
        debug!(unit = "fonts", dir = ?src_dir, "no font assets, nothing to do");
        return Ok(());
    }

    for src in &files {
        let rel = fs::rel_path(&src_dir, src);
        fs::copy_file(src, &dest_dir.join(rel))?;
    }

    info!(unit = "fonts", files = files.len(), "font assets copied");
    Ok(())
}
