// src/units/html.rs

//! HTML unit: expand include directives in view files and write the results
//! to the site root, or copy views verbatim when configured to.
//!
//! A directive looks like `@@include('partials/nav.html')` (single or double
//! quotes; the prefix is configurable). The named file is resolved relative
//! to the directory of the file containing the directive and may itself
//! contain further directives, which resolve transitively. A missing include
//! or a cycle fails that view only; other views still build.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, error, info};

use crate::config::HtmlMode;
use crate::errors::{UnitError, UnitResult};
use crate::fs;
use crate::server::ReloadSignal;
use crate::units::BuildContext;

pub fn run(ctx: &BuildContext) -> UnitResult {
    match ctx.settings.html.mode {
        HtmlMode::Include => run_include(ctx),
        HtmlMode::Copy => run_copy(ctx),
    }
}

fn run_include(ctx: &BuildContext) -> UnitResult {
    let views_dir = ctx.paths.views_dir();
    let dest_dir = ctx.paths.views_dest();

    let views = view_files(ctx)?;
    if views.is_empty() {
        debug!(unit = "html", dir = ?views_dir, "no views, nothing to do");
        return Ok(());
    }

    let pattern = include_pattern(&ctx.settings.html.prefix)?;

    let mut written = 0usize;
    let mut failed = 0usize;
    for view in &views {
        let rel = fs::rel_path(&views_dir, view);
        match expand_view(view, &pattern) {
            Ok(expanded) => {
                fs::write_file(&dest_dir.join(rel), expanded.as_bytes())?;
                written += 1;
            }
            Err(err) => {
                error!(unit = "html", path = ?view, error = %err, "view failed");
                failed += 1;
            }
        }
    }

    info!(unit = "html", written, failed, "views expanded");

    if written > 0 {
        ctx.reload.notify(ReloadSignal::Reload);
    }
    if failed > 0 {
        return Err(UnitError::Partial {
            unit: "html",
            failed,
            total: views.len(),
        });
    }
    Ok(())
}

fn run_copy(ctx: &BuildContext) -> UnitResult {
    let views_dir = ctx.paths.views_dir();
    let dest_dir = ctx.paths.views_dest();

    let views = view_files(ctx)?;
    if views.is_empty() {
        debug!(unit = "html", dir = ?views_dir, "no views, nothing to do");
        return Ok(());
    }

    for view in &views {
        let rel = fs::rel_path(&views_dir, view);
        fs::copy_file(view, &dest_dir.join(rel))?;
    }

    info!(unit = "html", files = views.len(), "views copied");
    ctx.reload.notify(ReloadSignal::Reload);
    Ok(())
}

fn view_files(ctx: &BuildContext) -> UnitResult<Vec<PathBuf>> {
    Ok(fs::collect_files(&ctx.paths.views_dir())?
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
        .collect())
}

/// Compile the directive pattern for a given prefix.
fn include_pattern(prefix: &str) -> UnitResult<Regex> {
    let escaped = regex::escape(prefix);
    Regex::new(&format!(r#"{escaped}include\(\s*['"]([^'"]+)['"]\s*\)"#))
        .map_err(|e| UnitError::Config(format!("invalid include prefix {prefix:?}: {e}")))
}

/// Fully expand one view file.
fn expand_view(path: &Path, pattern: &Regex) -> UnitResult<String> {
    let mut stack = Vec::new();
    expand_file(path, pattern, &mut stack)
}

fn expand_file(path: &Path, pattern: &Regex, stack: &mut Vec<PathBuf>) -> UnitResult<String> {
    if stack.iter().any(|p| p == path) {
        return Err(UnitError::IncludeCycle {
            path: path.to_path_buf(),
        });
    }
    stack.push(path.to_path_buf());

    let text = fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;
    for caps in pattern.captures_iter(&text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);

        let include_path = base.join(name.as_str());
        if !include_path.is_file() {
            return Err(UnitError::MissingInclude {
                include: name.as_str().to_string(),
                from: path.to_path_buf(),
            });
        }
        out.push_str(&expand_file(&include_path, pattern, stack)?);

        last = whole.end();
    }
    out.push_str(&text[last..]);

    stack.pop();
    Ok(out)
}
