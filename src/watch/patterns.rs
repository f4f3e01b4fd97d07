// src/watch/patterns.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::units::UnitKind;

/// Watch globs per unit, relative to the project root.
///
/// The html unit watches all HTML under `src/`, not just the views
/// directory, so editing a partial rebuilds the views that include it.
fn unit_watch_globs(kind: UnitKind) -> &'static [&'static str] {
    match kind {
        UnitKind::Styles => &["src/styles/**/*.scss"],
        UnitKind::Scripts => &["src/scripts/**/*.js"],
        UnitKind::Images => &["src/assets/images/**/*"],
        UnitKind::Fonts => &["src/assets/fonts/**/*"],
        UnitKind::Html => &["src/**/*.html"],
        UnitKind::Clean => &[],
    }
}

/// Paths the watcher must never react to: our own output tree and anything
/// hidden. Without the output exclusion a build would re-trigger itself.
const EXCLUDE_GLOBS: &[&str] = &["public", "public/**", ".*", "**/.*"];

/// Compiled watch globs for a single unit.
#[derive(Clone)]
pub struct UnitWatchProfile {
    unit: UnitKind,
    watch_set: GlobSet,
}

impl fmt::Debug for UnitWatchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitWatchProfile")
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

impl UnitWatchProfile {
    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    /// Returns true if this unit is interested in the given path (relative
    /// to the project root, forward slashes), e.g. `"src/styles/base.scss"`.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.watch_set.is_match(rel_path)
    }
}

/// Build a compiled watch profile for every unit that watches anything.
pub fn build_unit_watch_profiles() -> Result<Vec<UnitWatchProfile>> {
    let mut profiles = Vec::new();
    for kind in UnitKind::BUILD {
        let globs = unit_watch_globs(kind);
        if globs.is_empty() {
            continue;
        }
        let watch_set = build_globset(globs)
            .with_context(|| format!("building watch globset for {kind} unit"))?;
        profiles.push(UnitWatchProfile {
            unit: kind,
            watch_set,
        });
    }
    Ok(profiles)
}

/// Build the shared exclude set applied before any profile is consulted.
pub fn build_exclude_set() -> Result<GlobSet> {
    build_globset(EXCLUDE_GLOBS).context("building watch exclude globset")
}

fn build_globset(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
