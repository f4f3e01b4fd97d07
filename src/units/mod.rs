// src/units/mod.rs

//! Transform units: one self-contained read → transform → write step per
//! asset concern.
//!
//! Units are synchronous, stateless, and idempotent; the pipeline layer
//! decides how to schedule them. Each unit writes only inside its own
//! destination subtree under the output root, so concurrently running units
//! never touch the same files.

use std::fmt;

pub mod clean;
pub mod fonts;
pub mod html;
pub mod images;
pub mod scripts;
pub mod styles;

use crate::config::ConfigFile;
use crate::errors::UnitResult;
use crate::paths::SitePaths;
use crate::server::ReloadHub;

/// Everything a unit needs to run: the path registry, the resolved
/// configuration, and the reload hub. Constructed once at startup and shared
/// by reference (or `Arc`) into every unit invocation.
#[derive(Debug)]
pub struct BuildContext {
    pub paths: SitePaths,
    pub settings: ConfigFile,
    pub reload: ReloadHub,
}

/// The fixed set of transform units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKind {
    Styles,
    Scripts,
    Images,
    Fonts,
    Html,
    Clean,
}

impl UnitKind {
    /// The units that participate in a full build, in no particular order.
    pub const BUILD: [UnitKind; 5] = [
        UnitKind::Styles,
        UnitKind::Scripts,
        UnitKind::Images,
        UnitKind::Fonts,
        UnitKind::Html,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Styles => "styles",
            UnitKind::Scripts => "scripts",
            UnitKind::Images => "images",
            UnitKind::Fonts => "fonts",
            UnitKind::Html => "html",
            UnitKind::Clean => "clean",
        }
    }

    /// Whether the unit pushes its own reload signal on success.
    ///
    /// Styles and html notify from inside the unit (styles as a CSS inject);
    /// for the rest the watch runtime sends a full reload after the rebuild.
    pub fn notifies_itself(self) -> bool {
        matches!(self, UnitKind::Styles | UnitKind::Html)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run one unit to completion.
pub fn run(ctx: &BuildContext, kind: UnitKind) -> UnitResult {
    match kind {
        UnitKind::Styles => styles::run(ctx),
        UnitKind::Scripts => scripts::run(ctx),
        UnitKind::Images => images::run(ctx),
        UnitKind::Fonts => fonts::run(ctx),
        UnitKind::Html => html::run(ctx),
        UnitKind::Clean => clean::run(ctx),
    }
}
