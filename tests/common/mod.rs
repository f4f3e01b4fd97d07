// tests/common/mod.rs

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sitepipe::config::ConfigFile;
use sitepipe::paths::SitePaths;
use sitepipe::server::ReloadHub;
use sitepipe::units::BuildContext;
use tempfile::TempDir;

/// Write a file under `root`, creating parent directories.
pub fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// A small but complete site tree: styles, two scripts, a view with a
/// partial include, a font, and a real PNG.
pub fn site_fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(
        root,
        "src/styles/main.scss",
        "$accent: #336699;\nbody {\n  color: $accent;\n}\n",
    );
    write(root, "src/scripts/a.js", "const greeting = \"hello\";\n");
    write(
        root,
        "src/scripts/b.js",
        "function hi() { return greeting; }\n",
    );
    write(
        root,
        "src/views/index.html",
        "<html><body>@@include('partials/nav.html')</body></html>\n",
    );
    write(root, "src/views/partials/nav.html", "<nav>site</nav>");
    write(root, "src/assets/fonts/site.woff2", "not really a font");

    let logo = root.join("src/assets/images/logo.png");
    fs::create_dir_all(logo.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(4, 4, image::Rgba([120, 40, 200, 255]))
        .save(&logo)
        .unwrap();

    dir
}

pub fn ctx(root: &Path) -> BuildContext {
    ctx_with(root, ConfigFile::default())
}

pub fn ctx_with(root: &Path, settings: ConfigFile) -> BuildContext {
    BuildContext {
        paths: SitePaths::new(root),
        settings,
        reload: ReloadHub::new(),
    }
}

pub fn ctx_arc(root: &Path) -> Arc<BuildContext> {
    Arc::new(ctx(root))
}
