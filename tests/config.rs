// tests/config.rs

use std::fs;

use sitepipe::config::{HtmlMode, PngCompression, load_or_default};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("Sitepipe.toml")).unwrap();

    assert_eq!(cfg.server.port, 5000);
    assert_eq!(cfg.html.mode, HtmlMode::Include);
    assert_eq!(cfg.html.prefix, "@@");
    assert_eq!(cfg.images.jpeg_quality, 75);
    assert_eq!(cfg.images.png_compression, PngCompression::Best);
    assert!(!cfg.scripts.module);
}

#[test]
fn file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8080

[html]
mode = "copy"
prefix = "##"

[images]
jpeg_quality = 60
png_compression = "fast"

[scripts]
module = true
"#,
    )
    .unwrap();

    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.html.mode, HtmlMode::Copy);
    assert_eq!(cfg.html.prefix, "##");
    assert_eq!(cfg.images.jpeg_quality, 60);
    assert_eq!(cfg.images.png_compression, PngCompression::Fast);
    assert!(cfg.scripts.module);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(&path, "[server]\nport = 3000\n").unwrap();

    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.html.mode, HtmlMode::Include);
    assert_eq!(cfg.images.jpeg_quality, 75);
}

#[test]
fn zero_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(&path, "[server]\nport = 0\n").unwrap();

    assert!(load_or_default(&path).is_err());
}

#[test]
fn out_of_range_jpeg_quality_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(&path, "[images]\njpeg_quality = 0\n").unwrap();

    assert!(load_or_default(&path).is_err());
}

#[test]
fn empty_include_prefix_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(&path, "[html]\nprefix = \"\"\n").unwrap();

    assert!(load_or_default(&path).is_err());
}

#[test]
fn unknown_html_mode_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(&path, "[html]\nmode = \"frobnicate\"\n").unwrap();

    assert!(load_or_default(&path).is_err());
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sitepipe.toml");
    fs::write(&path, "[server\nport = 8080").unwrap();

    assert!(load_or_default(&path).is_err());
}
