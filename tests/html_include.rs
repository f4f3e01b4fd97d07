// tests/html_include.rs

mod common;

use std::fs;

use common::{ctx, ctx_with, write};
use sitepipe::config::{ConfigFile, HtmlMode};
use sitepipe::errors::UnitError;
use sitepipe::units::{self, UnitKind};

#[test]
fn include_marker_expands_in_place() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/views/page.html",
        "<body>@@include('header.html')</body>",
    );
    write(dir.path(), "src/views/header.html", "<h1>Hi</h1>");

    units::run(&ctx(dir.path()), UnitKind::Html).unwrap();

    let out = fs::read_to_string(dir.path().join("public/page.html")).unwrap();
    assert_eq!(out, "<body><h1>Hi</h1></body>");
}

#[test]
fn nested_includes_resolve_transitively() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/views/page.html",
        "@@include('outer.html')",
    );
    write(
        dir.path(),
        "src/views/outer.html",
        "<div>@@include(\"inner.html\")</div>",
    );
    write(dir.path(), "src/views/inner.html", "deep");

    units::run(&ctx(dir.path()), UnitKind::Html).unwrap();

    let out = fs::read_to_string(dir.path().join("public/page.html")).unwrap();
    assert_eq!(out, "<div>deep</div>");
}

#[test]
fn missing_include_fails_only_that_view() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/views/good.html", "<p>fine</p>");
    write(
        dir.path(),
        "src/views/bad.html",
        "@@include('nope.html')",
    );

    let result = units::run(&ctx(dir.path()), UnitKind::Html);
    assert!(matches!(
        result,
        Err(UnitError::Partial { unit: "html", failed: 1, .. })
    ));

    let good = fs::read_to_string(dir.path().join("public/good.html")).unwrap();
    assert_eq!(good, "<p>fine</p>");
    assert!(!dir.path().join("public/bad.html").exists());
}

#[test]
fn include_cycles_are_reported_not_looped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/views/a.html", "@@include('b.html')");
    write(dir.path(), "src/views/b.html", "@@include('a.html')");

    let result = units::run(&ctx(dir.path()), UnitKind::Html);
    assert!(matches!(result, Err(UnitError::Partial { .. })));
}

#[test]
fn copy_mode_keeps_markers_untouched() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/views/page.html",
        "<body>@@include('header.html')</body>",
    );
    write(dir.path(), "src/views/header.html", "<h1>Hi</h1>");

    let mut settings = ConfigFile::default();
    settings.html.mode = HtmlMode::Copy;
    units::run(&ctx_with(dir.path(), settings), UnitKind::Html).unwrap();

    let out = fs::read_to_string(dir.path().join("public/page.html")).unwrap();
    assert_eq!(out, "<body>@@include('header.html')</body>");
}

#[test]
fn custom_prefix_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/views/page.html",
        "##include('header.html') and @@include('header.html')",
    );
    write(dir.path(), "src/views/header.html", "X");

    let mut settings = ConfigFile::default();
    settings.html.prefix = "##".to_string();
    units::run(&ctx_with(dir.path(), settings), UnitKind::Html).unwrap();

    let out = fs::read_to_string(dir.path().join("public/page.html")).unwrap();
    assert_eq!(out, "X and @@include('header.html')");
}
