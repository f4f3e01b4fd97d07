// tests/units.rs

mod common;

use std::fs;

use common::{ctx, site_fixture, write};
use sitepipe::errors::UnitError;
use sitepipe::units::{self, UnitKind};

#[test]
fn script_bundle_concatenates_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/scripts/a.js", "const first = \"AAA\";\n");
    write(dir.path(), "src/scripts/b.js", "const second = \"BBB\";\n");

    units::run(&ctx(dir.path()), UnitKind::Scripts).unwrap();

    let bundle =
        fs::read_to_string(dir.path().join("public/scripts/main.bundle.js")).unwrap();
    let first = bundle.find("AAA").expect("first source missing");
    let second = bundle.find("BBB").expect("second source missing");
    assert!(first < second, "sources out of order: {bundle}");
}

#[test]
fn scripts_unit_is_a_noop_without_sources() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();

    units::run(&ctx(dir.path()), UnitKind::Scripts).unwrap();
    assert!(!dir.path().join("public/scripts").exists());
}

#[test]
fn invalid_script_source_is_a_transform_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/scripts/broken.js", "function ( {");

    let result = units::run(&ctx(dir.path()), UnitKind::Scripts);
    assert!(matches!(result, Err(UnitError::Script { .. })));
    assert!(!dir.path().join("public/scripts/main.bundle.js").exists());
}

#[test]
fn missing_styles_entry_is_a_transform_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/styles")).unwrap();

    let result = units::run(&ctx(dir.path()), UnitKind::Styles);
    assert!(matches!(result, Err(UnitError::Sass { .. })));
}

#[test]
fn sass_partials_feed_the_entry_compile() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/styles/_palette.scss", "$ink: #222222;\n");
    write(
        dir.path(),
        "src/styles/main.scss",
        "@import 'palette';\nbody { color: $ink; }\n",
    );

    units::run(&ctx(dir.path()), UnitKind::Styles).unwrap();

    let css =
        fs::read_to_string(dir.path().join("public/styles/main.bundle.css")).unwrap();
    assert!(css.contains("#222"), "unexpected css: {css}");
}

#[test]
fn fonts_are_copied_byte_for_byte() {
    let dir = site_fixture();

    units::run(&ctx(dir.path()), UnitKind::Fonts).unwrap();

    let out = fs::read(dir.path().join("public/assets/fonts/site.woff2")).unwrap();
    assert_eq!(out, b"not really a font");
}

#[test]
fn images_preserve_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("src/assets/images/icons/dot.png");
    fs::create_dir_all(nested.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]))
        .save(&nested)
        .unwrap();

    units::run(&ctx(dir.path()), UnitKind::Images).unwrap();

    let out = dir.path().join("public/assets/images/icons/dot.png");
    assert!(out.is_file());
    // Output must still decode as an image.
    image::open(&out).unwrap();
}

#[test]
fn unreadable_image_does_not_stop_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/assets/images/fake.png", "this is not a png");
    let real = dir.path().join("src/assets/images/real.png");
    image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]))
        .save(&real)
        .unwrap();

    let result = units::run(&ctx(dir.path()), UnitKind::Images);
    assert!(matches!(
        result,
        Err(UnitError::Partial { unit: "images", failed: 1, total: 2 })
    ));
    assert!(dir.path().join("public/assets/images/real.png").is_file());
    assert!(!dir.path().join("public/assets/images/fake.png").exists());
}

#[test]
fn unhandled_image_formats_are_copied_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/assets/images/logo.svg",
        "<svg xmlns='http://www.w3.org/2000/svg'/>",
    );

    units::run(&ctx(dir.path()), UnitKind::Images).unwrap();

    let out = fs::read_to_string(dir.path().join("public/assets/images/logo.svg")).unwrap();
    assert_eq!(out, "<svg xmlns='http://www.w3.org/2000/svg'/>");
}
