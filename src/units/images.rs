// src/units/images.rs

//! Images unit: re-encode JPEG and PNG assets with the configured
//! quality/compression, copy everything else verbatim, preserving relative
//! paths under the images destination.
//!
//! One unreadable asset must not stop the rest: failures are logged per
//! file and the unit keeps going, reporting an aggregate error at the end.

use std::path::Path;

use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use tracing::{debug, error, info};

use crate::config::{ImagesSection, PngCompression};
use crate::errors::{UnitError, UnitResult};
use crate::fs;
use crate::units::BuildContext;

pub fn run(ctx: &BuildContext) -> UnitResult {
    let src_dir = ctx.paths.images_dir();
    let dest_dir = ctx.paths.images_dest();

    let files = fs::collect_files(&src_dir)?;
    if files.is_empty() {
        debug!(unit = "images", dir = ?src_dir, "no image assets, nothing to do");
        return Ok(());
    }

    let mut failed = 0usize;
    for src in &files {
        let rel = fs::rel_path(&src_dir, src);
        let dest = dest_dir.join(rel);
        if let Err(err) = process(src, &dest, &ctx.settings.images) {
            error!(unit = "images", path = ?src, error = %err, "asset failed");
            failed += 1;
        }
    }

    info!(
        unit = "images",
        processed = files.len() - failed,
        failed,
        "image assets written"
    );

    if failed > 0 {
        return Err(UnitError::Partial {
            unit: "images",
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

fn process(src: &Path, dest: &Path, cfg: &ImagesSection) -> UnitResult {
    let ext = src
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => recompress_jpeg(src, dest, cfg.jpeg_quality),
        Some("png") => recompress_png(src, dest, cfg.png_compression),
        // Formats we don't re-encode pass through untouched.
        _ => fs::copy_file(src, dest),
    }
}

fn recompress_jpeg(src: &Path, dest: &Path, quality: u8) -> UnitResult {
    let img_err = |message: String| UnitError::Image {
        path: src.to_path_buf(),
        message,
    };

    let img = image::open(src).map_err(|e| img_err(e.to_string()))?;
    let rgb = img.to_rgb8();

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| img_err(e.to_string()))?;

    fs::write_file(dest, &out)
}

fn recompress_png(src: &Path, dest: &Path, compression: PngCompression) -> UnitResult {
    let img_err = |message: String| UnitError::Image {
        path: src.to_path_buf(),
        message,
    };

    let img = image::open(src).map_err(|e| img_err(e.to_string()))?;
    let rgba = img.to_rgba8();

    let compression = match compression {
        PngCompression::Fast => CompressionType::Fast,
        PngCompression::Default => CompressionType::Default,
        PngCompression::Best => CompressionType::Best,
    };

    let mut out = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut out, compression, FilterType::Adaptive);
    encoder
        .write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| img_err(e.to_string()))?;

    fs::write_file(dest, &out)
}
