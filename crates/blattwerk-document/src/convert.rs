// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image format conversion — decode with the `image` crate, re-encode
// in the requested container. Batch conversion is best-effort per file.

use std::path::{Path, PathBuf};

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::types::RasterFormat;
use image::{DynamicImage, ImageFormat};
use tracing::{info, instrument, warn};

fn image_format(format: RasterFormat) -> ImageFormat {
    match format {
        RasterFormat::Png => ImageFormat::Png,
        RasterFormat::Jpeg => ImageFormat::Jpeg,
        RasterFormat::Bmp => ImageFormat::Bmp,
        RasterFormat::Gif => ImageFormat::Gif,
        RasterFormat::Tiff => ImageFormat::Tiff,
    }
}

/// Convert one image file, writing `<stem>.<ext>` into `output_dir`.
/// Returns the output path.
#[instrument(skip_all, fields(input = %input.display(), format = %format))]
pub fn convert_image(input: &Path, output_dir: &Path, format: RasterFormat) -> Result<PathBuf> {
    let img = image::open(input).map_err(|err| {
        BlattwerkError::ImageError(format!("failed to open {}: {err}", input.display()))
    })?;

    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            BlattwerkError::ImageError(format!("input {} has no usable file name", input.display()))
        })?;
    let output = output_dir.join(format!("{stem}.{}", format.extension()));

    // JPEG has no alpha channel.
    let img = match format {
        RasterFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };

    img.save_with_format(&output, image_format(format))
        .map_err(|err| {
            BlattwerkError::ImageError(format!("failed to write {}: {err}", output.display()))
        })?;

    info!(output = %output.display(), "Image converted");
    Ok(output)
}

/// Convert a batch of image files. A failure on one file is recorded and the
/// remaining files are still converted.
pub fn convert_images(
    inputs: &[PathBuf],
    output_dir: &Path,
    format: RasterFormat,
) -> (Vec<PathBuf>, Vec<BlattwerkError>) {
    let mut converted = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        match convert_image(input, output_dir, format) {
            Ok(path) => converted.push(path),
            Err(err) => {
                warn!(input = %input.display(), %err, "conversion failed, continuing");
                failures.push(err);
            }
        }
    }

    (converted, failures)
}
