// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::{Path, PathBuf};

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::human_errors::humanize_error;
use blattwerk_core::types::{OperationSummary, RasterFormat};
use blattwerk_document::convert::convert_images;

use super::report;

pub fn run(inputs: &[PathBuf], output_dir: &Path, format: &str, json: bool) -> Result<()> {
    let format = RasterFormat::from_name(format).ok_or_else(|| {
        BlattwerkError::ImageError(format!(
            "unknown output format {format:?} (expected png, jpeg, bmp, gif, or tiff)"
        ))
    })?;

    let (converted, failures) = convert_images(inputs, output_dir, format);
    for failure in &failures {
        let human = humanize_error(failure);
        eprintln!("warning: {} {}", human.message, human.suggestion);
    }

    report(
        &OperationSummary::ImagesConverted {
            converted: converted.len(),
            failed: failures.len(),
            output_dir: output_dir.display().to_string(),
        },
        json,
    )
}
