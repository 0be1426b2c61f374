// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::Path;

use blattwerk_core::error::Result;
use blattwerk_core::human_errors::humanize_error;
use blattwerk_core::types::OperationSummary;
use blattwerk_document::output;
use blattwerk_document::{PdfFile, extract_images};

use super::report;

pub fn run(input: &Path, output_dir: &Path, json: bool) -> Result<()> {
    let pdf = PdfFile::open(input)?;
    let extraction = extract_images(&pdf);
    let written = output::write_images(&extraction.images, output_dir)?;

    // Per-image failures don't abort the run; surface them as warnings.
    for skipped in &extraction.skipped {
        let human = humanize_error(&skipped.to_error());
        eprintln!("warning: {} {}", human.message, human.suggestion);
    }

    report(
        &OperationSummary::ImagesExtracted {
            images: written,
            skipped: extraction.skipped.len(),
            output_dir: output_dir.display().to_string(),
        },
        json,
    )
}
