// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::Path;

use blattwerk_core::error::Result;
use blattwerk_core::types::OperationSummary;
use blattwerk_document::output;
use blattwerk_document::{PdfFile, split_document};

use super::report;

pub fn run(input: &Path, output_dir: &Path, json: bool) -> Result<()> {
    let pdf = PdfFile::open(input)?;
    let parts = split_document(&pdf)?;
    let pages = output::write_split(parts, output_dir)?;

    report(
        &OperationSummary::Split {
            pages,
            output_dir: output_dir.display().to_string(),
        },
        json,
    )
}
