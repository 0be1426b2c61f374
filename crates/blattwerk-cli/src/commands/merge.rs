// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::{Path, PathBuf};

use blattwerk_core::error::Result;
use blattwerk_core::types::OperationSummary;
use blattwerk_document::output;
use blattwerk_document::{PdfFile, merge_documents};

use super::report;

pub fn run(inputs: &[PathBuf], output_path: &Path, json: bool) -> Result<()> {
    // All inputs are loaded (and validated) before anything is written.
    let loaded = inputs
        .iter()
        .map(PdfFile::open)
        .collect::<Result<Vec<_>>>()?;

    let mut merged = merge_documents(&loaded)?;
    let pages = merged.get_pages().len();
    output::write_document(&mut merged, output_path)?;

    report(
        &OperationSummary::Merged {
            input_documents: loaded.len(),
            pages,
            output: output_path.display().to_string(),
        },
        json,
    )
}
