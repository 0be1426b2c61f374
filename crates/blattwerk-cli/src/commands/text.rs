// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::Path;

use blattwerk_core::error::Result;
use blattwerk_core::types::OperationSummary;
use blattwerk_document::output::{self, TextOutputOptions};
use blattwerk_document::{PdfFile, extract_text};

use super::report;

pub fn run(input: &Path, output_path: &Path, page_breaks: bool, json: bool) -> Result<()> {
    let pdf = PdfFile::open(input)?;
    let pages = extract_text(&pdf);

    let options = TextOutputOptions {
        page_separator: page_breaks.then(|| "\n\n".to_string()),
    };
    output::write_text(&pages, output_path, &options)?;

    report(
        &OperationSummary::TextExtracted {
            pages: pages.len(),
            output: output_path.display().to_string(),
        },
        json,
    )
}
