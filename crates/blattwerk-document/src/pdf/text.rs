// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text extractor — per-page text layer recovery.

use blattwerk_core::types::ExtractedText;
use tracing::{instrument, warn};

use super::loader::PdfFile;

/// Extract the text layer of every page, in document order.
///
/// Returns exactly one entry per page. Extraction is best-effort: a page
/// whose text cannot be decoded (pure-image page, exotic font encoding)
/// records an empty string so page-to-text correspondence is preserved for
/// callers that concatenate the output.
#[instrument(skip_all, fields(source = input.source_id(), pages = input.page_count()))]
pub fn extract_text(input: &PdfFile) -> Vec<ExtractedText> {
    let document = input.document();
    let mut pages = Vec::with_capacity(input.page_count());

    for (page_index, (&page_number, _)) in document.get_pages().iter().enumerate() {
        let text = match document.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(err) => {
                warn!(page_number, %err, "text extraction failed, recording empty page");
                String::new()
            }
        };
        pages.push(ExtractedText { page_index, text });
    }

    pages
}
