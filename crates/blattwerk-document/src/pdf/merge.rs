// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Merger — concatenate the pages of several documents into one.

use blattwerk_core::error::{BlattwerkError, Result};
use lopdf::{Document, ObjectId};
use tracing::{debug, info, instrument};

use super::builder::DocumentBuilder;
use super::loader::PdfFile;

/// Concatenate the pages of `inputs`, in the given order, into one new
/// document. Pages keep their original order within each input; the output
/// page count is the sum of the input page counts.
///
/// Fails fast: zero inputs is `EmptyInput`, and any page that cannot be
/// copied aborts the whole merge with the offending document's identifier.
/// A partially merged document is never returned — it would be misleading
/// output.
#[instrument(skip_all, fields(input_count = inputs.len()))]
pub fn merge_documents(inputs: &[PdfFile]) -> Result<Document> {
    if inputs.is_empty() {
        return Err(BlattwerkError::EmptyInput);
    }

    info!(input_count = inputs.len(), "Merging PDFs");

    let mut builder = DocumentBuilder::new();
    for input in inputs {
        // get_pages is keyed by 1-indexed page number; BTreeMap iteration
        // yields the pages in document order.
        let page_ids: Vec<ObjectId> = input.document().get_pages().values().copied().collect();
        builder.append_pages(input.document(), input.source_id(), &page_ids)?;
    }

    debug!(pages = builder.page_count(), "Merge complete");
    Ok(builder.finish())
}
