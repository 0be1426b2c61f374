// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// blattwerk-document — the Blattwerk PDF engine.
//
// Provides the four document operations (merge, split, text extraction, image
// extraction) over `lopdf`, the output writer that serialises results under
// the fixed file-naming contract, and a raster image-format conversion helper.

pub mod convert;
pub mod output;
pub mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export the primary entry points so callers can use `blattwerk_document::PdfFile` etc.
pub use pdf::images::extract_images;
pub use pdf::loader::PdfFile;
pub use pdf::merge::merge_documents;
pub use pdf::split::split_document;
pub use pdf::text::extract_text;
