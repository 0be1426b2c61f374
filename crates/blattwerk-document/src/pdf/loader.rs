// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF loader — open a document from a path or byte buffer into a
// page-addressable structure, rejecting malformed input up front.

use std::path::Path;

use blattwerk_core::error::{BlattwerkError, Result};
use lopdf::Document;
use tracing::{debug, info, instrument};

/// Label used as the source identifier for documents loaded from memory.
const MEMORY_SOURCE: &str = "<memory>";

/// A loaded PDF document plus the identity of where it came from.
///
/// Wraps `lopdf::Document`. The wrapper owns the document exclusively; the
/// operations in this crate read from it and build new documents, never
/// mutating the original.
#[derive(Debug)]
pub struct PdfFile {
    document: Document,
    /// Source path, if opened from a file. `None` for in-memory buffers.
    source_path: Option<String>,
}

impl PdfFile {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let source_id = path_ref.display().to_string();
        let data = std::fs::read(path_ref).map_err(|err| {
            BlattwerkError::invalid_document(&source_id, format!("cannot read file: {err}"))
        })?;

        Self::load(&data, Some(source_id))
    }

    /// Load a PDF from raw bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::load(data, None)
    }

    /// Shared validation and parse path. Zero-length input and missing magic
    /// bytes are rejected before the structural parse is attempted, so the
    /// caller always sees `InvalidDocument` rather than a parser panic.
    fn load(data: &[u8], source_path: Option<String>) -> Result<Self> {
        let source_id = source_path.as_deref().unwrap_or(MEMORY_SOURCE);

        if data.is_empty() {
            return Err(BlattwerkError::invalid_document(source_id, "file is empty"));
        }
        if !data.starts_with(b"%PDF-") {
            return Err(BlattwerkError::invalid_document(
                source_id,
                "missing %PDF- header",
            ));
        }

        let document = Document::load_mem(data).map_err(|err| {
            BlattwerkError::invalid_document(source_id, format!("structural parse failed: {err}"))
        })?;

        if document.is_encrypted() {
            return Err(BlattwerkError::invalid_document(
                source_id,
                "encrypted documents are not supported",
            ));
        }

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self {
            document,
            source_path,
        })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Identifier of the offending input for error reporting: the source path,
    /// or a synthetic label for in-memory buffers.
    pub fn source_id(&self) -> &str {
        self.source_path.as_deref().unwrap_or(MEMORY_SOURCE)
    }

    /// Borrow the underlying lopdf document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
