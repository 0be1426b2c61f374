// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Blattwerk.

use thiserror::Error;

/// Top-level error type for all Blattwerk operations.
#[derive(Debug, Error)]
pub enum BlattwerkError {
    // -- Document errors --
    #[error("invalid document {source_id}: {detail}")]
    InvalidDocument {
        /// Path of the offending input, or a synthetic label for in-memory buffers.
        source_id: String,
        detail: String,
    },

    #[error("no input documents supplied")]
    EmptyInput,

    #[error("unsupported image encoding for object {object_id} on page {page_number}: {detail}")]
    UnsupportedImageEncoding {
        /// 1-based page number (matches the output file-naming contract).
        page_number: u32,
        object_id: u32,
        detail: String,
    },

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BlattwerkError {
    /// Convenience constructor for load/parse failures.
    pub fn invalid_document(source_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidDocument {
            source_id: source_id.into(),
            detail: detail.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BlattwerkError>;
