// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the presentation layer.
//
// Every technical error is mapped to plain English with a clear suggestion;
// the engine itself never prints or displays anything.

use crate::error::BlattwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must do something (pick a different file, free up the output path).
    ActionRequired,
    /// Cannot be fixed by retrying or user action — damaged file, unsupported data.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in a UI, exit text in a CLI).
    pub severity: Severity,
}

/// Convert a `BlattwerkError` into a `HumanError` suitable for direct display.
pub fn humanize_error(err: &BlattwerkError) -> HumanError {
    match err {
        BlattwerkError::InvalidDocument { source_id, .. } => HumanError {
            message: format!("There's a problem with the PDF file {source_id}."),
            suggestion: "The file may be damaged, encrypted, or not a PDF at all. \
                         Try opening it in a PDF viewer first to check it works."
                .into(),
            severity: Severity::Permanent,
        },

        BlattwerkError::EmptyInput => HumanError {
            message: "No input files were given.".into(),
            suggestion: "Select at least one PDF file, then try again.".into(),
            severity: Severity::ActionRequired,
        },

        BlattwerkError::UnsupportedImageEncoding {
            page_number,
            object_id,
            detail,
        } => HumanError {
            message: format!("An image on page {page_number} couldn't be extracted."),
            suggestion: format!(
                "Image object {object_id} can't be saved without re-encoding \
                 ({detail}). The remaining images were still extracted."
            ),
            severity: Severity::Permanent,
        },

        BlattwerkError::ImageError(detail) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: format!(
                "The image may be damaged or in an unusual format. ({detail})"
            ),
            severity: Severity::Permanent,
        },

        BlattwerkError::Io(detail) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!(
                "Check that the output folder exists and you have permission to \
                 write to it. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        BlattwerkError::Serialization(detail) => HumanError {
            message: "The result couldn't be formatted.".into(),
            suggestion: format!("This is an internal problem, not a problem with your files. ({detail})"),
            severity: Severity::Permanent,
        },
    }
}
