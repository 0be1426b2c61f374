// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Blattwerk PDF engine.

use serde::{Deserialize, Serialize};

/// Native container format of an embedded raster image.
///
/// The engine never transcodes image payloads: JPEG and JPEG 2000 streams are
/// passed through byte-for-byte, and uncompressed/Flate sample data is wrapped
/// losslessly into a PNG container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageEncoding {
    Jpeg,
    Jpeg2000,
    Png,
}

impl ImageEncoding {
    /// File extension used in output filenames.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Jpeg2000 => "jp2",
            Self::Png => "png",
        }
    }
}

/// A raster image extracted from one page of a document.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    /// 0-based index of the page that references this image.
    pub page_index: usize,
    /// PDF object number of the image XObject — unique within one page's
    /// image set, not across the whole document.
    pub object_id: u32,
    pub encoding: ImageEncoding,
    /// Encoded payload in its native container format.
    pub data: Vec<u8>,
}

impl EmbeddedImage {
    /// Deterministic output filename: `image_page_{N}_{objectId}.{ext}` with
    /// a 1-based page number.
    pub fn file_name(&self) -> String {
        format!(
            "image_page_{}_{}.{}",
            self.page_index + 1,
            self.object_id,
            self.encoding.extension()
        )
    }
}

/// An embedded image the extractor could not losslessly pass through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedImage {
    /// 0-based index of the referencing page.
    pub page_index: usize,
    pub object_id: u32,
    /// What defeated extraction (e.g. `CCITTFaxDecode`, an odd colour space).
    pub reason: String,
}

impl SkippedImage {
    /// The typed error this record stands for, for presentation layers that
    /// report per-image failures through the common error path.
    pub fn to_error(&self) -> crate::error::BlattwerkError {
        crate::error::BlattwerkError::UnsupportedImageEncoding {
            page_number: self.page_index as u32 + 1,
            object_id: self.object_id,
            detail: self.reason.clone(),
        }
    }
}

/// Result of one image-extraction call: recovered images plus per-image
/// failures. A failure on one image never aborts the rest of the document.
#[derive(Debug, Clone, Default)]
pub struct ImageExtraction {
    pub images: Vec<EmbeddedImage>,
    pub skipped: Vec<SkippedImage>,
}

/// Text recovered from one page. `text` is empty when the page has no
/// extractable text layer — that is a valid entry, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// 0-based page index.
    pub page_index: usize,
    pub text: String,
}

/// Target formats for the image-conversion helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
}

impl RasterFormat {
    /// File extension for converted output.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Tiff => "tiff",
        }
    }

    /// Parse a user-supplied format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }
}

impl std::fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Per-operation success report handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationSummary {
    Merged {
        input_documents: usize,
        pages: usize,
        output: String,
    },
    Split {
        pages: usize,
        output_dir: String,
    },
    TextExtracted {
        pages: usize,
        output: String,
    },
    ImagesExtracted {
        images: usize,
        skipped: usize,
        output_dir: String,
    },
    ImagesConverted {
        converted: usize,
        failed: usize,
        output_dir: String,
    },
}
