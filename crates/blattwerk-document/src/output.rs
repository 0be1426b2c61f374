// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output writer — serialises operation results to the filesystem under the
// fixed naming contract. Every file goes through a temp file in the target
// directory and an atomic rename, so an interrupted run never leaves a
// half-written artefact at the destination path.

use std::io::Write;
use std::path::Path;

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::types::{EmbeddedImage, ExtractedText};
use lopdf::Document;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{info, instrument};

/// Options for text output.
///
/// The default reproduces the historical behaviour of writing page texts
/// back-to-back with no separator. `page_separator` opts into an explicit
/// boundary marker between pages instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextOutputOptions {
    pub page_separator: Option<String>,
}

/// Serialise a single document to the caller-specified path.
#[instrument(skip(document), fields(path = %path.as_ref().display()))]
pub fn write_document(document: &mut Document, path: impl AsRef<Path>) -> Result<()> {
    let mut bytes = Vec::new();
    document
        .save_to(&mut bytes)
        .map_err(|err| BlattwerkError::Io(std::io::Error::other(format!(
            "failed to serialise PDF: {err}"
        ))))?;

    write_atomic(path.as_ref(), &bytes)?;
    info!(bytes = bytes.len(), "Document written");
    Ok(())
}

/// Write one `page_{N}.pdf` per document into `dir`, `N` 1-based and
/// following the sequence order. Returns the number of files written.
#[instrument(skip(documents), fields(dir = %dir.as_ref().display(), count = documents.len()))]
pub fn write_split(documents: Vec<Document>, dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();
    let count = documents.len();

    for (index, mut document) in documents.into_iter().enumerate() {
        write_document(&mut document, dir.join(format!("page_{}.pdf", index + 1)))?;
    }

    info!(files = count, "Split output written");
    Ok(count)
}

/// Concatenate page texts into a single UTF-8 file at `path`.
#[instrument(skip(pages, options), fields(path = %path.as_ref().display(), pages = pages.len()))]
pub fn write_text(
    pages: &[ExtractedText],
    path: impl AsRef<Path>,
    options: &TextOutputOptions,
) -> Result<()> {
    let mut content = String::new();
    for (index, page) in pages.iter().enumerate() {
        if index > 0
            && let Some(separator) = &options.page_separator
        {
            content.push_str(separator);
        }
        content.push_str(&page.text);
    }

    write_atomic(path.as_ref(), content.as_bytes())?;
    info!(bytes = content.len(), "Text written");
    Ok(())
}

/// Write each image as `image_page_{N}_{objectId}.{ext}` into `dir`.
/// Returns the number of files written.
#[instrument(skip(images), fields(dir = %dir.as_ref().display(), count = images.len()))]
pub fn write_images(images: &[EmbeddedImage], dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();

    for img in images {
        write_atomic(&dir.join(img.file_name()), &img.data)?;
    }

    info!(files = images.len(), "Images written");
    Ok(images.len())
}

/// Write bytes through a temp file in the destination directory, then move
/// into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path)
        .map_err(|err| BlattwerkError::Io(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::pdf::loader::PdfFile;
    use crate::pdf::split::split_document;
    use blattwerk_core::types::ImageEncoding;

    #[test]
    fn split_files_follow_the_naming_contract() {
        let input = PdfFile::from_bytes(&fixtures::pdf_with_pages(&["a", "b", "c"])).unwrap();
        let parts = split_document(&input).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let written = write_split(parts, dir.path()).unwrap();
        assert_eq!(written, 3);

        for n in 1..=3 {
            let path = dir.path().join(format!("page_{n}.pdf"));
            assert!(path.exists(), "missing {}", path.display());
            // Each part must load back as a valid one-page PDF.
            assert_eq!(PdfFile::open(&path).unwrap().page_count(), 1);
        }
    }

    #[test]
    fn text_defaults_to_back_to_back_concatenation() {
        let pages = vec![
            ExtractedText { page_index: 0, text: "one".into() },
            ExtractedText { page_index: 1, text: "two".into() },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&pages, &path, &TextOutputOptions::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "onetwo");
    }

    #[test]
    fn text_separator_marks_page_boundaries() {
        let pages = vec![
            ExtractedText { page_index: 0, text: "one".into() },
            ExtractedText { page_index: 1, text: String::new() },
            ExtractedText { page_index: 2, text: "three".into() },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let options = TextOutputOptions {
            page_separator: Some("\n\n".into()),
        };
        write_text(&pages, &path, &options).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\n\n\n\nthree");
    }

    #[test]
    fn image_files_follow_the_naming_contract() {
        let images = vec![
            EmbeddedImage {
                page_index: 0,
                object_id: 4,
                encoding: ImageEncoding::Jpeg,
                data: fixtures::fake_jpeg(1),
            },
            EmbeddedImage {
                page_index: 2,
                object_id: 9,
                encoding: ImageEncoding::Png,
                data: vec![1, 2, 3],
            },
        ];
        let dir = tempfile::tempdir().unwrap();

        let written = write_images(&images, dir.path()).unwrap();
        assert_eq!(written, 2);
        assert!(dir.path().join("image_page_1_4.jpg").exists());
        assert!(dir.path().join("image_page_3_9.png").exists());
    }

    #[test]
    fn write_document_to_unwritable_dir_is_an_io_error() {
        let input = PdfFile::from_bytes(&fixtures::pdf_with_pages(&["a"])).unwrap();
        let mut parts = split_document(&input).unwrap();

        let err = write_document(&mut parts[0], "/nonexistent-dir/out.pdf").unwrap_err();
        assert!(matches!(err, BlattwerkError::Io(_)));
    }
}
