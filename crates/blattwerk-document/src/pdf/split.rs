// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Splitter — one single-page document per page of the input.

use blattwerk_core::error::Result;
use lopdf::Document;
use tracing::{info, instrument};

use super::builder::DocumentBuilder;
use super::loader::PdfFile;

/// Split `input` into one single-page document per page, in ascending page
/// order, each carrying a deep copy of its page's content and resources.
///
/// A zero-page document yields an empty vector — that is not an error. The
/// sequence order drives the `page_{N}.pdf` output naming downstream.
#[instrument(skip_all, fields(source = input.source_id(), pages = input.page_count()))]
pub fn split_document(input: &PdfFile) -> Result<Vec<Document>> {
    let pages = input.document().get_pages();
    let mut documents = Vec::with_capacity(pages.len());

    for &page_id in pages.values() {
        let mut builder = DocumentBuilder::new();
        builder.append_pages(input.document(), input.source_id(), &[page_id])?;
        documents.push(builder.finish());
    }

    info!(documents = documents.len(), "Split complete");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::pdf::merge::merge_documents;

    #[test]
    fn produces_one_document_per_page() {
        let input = PdfFile::from_bytes(&fixtures::pdf_with_pages(&["P1", "P2", "P3"])).unwrap();

        let parts = split_document(&input).unwrap();
        assert_eq!(parts.len(), 3);

        for (index, part) in parts.iter().enumerate() {
            assert_eq!(part.get_pages().len(), 1);
            assert_eq!(fixtures::page_texts(part), vec![format!("P{}", index + 1)]);
        }
    }

    #[test]
    fn zero_page_document_splits_into_nothing() {
        let input = PdfFile::from_bytes(&fixtures::empty_pdf()).unwrap();
        let parts = split_document(&input).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn split_then_merge_reconstructs_the_page_sequence() {
        let texts = ["R1", "R2", "R3", "R4"];
        let input = PdfFile::from_bytes(&fixtures::pdf_with_pages(&texts)).unwrap();

        let parts = split_document(&input)
            .unwrap()
            .into_iter()
            .map(|mut part| PdfFile::from_bytes(&fixtures::to_bytes(&mut part)).unwrap())
            .collect::<Vec<_>>();

        let merged = merge_documents(&parts).unwrap();
        assert_eq!(merged.get_pages().len(), input.page_count());
        assert_eq!(fixtures::page_texts(&merged), texts);
    }
}
