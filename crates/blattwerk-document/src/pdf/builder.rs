// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document builder — assembles a new PDF from pages deep-copied out of
// existing documents. Merge and split are both thin layers over this.

use std::collections::HashMap;

use blattwerk_core::error::{BlattwerkError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use tracing::warn;

/// Builds a new document by appending pages cloned from source documents.
///
/// Each appended page's object graph (content streams, fonts, images, nested
/// resources) is copied into the output document. Within one `append_pages`
/// call, objects shared between pages of the same source are copied once and
/// re-referenced, so merging pages that share a font does not duplicate it.
pub(crate) struct DocumentBuilder {
    document: Document,
    /// Reserved id of the output /Pages node; the dictionary itself is only
    /// inserted in `finish` once the kid list is complete.
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Deep-copy the given pages of `source`, in the given order, onto the end
    /// of the output page sequence.
    ///
    /// `source_label` identifies the source document in errors. A page object
    /// that cannot be resolved is a hard failure; dangling references inside a
    /// page's object graph degrade to `Null` with a warning, matching how
    /// viewers treat them.
    pub fn append_pages(
        &mut self,
        source: &Document,
        source_label: &str,
        page_ids: &[ObjectId],
    ) -> Result<()> {
        let mut imported: HashMap<ObjectId, ObjectId> = HashMap::new();

        for &page_id in page_ids {
            let cloned_id = self.import_ref(source, page_id, &mut imported).ok_or_else(|| {
                BlattwerkError::invalid_document(
                    source_label,
                    format!("cannot read page object {page_id:?}"),
                )
            })?;

            // The page's /Parent was skipped during import; point it at the
            // output page tree.
            if let Ok(Object::Dictionary(page_dict)) = self.document.get_object_mut(cloned_id) {
                page_dict.set("Parent", Object::Reference(self.pages_id));
            }

            self.kids.push(Object::Reference(cloned_id));
        }

        Ok(())
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Install the /Pages node and catalog and return the finished document.
    pub fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        self.document
    }

    // -- Object graph import --------------------------------------------------

    /// Copy the object behind `id` into the output document, returning its new
    /// id. Already-imported objects are re-referenced via `imported`; the map
    /// entry is recorded before recursing so reference cycles terminate.
    fn import_ref(
        &mut self,
        source: &Document,
        id: ObjectId,
        imported: &mut HashMap<ObjectId, ObjectId>,
    ) -> Option<ObjectId> {
        if let Some(&mapped) = imported.get(&id) {
            return Some(mapped);
        }

        let object = match source.get_object(id) {
            Ok(object) => object,
            Err(err) => {
                warn!(?id, %err, "cannot resolve reference, dropping");
                return None;
            }
        };

        let new_id = self.document.new_object_id();
        imported.insert(id, new_id);

        let cloned = self.import_object(source, object, imported);
        self.document.objects.insert(new_id, cloned);
        Some(new_id)
    }

    fn import_object(
        &mut self,
        source: &Document,
        object: &Object,
        imported: &mut HashMap<ObjectId, ObjectId>,
    ) -> Object {
        match object {
            Object::Dictionary(dict) => {
                Object::Dictionary(self.import_dictionary(source, dict, imported))
            }
            Object::Array(items) => Object::Array(
                items
                    .iter()
                    .map(|item| self.import_object(source, item, imported))
                    .collect(),
            ),
            Object::Reference(id) => match self.import_ref(source, *id, imported) {
                Some(new_id) => Object::Reference(new_id),
                None => Object::Null,
            },
            Object::Stream(stream) => Object::Stream(lopdf::Stream::new(
                self.import_dictionary(source, &stream.dict, imported),
                stream.content.clone(),
            )),
            // Boolean, Integer, Real, String, Name, Null are plain values.
            other => other.clone(),
        }
    }

    fn import_dictionary(
        &mut self,
        source: &Document,
        dict: &Dictionary,
        imported: &mut HashMap<ObjectId, ObjectId>,
    ) -> Dictionary {
        let mut out = Dictionary::new();
        for (key, value) in dict.iter() {
            // Following /Parent would drag the whole source page tree along;
            // the caller re-parents appended pages instead.
            if key == b"Parent" {
                continue;
            }
            out.set(key.clone(), self.import_object(source, value, imported));
        }
        out
    }
}
