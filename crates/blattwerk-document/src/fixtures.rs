// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic PDF fixtures shared by the unit tests. Documents are built
// object-by-object with lopdf so tests do not depend on binary assets.

use std::io::Write;

use lopdf::{Dictionary, Document, Object, Stream, dictionary};

/// Serialise a document to bytes.
pub(crate) fn to_bytes(document: &mut Document) -> Vec<u8> {
    let mut out = Vec::new();
    document.save_to(&mut out).expect("fixture save failed");
    out
}

/// Text of every page, in page order, trimmed. Empty string for pages with
/// no recoverable text.
pub(crate) fn page_texts(document: &Document) -> Vec<String> {
    document
        .get_pages()
        .keys()
        .map(|&number| {
            document
                .extract_text(&[number])
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .collect()
}

/// A document with one page per entry of `texts`. Pages with a non-empty
/// entry carry a content stream showing that text in Helvetica; pages with
/// an empty entry have no content stream at all. All pages share one font
/// object, so cross-document copies exercise shared-resource handling.
pub(crate) fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => Object::Dictionary(dictionary! {
                "Font" => Object::Dictionary(dictionary! {
                    "F1" => font_id,
                }),
            }),
        };
        if !text.is_empty() {
            let content = format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET");
            let content_id =
                doc.add_object(Object::Stream(Stream::new(Dictionary::new(), content.into_bytes())));
            page_dict.set("Contents", Object::Reference(content_id));
        }
        kids.push(doc.add_object(page_dict).into());
    }

    finish_page_tree(&mut doc, pages_id, kids)
}

/// A structurally valid document with zero pages.
pub(crate) fn empty_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    finish_page_tree(&mut doc, pages_id, Vec::new())
}

/// One embedded image for [`pdf_with_images`].
pub(crate) enum FixtureImage {
    /// DCTDecode stream with the given payload (passed through verbatim).
    Jpeg(Vec<u8>),
    /// Uncompressed 8-bit DeviceRGB samples.
    RawRgb {
        width: i64,
        height: i64,
        samples: Vec<u8>,
    },
    /// Flate-compressed 8-bit DeviceGray samples.
    FlateGray {
        width: i64,
        height: i64,
        samples: Vec<u8>,
    },
    /// A filter the extractor cannot pass through.
    CcittFax,
}

/// A document with one page per entry; each page embeds the given images as
/// XObject resources named `Im0`, `Im1`, ...
pub(crate) fn pdf_with_images(pages: &[&[FixtureImage]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for page_images in pages {
        let mut xobjects = Dictionary::new();
        for (index, img) in page_images.iter().enumerate() {
            let stream = match img {
                FixtureImage::Jpeg(data) => Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => 1i64,
                        "Height" => 1i64,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8i64,
                        "Filter" => "DCTDecode",
                    },
                    data.clone(),
                ),
                FixtureImage::RawRgb {
                    width,
                    height,
                    samples,
                } => Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => *width,
                        "Height" => *height,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8i64,
                    },
                    samples.clone(),
                ),
                FixtureImage::FlateGray {
                    width,
                    height,
                    samples,
                } => {
                    let mut encoder = flate2::write::ZlibEncoder::new(
                        Vec::new(),
                        flate2::Compression::default(),
                    );
                    encoder.write_all(samples).expect("fixture compression failed");
                    let compressed = encoder.finish().expect("fixture compression failed");
                    Stream::new(
                        dictionary! {
                            "Type" => "XObject",
                            "Subtype" => "Image",
                            "Width" => *width,
                            "Height" => *height,
                            "ColorSpace" => "DeviceGray",
                            "BitsPerComponent" => 8i64,
                            "Filter" => "FlateDecode",
                        },
                        compressed,
                    )
                }
                FixtureImage::CcittFax => Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => 1i64,
                        "Height" => 1i64,
                        "ColorSpace" => "DeviceGray",
                        "BitsPerComponent" => 1i64,
                        "Filter" => "CCITTFaxDecode",
                    },
                    vec![0u8],
                ),
            };
            let image_id = doc.add_object(Object::Stream(stream));
            xobjects.set(format!("Im{index}"), Object::Reference(image_id));
        }

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if !page_images.is_empty() {
            page_dict.set(
                "Resources",
                Object::Dictionary(dictionary! {
                    "XObject" => Object::Dictionary(xobjects),
                }),
            );
        }
        kids.push(doc.add_object(page_dict).into());
    }

    finish_page_tree(&mut doc, pages_id, kids)
}

fn finish_page_tree(doc: &mut Document, pages_id: lopdf::ObjectId, kids: Vec<Object>) -> Vec<u8> {
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    to_bytes(doc)
}

/// A tiny but plausible JPEG payload (SOI + EOI markers around filler).
pub(crate) fn fake_jpeg(tag: u8) -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, tag, 0x00, 0xFF, 0xD9]
}
