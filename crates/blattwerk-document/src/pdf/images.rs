// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image extractor — embedded raster images with their native encoding
// preserved. JPEG and JPEG 2000 streams pass through byte-for-byte; raw or
// Flate-compressed sample data is wrapped losslessly into PNG.

use std::io::Cursor;

use blattwerk_core::types::{EmbeddedImage, ImageEncoding, ImageExtraction, SkippedImage};
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, instrument, warn};

use super::loader::PdfFile;

/// Enumerate every embedded raster image, page by page in document order.
///
/// Extraction is best-effort per image: an image whose encoding cannot be
/// passed through losslessly lands in `skipped` with the reason, and the
/// remaining images of the page (and document) are still extracted. Images
/// referenced by several pages are extracted once per referencing page, so
/// per-page provenance stays explicit in the output naming.
#[instrument(skip_all, fields(source = input.source_id(), pages = input.page_count()))]
pub fn extract_images(input: &PdfFile) -> ImageExtraction {
    let document = input.document();
    let mut result = ImageExtraction::default();

    for (page_index, &page_id) in document.get_pages().values().enumerate() {
        collect_page_images(document, page_id, page_index, &mut result);
    }

    debug!(
        images = result.images.len(),
        skipped = result.skipped.len(),
        "Image extraction complete"
    );
    result
}

fn collect_page_images(
    document: &Document,
    page_id: ObjectId,
    page_index: usize,
    out: &mut ImageExtraction,
) {
    let Some(resources) = resolve_resources(document, page_id) else {
        return;
    };
    let Some(xobjects) = dict_entry_as_dict(document, resources, b"XObject") else {
        return;
    };

    for (_, value) in xobjects.iter() {
        let Object::Reference(object_id) = value else {
            continue;
        };
        let Ok(Object::Stream(stream)) = document.get_object(*object_id) else {
            continue;
        };
        if !is_image_stream(&stream.dict) {
            continue;
        }

        match recover_image(document, stream) {
            Ok((encoding, data)) => out.images.push(EmbeddedImage {
                page_index,
                object_id: object_id.0,
                encoding,
                data,
            }),
            Err(reason) => {
                warn!(
                    page_index,
                    object_id = object_id.0,
                    reason,
                    "skipping image, cannot pass through losslessly"
                );
                out.skipped.push(SkippedImage {
                    page_index,
                    object_id: object_id.0,
                    reason,
                });
            }
        }
    }
}

fn is_image_stream(dict: &Dictionary) -> bool {
    matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Image")
}

/// Recover one image stream as (encoding, payload) or a skip reason.
fn recover_image(
    document: &Document,
    stream: &Stream,
) -> std::result::Result<(ImageEncoding, Vec<u8>), String> {
    match filter_names(&stream.dict).as_slice() {
        [name] if name == "DCTDecode" => Ok((ImageEncoding::Jpeg, stream.content.clone())),
        [name] if name == "JPXDecode" => Ok((ImageEncoding::Jpeg2000, stream.content.clone())),
        [] => wrap_samples_as_png(document, stream, stream.content.clone())
            .map(|png| (ImageEncoding::Png, png)),
        [name] if name == "FlateDecode" => {
            let samples = stream
                .decompressed_content()
                .map_err(|err| format!("cannot decompress samples: {err}"))?;
            wrap_samples_as_png(document, stream, samples).map(|png| (ImageEncoding::Png, png))
        }
        other => Err(other.join("+")),
    }
}

/// Losslessly wrap decoded 8-bit DeviceRGB/DeviceGray samples into a PNG
/// container. Anything else (palettes, ICC profiles, 1-bit art) is refused
/// rather than transcoded.
fn wrap_samples_as_png(
    document: &Document,
    stream: &Stream,
    mut samples: Vec<u8>,
) -> std::result::Result<Vec<u8>, String> {
    let width = dict_u32(&stream.dict, b"Width").ok_or("missing /Width")?;
    let height = dict_u32(&stream.dict, b"Height").ok_or("missing /Height")?;
    let bits = dict_u32(&stream.dict, b"BitsPerComponent").unwrap_or(8);
    if bits != 8 {
        return Err(format!("{bits}-bit samples"));
    }

    let color_space = resolve_color_space(document, &stream.dict);
    let (channels, build): (usize, fn(u32, u32, Vec<u8>) -> Option<DynamicImage>) =
        match color_space.as_deref() {
            Some("DeviceRGB") => (3, |w, h, buf| {
                image::RgbImage::from_raw(w, h, buf).map(DynamicImage::ImageRgb8)
            }),
            Some("DeviceGray") => (1, |w, h, buf| {
                image::GrayImage::from_raw(w, h, buf).map(DynamicImage::ImageLuma8)
            }),
            Some(other) => return Err(format!("colour space {other}")),
            None => return Err("missing /ColorSpace".into()),
        };

    let expected = width as usize * height as usize * channels;
    if samples.len() < expected {
        return Err(format!(
            "sample data too short: {} < {expected}",
            samples.len()
        ));
    }
    // Some producers pad the stream past the sample data.
    samples.truncate(expected);

    let img = build(width, height, samples).ok_or("sample buffer mismatch")?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|err| format!("PNG encoding failed: {err}"))?;
    Ok(png)
}

// -- Dictionary helpers -------------------------------------------------------

/// Page /Resources, following the /Parent inheritance chain when a page node
/// has none of its own.
fn resolve_resources(document: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut current = page_id;
    loop {
        let dict = document.get_object(current).ok()?.as_dict().ok()?;
        if let Ok(resources) = dict.get(b"Resources") {
            return match resources {
                Object::Reference(id) => document.get_object(*id).ok()?.as_dict().ok(),
                Object::Dictionary(resources) => Some(resources),
                _ => None,
            };
        }
        match dict.get(b"Parent") {
            Ok(Object::Reference(id)) => current = *id,
            _ => return None,
        }
    }
}

fn dict_entry_as_dict<'a>(
    document: &'a Document,
    dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Dictionary> {
    match dict.get(key).ok()? {
        Object::Dictionary(inner) => Some(inner),
        Object::Reference(id) => document.get_object(*id).ok()?.as_dict().ok(),
        _ => None,
    }
}

fn dict_u32(dict: &Dictionary, key: &[u8]) -> Option<u32> {
    dict.get(key).ok()?.as_i64().ok()?.try_into().ok()
}

/// The stream's /Filter as a list of names (handles both the single-name and
/// the array form; an empty list means no filter).
fn filter_names(dict: &Dictionary) -> Vec<String> {
    match dict.get(b"Filter") {
        Ok(Object::Name(name)) => vec![String::from_utf8_lossy(name).into_owned()],
        Ok(Object::Array(items)) => items
            .iter()
            .map(|item| match item {
                Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
                other => format!("{other:?}"),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// /ColorSpace as a readable label, resolving one level of indirection.
/// Array-form colour spaces (ICCBased, Indexed, ...) report their family name.
fn resolve_color_space(document: &Document, dict: &Dictionary) -> Option<String> {
    let value = match dict.get(b"ColorSpace").ok()? {
        Object::Reference(id) => document.get_object(*id).ok()?,
        direct => direct,
    };
    match value {
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::Array(items) => match items.first() {
            Some(Object::Name(name)) => Some(String::from_utf8_lossy(name).into_owned()),
            _ => None,
        },
        _ => None,
    }
}
