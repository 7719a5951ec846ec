//! HEIC/HEIF decoding, available with the `heif` feature.

use image::RgbImage;

use cs_core::{NormalizeError, Rejection};

const HEIF_BRANDS: &[&[u8; 4]] = &[
    b"heic", b"heix", b"hevc", b"hevx", b"heim", b"heis", b"mif1", b"msf1",
];

/// ISO-BMFF `ftyp` box with a HEIF major brand.
pub(super) fn looks_like_heif(bytes: &[u8]) -> bool {
    bytes.len() >= 12
        && &bytes[4..8] == b"ftyp"
        && HEIF_BRANDS.iter().any(|brand| &bytes[8..12] == brand.as_slice())
}

#[cfg(feature = "heif")]
pub(super) fn decode_to_rgb(bytes: &[u8]) -> Result<RgbImage, NormalizeError> {
    use anyhow::anyhow;
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let undecodable = |e: libheif_rs::HeifError| Rejection::UndecodableImage(e.to_string());

    let lib = LibHeif::new();
    let ctx = HeifContext::read_from_bytes(bytes).map_err(undecodable)?;
    let handle = ctx.primary_image_handle().map_err(undecodable)?;
    let decoded = lib
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(undecodable)?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| Rejection::UndecodableImage("no interleaved RGB plane".into()))?;

    let row_len = plane.width as usize * 3;
    let mut raw = Vec::with_capacity(row_len * plane.height as usize);
    for row in plane.data.chunks(plane.stride).take(plane.height as usize) {
        raw.extend_from_slice(&row[..row_len]);
    }

    RgbImage::from_raw(plane.width, plane.height, raw)
        .ok_or_else(|| anyhow!("heif plane does not match {}x{}", plane.width, plane.height).into())
}

#[cfg(not(feature = "heif"))]
pub(super) fn decode_to_rgb(_bytes: &[u8]) -> Result<RgbImage, NormalizeError> {
    Err(Rejection::UndecodableImage("built without HEIF support".into()).into())
}
