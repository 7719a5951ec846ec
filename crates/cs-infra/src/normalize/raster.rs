//! Bitmap normalizer: decode, drop alpha, re-encode as JPEG.

use anyhow::{anyhow, Context};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::io::Cursor;

use cs_core::{
    DecodedImage, Extension, JpegQuality, NormalizeError, NormalizeInput, Normalized,
    NormalizerKind, Rejection,
};

use super::heif;

pub(super) fn normalize(
    input: &NormalizeInput<'_>,
    quality: JpegQuality,
) -> Result<Normalized, NormalizeError> {
    let rgb = match *input {
        NormalizeInput::Pixels(image) => pixels_to_rgb(image)?,
        NormalizeInput::File { bytes, .. } => decode_to_rgb(bytes)?,
        NormalizeInput::Text(_) => {
            return Err(Rejection::NotApplicable(NormalizerKind::Image).into());
        }
    };

    let content = encode_jpeg(&rgb, quality)?;
    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        quality = quality.get(),
        size_bytes = content.len(),
        "Re-encoded bitmap as JPEG"
    );
    Ok(Normalized::new(content, Extension::jpeg()))
}

fn pixels_to_rgb(image: &DecodedImage) -> Result<RgbImage, NormalizeError> {
    let format = image.source_format();
    if format.is_excluded_from_reencode() {
        return Err(Rejection::ExcludedImageFormat(format.to_string()).into());
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(Rejection::UndecodableImage("empty bitmap".into()).into());
    }

    let rgba = RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", image.width(), image.height()))?;
    Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
}

fn decode_to_rgb(bytes: &[u8]) -> Result<RgbImage, NormalizeError> {
    if heif::looks_like_heif(bytes) {
        return heif::decode_to_rgb(bytes);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("probe image format")?;
    let Some(format) = reader.format() else {
        return Err(Rejection::NotAnImage.into());
    };
    if format == ImageFormat::Gif {
        return Err(Rejection::ExcludedImageFormat("gif".into()).into());
    }

    let decoded = reader
        .decode()
        .map_err(|e| Rejection::UndecodableImage(e.to_string()))?;
    Ok(decoded.to_rgb8())
}

fn encode_jpeg(rgb: &RgbImage, quality: JpegQuality) -> Result<Vec<u8>, NormalizeError> {
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality.get());
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8.into())
        .context("encode bitmap to jpeg")?;
    Ok(out)
}
