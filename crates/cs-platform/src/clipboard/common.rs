use anyhow::{anyhow, Context, Result};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use cs_core::{DecodedImage, ImageSourceFormat};

pub(super) fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// Convert a file-manager entry to a local path.
///
/// Accepts `file:///abs/path`, `file://localhost/abs/path` and bare paths.
/// Other URI schemes yield `None`.
pub fn file_uri_to_path(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    let Some(rest) = entry.strip_prefix("file://") else {
        return (!entry.contains("://")).then(|| entry.to_string());
    };
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    urlencoding::decode(rest).ok().map(|p| p.into_owned())
}

/// Decode PNG bytes exported by the clipboard into RGBA pixels.
pub fn png_to_decoded_image(png: &[u8]) -> Result<DecodedImage> {
    let rgba = image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .context("Failed to decode clipboard PNG")?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    DecodedImage::from_rgba(width, height, rgba.into_raw(), ImageSourceFormat::Png)
        .map_err(|e| anyhow!(e))
}

pub(super) struct CommonClipboardImpl;

impl CommonClipboardImpl {
    pub fn read_files(ctx: &ClipboardContext) -> Result<Vec<String>> {
        if !ctx.has(ContentFormat::Files) {
            return Ok(Vec::new());
        }
        let files = map_clipboard_err(ctx.get_files())?;
        Ok(files.iter().filter_map(|f| file_uri_to_path(f)).collect())
    }

    pub fn read_image(ctx: &ClipboardContext) -> Result<Option<DecodedImage>> {
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }
        let image = map_clipboard_err(ctx.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        png_to_decoded_image(png.get_bytes()).map(Some)
    }

    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        let text = map_clipboard_err(ctx.get_text())?;
        Ok((!text.is_empty()).then_some(text))
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<()> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }
}
