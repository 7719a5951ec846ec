use anyhow::Result;

use crate::content::DecodedImage;

pub type ClipboardImage = DecodedImage;

/// System clipboard, read and written synchronously.
pub trait SystemClipboardPort: Send + Sync {
    /// File references placed on the clipboard by a file manager, as paths.
    fn read_files(&self) -> Result<Vec<String>>;

    /// Bitmap content, if the clipboard holds an image.
    fn read_image(&self) -> Result<Option<ClipboardImage>>;

    /// Text content, if any.
    fn read_text(&self) -> Result<Option<String>>;

    fn write_text(&self, text: &str) -> Result<()>;
}
