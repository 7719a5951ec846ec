use std::fmt;
use std::path::{Path, PathBuf};

/// Bitmap format declared by the producer of an in-memory image.
///
/// Clipboard backends hand out PNG, or GIF when the owner advertised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSourceFormat {
    Png,
    Gif,
}

impl ImageSourceFormat {
    /// GIF may carry animation; re-encoding would keep only the first frame.
    pub fn is_excluded_from_reencode(self) -> bool {
        matches!(self, ImageSourceFormat::Gif)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageSourceFormat::Png => "png",
            ImageSourceFormat::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageSourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("rgba buffer has {actual} bytes, expected {expected} for {width}x{height}")]
pub struct ImageBufferError {
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

/// Decoded 8-bit RGBA pixels plus the format they were declared as.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    source_format: ImageSourceFormat,
}

impl DecodedImage {
    pub fn from_rgba(
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        source_format: ImageSourceFormat,
    ) -> Result<Self, ImageBufferError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageBufferError {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
            source_format,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn source_format(&self) -> ImageSourceFormat {
        self.source_format
    }
}

// Pixel buffers are large; keep Debug output readable.
impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .field("source_format", &self.source_format)
            .finish()
    }
}

/// A readable regular file named by clipboard content, not yet read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRef {
    path: PathBuf,
}

impl PathRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
    }

    /// The verbatim final suffix including the leading dot (`photo.HEIC` -> `.HEIC`).
    ///
    /// Dotfiles like `.bashrc` and names ending in a bare dot have no suffix.
    pub fn suffix(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{e}"))
    }

    /// Lowercased suffix for policy decisions.
    pub fn suffix_lower(&self) -> Option<String> {
        self.suffix().map(|s| s.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Image,
    Text,
    Path,
}

/// One unit of content considered for upload.
/// 一次运行中唯一的候选内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Image(DecodedImage),
    Text(String),
    Path(PathRef),
}

impl Candidate {
    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Image(_) => CandidateKind::Image,
            Candidate::Text(_) => CandidateKind::Text,
            Candidate::Path(_) => CandidateKind::Path,
        }
    }
}
