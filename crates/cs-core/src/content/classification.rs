use std::fmt;

use super::candidate::{DecodedImage, PathRef};
use super::rejection::Rejection;

/// Extension used when an opaque path has no suffix of its own.
const OPAQUE_DEFAULT_EXTENSION: &str = ".bin";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("extension must start with '.': {0:?}")]
    MissingDot(String),
    #[error("extension is empty")]
    Empty,
    #[error("extension contains a path separator: {0:?}")]
    PathSeparator(String),
}

/// File-extension token such as `.jpg`.
///
/// Always starts with a dot, has at least one character after it, and never
/// contains a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    pub fn parse(token: &str) -> Result<Self, ExtensionError> {
        let Some(rest) = token.strip_prefix('.') else {
            return Err(ExtensionError::MissingDot(token.to_string()));
        };
        if rest.is_empty() {
            return Err(ExtensionError::Empty);
        }
        if rest.contains('/') || rest.contains('\\') {
            return Err(ExtensionError::PathSeparator(token.to_string()));
        }
        Ok(Self(token.to_string()))
    }

    pub fn jpeg() -> Self {
        Self(".jpg".into())
    }

    pub fn json() -> Self {
        Self(".json".into())
    }

    pub fn csv() -> Self {
        Self(".csv".into())
    }

    pub fn sql() -> Self {
        Self(".sql".into())
    }

    pub fn html() -> Self {
        Self(".html".into())
    }

    pub fn text() -> Self {
        Self(".txt".into())
    }

    /// Opaque fallback: the path's own suffix, or `.bin` when it has none.
    pub fn for_opaque(path: &PathRef) -> Self {
        path.suffix()
            .and_then(|s| Self::parse(&s).ok())
            .unwrap_or_else(|| Self(OPAQUE_DEFAULT_EXTENSION.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a normalizer sees for one attempt.
#[derive(Debug, Clone, Copy)]
pub enum NormalizeInput<'a> {
    /// Pixels already decoded by the clipboard adapter.
    Pixels(&'a DecodedImage),
    /// A file read once up front; `text` is its UTF-8 decoding if it has one.
    File {
        path: &'a PathRef,
        bytes: &'a [u8],
        text: Option<&'a str>,
    },
    /// Raw clipboard text with no backing file.
    Text(&'a str),
}

impl<'a> NormalizeInput<'a> {
    /// Text view for text-format normalizers.
    pub fn text(&self) -> Result<&'a str, Rejection> {
        match *self {
            NormalizeInput::Pixels(_) => Err(Rejection::NotText),
            NormalizeInput::File { text: Some(t), .. } => Ok(t),
            NormalizeInput::File { text: None, .. } => Err(Rejection::NotUtf8),
            NormalizeInput::Text(t) => Ok(t),
        }
    }

    pub fn path(&self) -> Option<&'a PathRef> {
        match *self {
            NormalizeInput::File { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Output of a successful normalizer: canonical bytes and their extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub content: Vec<u8>,
    pub extension: Extension,
    /// Set when `content` was rendered from Markdown source.
    pub markdown_source: Option<String>,
}

impl Normalized {
    pub fn new(content: Vec<u8>, extension: Extension) -> Self {
        Self {
            content,
            extension,
            markdown_source: None,
        }
    }
}

/// Final outcome of classifying one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub content: Vec<u8>,
    pub extension: Extension,
    pub original_filename: Option<String>,
    /// Un-rendered Markdown text when the content is a rendered document.
    pub markdown_source: Option<String>,
}

impl ClassificationResult {
    pub fn from_normalized(normalized: Normalized, original_filename: Option<String>) -> Self {
        Self {
            content: normalized.content,
            extension: normalized.extension,
            original_filename,
            markdown_source: normalized.markdown_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_dotted_token() {
        assert_eq!(Extension::parse(".heic").unwrap().as_str(), ".heic");
    }

    #[test]
    fn test_parse_rejects_invalid_tokens() {
        assert_eq!(
            Extension::parse("jpg"),
            Err(ExtensionError::MissingDot("jpg".into()))
        );
        assert_eq!(Extension::parse("."), Err(ExtensionError::Empty));
        assert!(matches!(
            Extension::parse("./x"),
            Err(ExtensionError::PathSeparator(_))
        ));
    }

    #[test]
    fn test_opaque_extension_falls_back_to_bin() {
        let with_suffix = PathRef::new("/tmp/anim.gif");
        let without = PathRef::new("/tmp/blob");
        assert_eq!(Extension::for_opaque(&with_suffix).as_str(), ".gif");
        assert_eq!(Extension::for_opaque(&without).as_str(), ".bin");
    }

    #[test]
    fn test_text_view_of_inputs() {
        let path = PathRef::new("/tmp/a.bin");
        let binary = NormalizeInput::File {
            path: &path,
            bytes: &[0xff, 0xfe],
            text: None,
        };
        assert_eq!(binary.text(), Err(Rejection::NotUtf8));
        assert_eq!(NormalizeInput::Text("abc").text(), Ok("abc"));
        assert!(NormalizeInput::Text("abc").path().is_none());
    }
}
