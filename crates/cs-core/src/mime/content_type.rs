use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static MEDIA_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(text|image|audio|video|application|multipart|font|model)/[\w.+-]+$")
        .expect("media type pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentTypeError {
    #[error("invalid content type {0:?}: expected type/subtype, e.g. text/plain or image/png")]
    InvalidMediaType(String),
}

/// User-supplied content type that replaces the registry lookup.
///
/// The media type (before any `;` parameters) must match
/// `^(text|image|audio|video|application|multipart|font|model)/[\w.+-]+$`.
/// `text/*` values without a charset get `; charset=utf-8` appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeOverride(String);

impl ContentTypeOverride {
    pub fn parse(value: &str) -> Result<Self, ContentTypeError> {
        let value = value.trim();
        let media_type = value.split(';').next().unwrap_or_default().trim();
        if !MEDIA_TYPE_REGEX.is_match(media_type) {
            return Err(ContentTypeError::InvalidMediaType(value.to_string()));
        }

        let has_charset = value.to_ascii_lowercase().contains("charset=");
        if media_type.starts_with("text/") && !has_charset {
            Ok(Self(format!("{value}; charset=utf-8")))
        } else {
            Ok(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContentTypeOverride {
    type Err = ContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentTypeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
