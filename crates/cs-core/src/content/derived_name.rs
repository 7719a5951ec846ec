use std::fmt;

use super::classification::Extension;

/// Content-derived object name: `hex(hash(content)) + extension`.
///
/// This is the deduplication key; it is always computed from normalized bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedName(String);

impl DerivedName {
    pub fn new(hash_hex: &str, extension: &Extension) -> Self {
        Self(format!("{hash_hex}{extension}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The extension part, used for content-type lookup.
    pub fn extension(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx..],
            None => "",
        }
    }
}

impl fmt::Display for DerivedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
