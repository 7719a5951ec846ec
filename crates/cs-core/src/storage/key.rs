use std::fmt;

use crate::content::DerivedName;

/// Storage key: optional namespace prefix followed by the derived name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn new(prefix: Option<&str>, name: &DerivedName) -> Self {
        Self(format!("{}{}", prefix.unwrap_or_default(), name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
