use serde::{Deserialize, Serialize};

/// Headers attached to an uploaded object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

impl ObjectMeta {
    /// `inline; filename="<name>"`, with `\` and `"` escaped.
    pub fn inline_disposition(filename: &str) -> String {
        let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
        format!("inline; filename=\"{escaped}\"")
    }
}
