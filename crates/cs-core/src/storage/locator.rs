use serde::{Deserialize, Serialize};

/// Where a stored object can be reached.
///
/// Serialized as `{"public_url": ..., "gcs_uri": ...}` for stdout output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLocator {
    pub public_url: String,
    #[serde(rename = "gcs_uri")]
    pub canonical_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let locator = StoreLocator {
            public_url: "https://storage.googleapis.com/b/k.txt".into(),
            canonical_uri: "gs://b/k.txt".into(),
        };
        let json = serde_json::to_string(&locator).unwrap();
        assert_eq!(
            json,
            r#"{"public_url":"https://storage.googleapis.com/b/k.txt","gcs_uri":"gs://b/k.txt"}"#
        );
    }
}
