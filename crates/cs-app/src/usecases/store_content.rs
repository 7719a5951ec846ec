use anyhow::{Context, Result};
use std::sync::Arc;

use cs_core::mime::{content_type_for_extension, ContentTypeOverride};
use cs_core::ports::ObjectStorePort;
use cs_core::{DerivedName, ObjectKey, ObjectMeta, StoreLocator};

/// Store classified bytes under their content-derived key.
///
/// An object that already exists is not uploaded again; its locator is
/// returned as-is. The check-then-put race between concurrent runs is
/// tolerated since both would write identical bytes.
pub struct StoreContent<S>
where
    S: ObjectStorePort,
{
    store: Arc<S>,
    object_prefix: Option<String>,
}

impl<S> StoreContent<S>
where
    S: ObjectStorePort,
{
    pub fn new(store: Arc<S>, object_prefix: Option<String>) -> Self {
        Self {
            store,
            object_prefix,
        }
    }

    pub async fn execute(
        &self,
        content: &[u8],
        name: &DerivedName,
        original_filename: Option<&str>,
        content_type_override: Option<&ContentTypeOverride>,
    ) -> Result<StoreLocator> {
        let key = ObjectKey::new(self.object_prefix.as_deref(), name);

        if self
            .store
            .exists(&key)
            .await
            .with_context(|| format!("Failed to check for existing object {key}"))?
        {
            tracing::info!(key = %key, "Object already stored, skipping upload");
            return Ok(self.store.locate(&key));
        }

        let meta = ObjectMeta {
            content_type: resolve_content_type(name, content_type_override),
            content_disposition: original_filename.map(ObjectMeta::inline_disposition),
        };
        self.store
            .put(&key, content, &meta)
            .await
            .with_context(|| format!("Failed to upload {key}"))?;

        Ok(self.store.locate(&key))
    }
}

/// Override first, then the registry; unknown extensions get no content type.
fn resolve_content_type(
    name: &DerivedName,
    content_type_override: Option<&ContentTypeOverride>,
) -> Option<String> {
    if let Some(value) = content_type_override {
        return Some(value.as_str().to_string());
    }
    match content_type_for_extension(name.extension()) {
        Ok(content_type) => Some(content_type),
        Err(e) => {
            tracing::debug!(error = %e, "Uploading without content type");
            None
        }
    }
}
