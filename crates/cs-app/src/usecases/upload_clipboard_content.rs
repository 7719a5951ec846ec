use anyhow::Result;
use std::sync::Arc;

use cs_core::mime::ContentTypeOverride;
use cs_core::ports::{
    ContentHashPort, ContentNormalizerPort, FileReaderPort, ObjectStorePort, SystemClipboardPort,
};
use cs_core::{ClassificationPolicy, DerivedName, StoreLocator};

use super::{ClassifyCandidate, ResolveContentSource, StoreContent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Nothing on the clipboard classified; not an error.
    NothingToUpload,
    Stored {
        name: DerivedName,
        locator: StoreLocator,
    },
}

/// One full run: resolve, classify, name by content hash, store.
pub struct UploadClipboardContent<C, F, H, N, S>
where
    C: SystemClipboardPort,
    F: FileReaderPort,
    H: ContentHashPort,
    N: ContentNormalizerPort,
    S: ObjectStorePort,
{
    resolve: ResolveContentSource<C, F>,
    classify: ClassifyCandidate<F, N>,
    hasher: Arc<H>,
    store: StoreContent<S>,
}

impl<C, F, H, N, S> UploadClipboardContent<C, F, H, N, S>
where
    C: SystemClipboardPort,
    F: FileReaderPort,
    H: ContentHashPort,
    N: ContentNormalizerPort,
    S: ObjectStorePort,
{
    pub fn new(
        resolve: ResolveContentSource<C, F>,
        classify: ClassifyCandidate<F, N>,
        hasher: Arc<H>,
        store: StoreContent<S>,
    ) -> Self {
        Self {
            resolve,
            classify,
            hasher,
            store,
        }
    }

    /// Wire every use case from its ports.
    pub fn from_ports(
        clipboard: Arc<C>,
        files: Arc<F>,
        hasher: Arc<H>,
        normalizer: Arc<N>,
        store: Arc<S>,
        policy: ClassificationPolicy,
        object_prefix: Option<String>,
    ) -> Self {
        Self::new(
            ResolveContentSource::new(clipboard, files.clone()),
            ClassifyCandidate::new(files, normalizer, policy),
            hasher,
            StoreContent::new(store, object_prefix),
        )
    }

    pub async fn execute(
        &self,
        content_type_override: Option<&ContentTypeOverride>,
    ) -> Result<UploadOutcome> {
        let Some(candidate) = self.resolve.execute().await? else {
            tracing::info!("Clipboard holds no usable content");
            return Ok(UploadOutcome::NothingToUpload);
        };
        tracing::debug!(kind = ?candidate.kind(), "Resolved candidate");

        let Some(result) = self.classify.execute(&candidate).await? else {
            tracing::info!("No normalizer accepted the clipboard content");
            return Ok(UploadOutcome::NothingToUpload);
        };

        let name = DerivedName::new(&self.hasher.hash_hex(&result.content), &result.extension);
        if result.markdown_source.is_some() {
            tracing::debug!(name = %name, "Name derived from rendered Markdown");
        }

        let locator = self
            .store
            .execute(
                &result.content,
                &name,
                result.original_filename.as_deref(),
                content_type_override,
            )
            .await?;

        tracing::info!(name = %name, url = %locator.public_url, "Stored clipboard content");
        Ok(UploadOutcome::Stored { name, locator })
    }
}
