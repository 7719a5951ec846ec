//! Builds the use case graph from configuration.

use std::sync::Arc;

use cs_app::UploadClipboardContent;
use cs_core::ports::{ObjectStorePort, SystemClipboardPort};
use cs_core::{AppConfig, ClassificationPolicy, ClassifyOptions};
use cs_infra::fs::{FsObjectStore, TokioFileReader};
use cs_infra::gcs::GcsObjectStore;
use cs_infra::{FormatNormalizer, Md5Hasher};

pub type DynObjectStore = Arc<dyn ObjectStorePort>;

pub type ClipboardUpload<C> =
    UploadClipboardContent<C, TokioFileReader, Md5Hasher, FormatNormalizer, DynObjectStore>;

/// `LOCAL_STORE_DIR` selects the filesystem backend; GCS otherwise.
pub fn build_object_store(config: &AppConfig) -> DynObjectStore {
    match &config.storage.local_store_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Using local object store");
            Arc::new(FsObjectStore::new(dir.clone(), &config.bucket_id))
        }
        None => Arc::new(GcsObjectStore::from_config(config)),
    }
}

pub fn build_upload<C>(
    config: &AppConfig,
    clipboard: Arc<C>,
    options: ClassifyOptions,
) -> ClipboardUpload<C>
where
    C: SystemClipboardPort,
{
    UploadClipboardContent::from_ports(
        clipboard,
        Arc::new(TokioFileReader),
        Arc::new(Md5Hasher),
        Arc::new(FormatNormalizer::new(config.jpeg_quality)),
        Arc::new(build_object_store(config)),
        ClassificationPolicy::new(options),
        config.object_prefix.clone(),
    )
}
