use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use cs_core::ports::{ObjectStorePort, StoreError};
use cs_core::{ObjectKey, ObjectMeta, StoreLocator};

const META_DIR: &str = ".meta";
const META_SUFFIX: &str = ".json";

/// Object store on the local filesystem.
///
/// Objects live at `<root>/<bucket>/<key>`; their headers are kept as JSON at
/// `<root>/.meta/<bucket>/<key>.json`.
pub struct FsObjectStore {
    root: PathBuf,
    bucket: String,
}

impl FsObjectStore {
    /// Create a new FsObjectStore rooted at the given filesystem path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// let store = cs_infra::fs::FsObjectStore::new(PathBuf::from("/tmp/clips"), "bucket");
    /// ```
    pub fn new(root: PathBuf, bucket: impl Into<String>) -> Self {
        Self {
            root,
            bucket: bucket.into(),
        }
    }

    fn object_path(&self, key: &ObjectKey) -> Result<PathBuf, StoreError> {
        Ok(self.root.join(&self.bucket).join(validate_key(key)?))
    }

    fn meta_path(&self, key: &ObjectKey) -> Result<PathBuf, StoreError> {
        let relative = validate_key(key)?;
        Ok(self
            .root
            .join(META_DIR)
            .join(&self.bucket)
            .join(format!("{}{META_SUFFIX}", relative.display())))
    }

    /// Read back the headers recorded for `key`.
    pub async fn read_meta(&self, key: &ObjectKey) -> Result<ObjectMeta, StoreError> {
        let bytes = fs::read(self.meta_path(key)?).await?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Io(e.into()))
    }
}

/// Keys may contain `/` but must stay inside the bucket directory.
fn validate_key(key: &ObjectKey) -> Result<&Path, StoreError> {
    let path = Path::new(key.as_str());
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if key.as_str().is_empty() || escapes {
        return Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("object key escapes the store: {key}"),
        )));
    }
    Ok(path)
}

async fn write_creating_parents(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, bytes).await?;
    Ok(())
}

#[async_trait]
impl ObjectStorePort for FsObjectStore {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StoreError> {
        Ok(fs::try_exists(self.object_path(key)?).await?)
    }

    async fn put(
        &self,
        key: &ObjectKey,
        bytes: &[u8],
        meta: &ObjectMeta,
    ) -> Result<(), StoreError> {
        let meta_bytes = serde_json::to_vec(meta).map_err(|e| StoreError::Io(e.into()))?;
        // Sidecar first: `exists` only sees objects whose headers are on disk.
        write_creating_parents(&self.meta_path(key)?, &meta_bytes).await?;
        write_creating_parents(&self.object_path(key)?, bytes).await?;
        tracing::debug!(key = %key, size_bytes = bytes.len(), "Wrote object to local store");
        Ok(())
    }

    fn locate(&self, key: &ObjectKey) -> StoreLocator {
        let path = self.root.join(&self.bucket).join(key.as_str());
        StoreLocator {
            public_url: format!("file://{}", path.display()),
            canonical_uri: format!("fs://{}/{}", self.bucket, key),
        }
    }
}
