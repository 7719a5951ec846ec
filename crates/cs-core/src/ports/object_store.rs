use async_trait::async_trait;
use std::sync::Arc;

use super::errors::StoreError;
use crate::storage::{ObjectKey, ObjectMeta, StoreLocator};

#[async_trait]
pub trait ObjectStorePort: Send + Sync {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StoreError>;

    async fn put(&self, key: &ObjectKey, bytes: &[u8], meta: &ObjectMeta)
        -> Result<(), StoreError>;

    /// Locator for `key`; does not touch the backend.
    fn locate(&self, key: &ObjectKey) -> StoreLocator;
}

#[async_trait]
impl<T: ObjectStorePort + ?Sized> ObjectStorePort for Arc<T> {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StoreError> {
        (**self).exists(key).await
    }

    async fn put(
        &self,
        key: &ObjectKey,
        bytes: &[u8],
        meta: &ObjectMeta,
    ) -> Result<(), StoreError> {
        (**self).put(key, bytes, meta).await
    }

    fn locate(&self, key: &ObjectKey) -> StoreLocator {
        (**self).locate(key)
    }
}
