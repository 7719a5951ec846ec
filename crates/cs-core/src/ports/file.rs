use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait FileReaderPort: Send + Sync {
    /// True when `path` names an existing regular file the process can open.
    async fn is_readable_file(&self, path: &Path) -> bool;

    async fn read(&self, path: &Path) -> Result<Vec<u8>>;
}
