use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use cs_core::ports::FileReaderPort;

/// Local filesystem access for path candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileReader;

#[async_trait]
impl FileReaderPort for TokioFileReader {
    async fn is_readable_file(&self, path: &Path) -> bool {
        match fs::metadata(path).await {
            Ok(meta) if meta.is_file() => fs::File::open(path).await.is_ok(),
            _ => false,
        }
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
