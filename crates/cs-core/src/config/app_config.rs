//! # Application configuration / 应用配置
//!
//! Built once at startup from key/value settings and passed explicitly to the
//! components that need it. Never mutated afterwards.
//! 启动时构建一次，之后只读。

use std::fmt;
use std::path::PathBuf;

/// Recognized configuration keys
pub mod keys {
    pub const PROJECT_ID: &str = "PROJECT_ID";
    pub const BUCKET_ID: &str = "BUCKET_ID";
    pub const JPEG_QUALITY: &str = "JPEG_QUALITY";
    pub const OBJECT_PREFIX: &str = "OBJECT_PREFIX";
    pub const STORAGE_ENDPOINT: &str = "STORAGE_ENDPOINT";
    pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
    pub const LOCAL_STORE_DIR: &str = "LOCAL_STORE_DIR";
}

pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://storage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Expected JPEG_QUALITY to be an integer, received {0:?}")]
    JpegQualityNotInteger(String),

    #[error("Expected JPEG_QUALITY to be between 1 and 100, received {0}")]
    JpegQualityOutOfRange(i64),
}

/// JPEG encoder quality, 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub const DEFAULT: JpegQuality = JpegQuality(90);

    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if (1..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConfigError::JpegQualityOutOfRange(value))
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::JpegQualityNotInteger(raw.to_string()))?;
        Self::new(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for JpegQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where objects go and how to reach the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// Base URL of the GCS XML API
    pub endpoint: String,
    /// Bearer token; resolved from the environment or gcloud when absent
    pub access_token: Option<String>,
    /// When set, objects are written to this directory instead of GCS
    pub local_store_dir: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_STORAGE_ENDPOINT.to_string(),
            access_token: None,
            local_store_dir: None,
        }
    }
}

// Keep tokens out of logs.
impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("endpoint", &self.endpoint)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("local_store_dir", &self.local_store_dir)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project_id: String,
    pub bucket_id: String,
    /// Prepended verbatim to every derived name
    pub object_prefix: Option<String>,
    pub jpeg_quality: JpegQuality,
    pub storage: StorageSettings,
}

impl AppConfig {
    /// Build from a key lookup (dotenv file, process environment, ...).
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id = get(keys::PROJECT_ID).ok_or(ConfigError::Missing(keys::PROJECT_ID))?;
        let bucket_id = get(keys::BUCKET_ID).ok_or(ConfigError::Missing(keys::BUCKET_ID))?;
        let jpeg_quality = match get(keys::JPEG_QUALITY) {
            Some(raw) => JpegQuality::parse(&raw)?,
            None => JpegQuality::DEFAULT,
        };

        Ok(Self {
            project_id,
            bucket_id,
            object_prefix: get(keys::OBJECT_PREFIX),
            jpeg_quality,
            storage: StorageSettings {
                endpoint: get(keys::STORAGE_ENDPOINT)
                    .map(|e| e.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_STORAGE_ENDPOINT.to_string()),
                access_token: get(keys::ACCESS_TOKEN),
                local_store_dir: get(keys::LOCAL_STORE_DIR).map(PathBuf::from),
            },
        })
    }
}
