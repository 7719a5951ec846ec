//! Configuration domain model

mod app_config;

pub use app_config::{keys, AppConfig, ConfigError, JpegQuality, StorageSettings};
