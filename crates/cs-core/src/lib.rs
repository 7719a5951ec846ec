//! # cs-core
//!
//! Core domain models and classification policy for clipstash.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! candidates, classification results, content-derived names, the type registry,
//! configuration, and the ports implemented by `cs-infra` / `cs-platform`.

pub mod config;
pub mod content;
pub mod mime;
pub mod ports;
pub mod storage;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, ConfigError, JpegQuality, StorageSettings};
pub use content::{
    Candidate, ClassificationPolicy, ClassificationResult, ClassifyOptions, DecodedImage,
    DerivedName, Extension, ImageSourceFormat, NormalizeError, NormalizeInput, Normalized,
    NormalizerKind, PathRef, Rejection,
};
pub use storage::{ObjectKey, ObjectMeta, StoreLocator};
