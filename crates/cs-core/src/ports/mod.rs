//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `cs-app` and the
//! implementations in `cs-infra` / `cs-platform`.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it represents a capability the use cases need and
//! it is implemented by the infrastructure or platform layer.

mod clipboard;
mod errors;
mod file;
mod hash;
mod normalizer;
mod object_store;

pub use clipboard::{ClipboardImage, SystemClipboardPort};
pub use errors::StoreError;
pub use file::FileReaderPort;
pub use hash::ContentHashPort;
pub use normalizer::ContentNormalizerPort;
pub use object_store::ObjectStorePort;
