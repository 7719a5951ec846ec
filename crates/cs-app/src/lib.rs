//! clipstash application layer
//!
//! Use cases that turn whatever is on the clipboard into a stored object:
//! resolve a candidate, classify it, derive its name and store it.

pub mod usecases;

pub use usecases::{
    ClassifyCandidate, ResolveContentSource, StoreContent, UploadClipboardContent, UploadOutcome,
};
