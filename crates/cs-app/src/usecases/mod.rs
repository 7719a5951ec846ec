//! Use cases
//!
//! ResolveContentSource → ClassifyCandidate → (hash) → StoreContent,
//! orchestrated by UploadClipboardContent.

pub mod classify_candidate;
pub mod resolve_content_source;
pub mod store_content;
pub mod upload_clipboard_content;

pub use classify_candidate::ClassifyCandidate;
pub use resolve_content_source::ResolveContentSource;
pub use store_content::StoreContent;
pub use upload_clipboard_content::{UploadClipboardContent, UploadOutcome};
