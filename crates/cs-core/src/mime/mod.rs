//! Content-type handling: the extension registry and `--content-type` overrides.

mod content_type;
mod registry;

pub use content_type::{ContentTypeError, ContentTypeOverride};
pub use registry::{content_type_for_extension, RegistryError};
