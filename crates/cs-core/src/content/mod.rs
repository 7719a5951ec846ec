//! Content domain: what a candidate is, how it was classified, and what it is called.
//! 内容领域：候选内容、分类结果与内容派生名称。

mod candidate;
mod classification;
mod derived_name;
mod path_text;
mod policy;
mod rejection;

pub use candidate::{Candidate, CandidateKind, DecodedImage, ImageBufferError, ImageSourceFormat, PathRef};
pub use classification::{
    ClassificationResult, Extension, ExtensionError, NormalizeInput, Normalized,
};
pub use derived_name::DerivedName;
pub use path_text::{normalize_clipboard_path, remove_surrounding_quotes, unescape_shell_path};
pub use policy::{ClassificationPolicy, ClassifyOptions, NormalizerKind};
pub use rejection::{NormalizeError, Rejection};
