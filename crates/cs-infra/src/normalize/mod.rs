//! Format normalizers
//! 格式规范化器
//!
//! Each submodule validates one format and produces canonical bytes, or
//! rejects. [`FormatNormalizer`] maps a [`NormalizerKind`] to its function;
//! the order stages run in is owned by `ClassificationPolicy`.

mod csv;
mod heif;
mod html;
mod json;
mod json_layout;
mod markdown;
mod raster;
mod sql;
mod text;

use cs_core::ports::ContentNormalizerPort;
use cs_core::{JpegQuality, NormalizeError, NormalizeInput, Normalized, NormalizerKind};

pub use json_layout::JsonLayout;

/// Normalizer set configured for one run.
#[derive(Debug, Clone, Copy)]
pub struct FormatNormalizer {
    jpeg_quality: JpegQuality,
}

impl FormatNormalizer {
    pub fn new(jpeg_quality: JpegQuality) -> Self {
        Self { jpeg_quality }
    }
}

impl ContentNormalizerPort for FormatNormalizer {
    fn normalize(
        &self,
        kind: NormalizerKind,
        input: &NormalizeInput<'_>,
    ) -> Result<Normalized, NormalizeError> {
        match kind {
            NormalizerKind::Image => raster::normalize(input, self.jpeg_quality),
            NormalizerKind::Json => json::normalize(input),
            NormalizerKind::Csv => csv::normalize(input),
            NormalizerKind::Sql => sql::normalize(input),
            NormalizerKind::Html => html::normalize(input),
            NormalizerKind::Markdown => markdown::normalize(input),
            NormalizerKind::Text => text::normalize(input),
        }
    }
}
