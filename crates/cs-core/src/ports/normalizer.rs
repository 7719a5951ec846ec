use crate::content::{NormalizeError, NormalizeInput, Normalized, NormalizerKind};

/// Runs one normalizer stage against an input.
///
/// Implementations map each [`NormalizerKind`] to its normalize function; the
/// order in which stages run is decided by `ClassificationPolicy`.
pub trait ContentNormalizerPort: Send + Sync {
    fn normalize(
        &self,
        kind: NormalizerKind,
        input: &NormalizeInput<'_>,
    ) -> Result<Normalized, NormalizeError>;
}
