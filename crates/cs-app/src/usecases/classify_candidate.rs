use anyhow::Result;
use std::sync::Arc;

use cs_core::ports::{ContentNormalizerPort, FileReaderPort};
use cs_core::{
    Candidate, ClassificationPolicy, ClassificationResult, Extension, NormalizeError,
    NormalizeInput, Normalized, PathRef,
};

/// Run a candidate through its normalizer chain.
///
/// The first normalizer that accepts wins. Rejections are expected and only
/// logged; a `Failed` normalizer aborts classification. Path candidates that
/// nothing accepts are stored opaquely under their own suffix. A path that can
/// no longer be read classifies as nothing.
pub struct ClassifyCandidate<F, N>
where
    F: FileReaderPort,
    N: ContentNormalizerPort,
{
    files: Arc<F>,
    normalizer: Arc<N>,
    policy: ClassificationPolicy,
}

impl<F, N> ClassifyCandidate<F, N>
where
    F: FileReaderPort,
    N: ContentNormalizerPort,
{
    pub fn new(files: Arc<F>, normalizer: Arc<N>, policy: ClassificationPolicy) -> Self {
        Self {
            files,
            normalizer,
            policy,
        }
    }

    /// `Ok(None)` means nothing in the chain accepted and no fallback applies.
    pub async fn execute(&self, candidate: &Candidate) -> Result<Option<ClassificationResult>> {
        match candidate {
            Candidate::Image(image) => self.run_chain(candidate, &NormalizeInput::Pixels(image)),
            Candidate::Text(text) => self.run_chain(candidate, &NormalizeInput::Text(text)),
            Candidate::Path(path) => self.classify_path(candidate, path).await,
        }
    }

    async fn classify_path(
        &self,
        candidate: &Candidate,
        path: &PathRef,
    ) -> Result<Option<ClassificationResult>> {
        // Read once; every stage sees the same bytes.
        let bytes = match self.files.read(path.path()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    path = %path.path().display(),
                    error = %format!("{e:#}"),
                    "Candidate file became unreadable, skipping"
                );
                return Ok(None);
            }
        };
        let text = std::str::from_utf8(&bytes).ok();
        let input = NormalizeInput::File {
            path,
            bytes: &bytes,
            text,
        };

        let original_filename = path.file_name();
        if let Some(normalized) = self.first_accepted(candidate, &input)? {
            return Ok(Some(ClassificationResult::from_normalized(
                normalized,
                original_filename,
            )));
        }

        if !self.policy.allows_opaque_fallback(candidate) {
            return Ok(None);
        }
        let extension = Extension::for_opaque(path);
        tracing::info!(
            path = %path.path().display(),
            extension = %extension,
            "No format matched, storing file verbatim"
        );
        Ok(Some(ClassificationResult::from_normalized(
            Normalized::new(bytes, extension),
            original_filename,
        )))
    }

    fn run_chain(
        &self,
        candidate: &Candidate,
        input: &NormalizeInput<'_>,
    ) -> Result<Option<ClassificationResult>> {
        Ok(self
            .first_accepted(candidate, input)?
            .map(|normalized| ClassificationResult::from_normalized(normalized, None)))
    }

    fn first_accepted(
        &self,
        candidate: &Candidate,
        input: &NormalizeInput<'_>,
    ) -> Result<Option<Normalized>> {
        for kind in self.policy.chain(candidate) {
            match self.normalizer.normalize(kind, input) {
                Ok(normalized) => {
                    tracing::info!(
                        normalizer = %kind,
                        extension = %normalized.extension,
                        size_bytes = normalized.content.len(),
                        "Classified content"
                    );
                    return Ok(Some(normalized));
                }
                Err(NormalizeError::Rejected(reason)) => {
                    tracing::debug!(normalizer = %kind, reason = %reason, "Normalizer rejected candidate");
                }
                Err(NormalizeError::Failed(e)) => {
                    return Err(e.context(format!("{kind} normalizer failed")));
                }
            }
        }
        Ok(None)
    }
}
