use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use cs_core::content::normalize_clipboard_path;
use cs_core::ports::{FileReaderPort, SystemClipboardPort};
use cs_core::{Candidate, PathRef};

/// Pick the single candidate for this run from the system clipboard.
///
/// Priority: copied files, then bitmap, then text. Text that names a readable
/// regular file becomes a path candidate; anything else stays raw text.
/// Clipboard read errors degrade to the next source.
pub struct ResolveContentSource<C, F>
where
    C: SystemClipboardPort,
    F: FileReaderPort,
{
    clipboard: Arc<C>,
    files: Arc<F>,
}

impl<C, F> ResolveContentSource<C, F>
where
    C: SystemClipboardPort,
    F: FileReaderPort,
{
    pub fn new(clipboard: Arc<C>, files: Arc<F>) -> Self {
        Self { clipboard, files }
    }

    pub async fn execute(&self) -> Result<Option<Candidate>> {
        if let Some(candidate) = self.from_file_list().await {
            return Ok(Some(candidate));
        }

        match self.clipboard.read_image() {
            Ok(Some(image)) => {
                tracing::debug!(
                    width = image.width(),
                    height = image.height(),
                    "Resolved clipboard image"
                );
                return Ok(Some(Candidate::Image(image)));
            }
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "Clipboard image unavailable"),
        }

        let text = match self.clipboard.read_text() {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return Ok(None),
            Err(e) => {
                tracing::debug!(error = %e, "Clipboard text unavailable");
                return Ok(None);
            }
        };

        let candidate_path = normalize_clipboard_path(&text);
        if !candidate_path.is_empty() && self.files.is_readable_file(Path::new(&candidate_path)).await
        {
            tracing::debug!(path = %candidate_path, "Clipboard text names a file");
            return Ok(Some(Candidate::Path(PathRef::new(candidate_path))));
        }

        Ok(Some(Candidate::Text(text)))
    }

    async fn from_file_list(&self) -> Option<Candidate> {
        let entries = match self.clipboard.read_files() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "Clipboard file list unavailable");
                return None;
            }
        };

        for entry in entries {
            if self.files.is_readable_file(Path::new(&entry)).await {
                tracing::debug!(path = %entry, "Resolved copied file");
                return Some(Candidate::Path(PathRef::new(entry)));
            }
            tracing::debug!(path = %entry, "Skipping unreadable copied file");
        }
        None
    }
}
