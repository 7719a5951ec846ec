use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use std::sync::{Arc, Mutex, MutexGuard};

use cs_core::ports::{ClipboardImage, SystemClipboardPort};

use super::common::{map_clipboard_err, CommonClipboardImpl};

/// The desktop clipboard of the current session.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = map_clipboard_err(ClipboardContext::new())?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn ctx(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_files(&self) -> Result<Vec<String>> {
        CommonClipboardImpl::read_files(&*self.ctx()?)
    }

    fn read_image(&self) -> Result<Option<ClipboardImage>> {
        CommonClipboardImpl::read_image(&*self.ctx()?)
    }

    fn read_text(&self) -> Result<Option<String>> {
        CommonClipboardImpl::read_text(&*self.ctx()?)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        CommonClipboardImpl::write_text(&*self.ctx()?, text)?;
        tracing::debug!(len = text.len(), "Wrote text to clipboard");
        Ok(())
    }
}
