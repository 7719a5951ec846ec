//! Delivering the stored object's locator to the user.

use anyhow::{Context, Result};
use std::io::Write;

use cs_core::ports::SystemClipboardPort;
use cs_core::StoreLocator;

use crate::cli::OutputTarget;

/// Copy the public URL to the clipboard, or print the locator as JSON.
pub fn emit<C, W>(
    target: OutputTarget,
    locator: &StoreLocator,
    clipboard: &C,
    out: &mut W,
) -> Result<()>
where
    C: SystemClipboardPort + ?Sized,
    W: Write,
{
    match target {
        OutputTarget::Clipboard => {
            clipboard
                .write_text(&locator.public_url)
                .context("Failed to copy URL to clipboard")?;
            tracing::info!(url = %locator.public_url, "Copied URL to clipboard");
        }
        OutputTarget::Stdout => {
            let json = serde_json::to_string(locator).context("Failed to serialize locator")?;
            writeln!(out, "{json}").context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
