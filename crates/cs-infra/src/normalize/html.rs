use cs_core::{Extension, NormalizeError, NormalizeInput, Normalized};

/// Any text is accepted; only reached for `.html`/`.htm` files.
pub(super) fn normalize(input: &NormalizeInput<'_>) -> Result<Normalized, NormalizeError> {
    let text = input.text()?;
    Ok(Normalized::new(text.as_bytes().to_vec(), Extension::html()))
}
