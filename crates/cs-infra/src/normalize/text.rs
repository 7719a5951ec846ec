use cs_core::{Extension, NormalizeError, NormalizeInput, Normalized, Rejection};

const MIN_TEXT_CHARS: usize = 10;

/// Non-blank text of at least 10 characters; the untrimmed bytes are kept.
pub(super) fn normalize(input: &NormalizeInput<'_>) -> Result<Normalized, NormalizeError> {
    let text = input.text()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Rejection::BlankText.into());
    }
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(Rejection::TextTooShort {
            min: MIN_TEXT_CHARS,
        }
        .into());
    }
    Ok(Normalized::new(text.as_bytes().to_vec(), Extension::text()))
}
