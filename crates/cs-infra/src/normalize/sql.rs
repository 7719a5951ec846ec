use once_cell::sync::Lazy;
use regex::Regex;

use cs_core::{Extension, NormalizeError, NormalizeInput, Normalized, Rejection};

static SQL_KEYWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:SELECT|FROM|INSERT|UPDATE|DELETE|CREATE|DROP|ALTER|JOIN|WHERE|GROUP\s+BY|ORDER\s+BY)\b",
    )
    .unwrap()
});

/// Any whole-word SQL keyword; bytes pass through unchanged.
pub(super) fn normalize(input: &NormalizeInput<'_>) -> Result<Normalized, NormalizeError> {
    let text = input.text()?;
    if !SQL_KEYWORD_REGEX.is_match(text) {
        return Err(Rejection::NoSqlKeyword.into());
    }
    Ok(Normalized::new(text.as_bytes().to_vec(), Extension::sql()))
}
