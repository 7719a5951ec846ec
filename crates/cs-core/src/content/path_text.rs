//! String clean-up applied to clipboard text before treating it as a path.

/// Remove one layer of matching `"` or `'` around the whole string.
pub fn remove_surrounding_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Undo the shell escapes terminals insert when a file is dragged in:
/// `\ ` -> space, `\'` -> `'`, `\"` -> `"`.
pub fn unescape_shell_path(s: &str) -> String {
    s.replace("\\ ", " ")
        .replace("\\'", "'")
        .replace("\\\"", "\"")
}

/// Trim, unquote, then unescape.
pub fn normalize_clipboard_path(raw: &str) -> String {
    unescape_shell_path(remove_surrounding_quotes(raw.trim()))
}
