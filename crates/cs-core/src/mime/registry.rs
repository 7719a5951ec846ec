/// Text formats whose content type gets a UTF-8 charset qualifier.
const UTF8_TEXT_EXTENSIONS: &[&str] = &[
    ".txt", ".json", ".csv", ".html", ".htm", ".sql", ".md", ".markdown", ".xml", ".css", ".js",
];

const TYPE_TABLE: &[(&str, &str)] = &[
    // images
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".jpe", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".webp", "image/webp"),
    (".bmp", "image/bmp"),
    (".tif", "image/tiff"),
    (".tiff", "image/tiff"),
    (".ico", "image/vnd.microsoft.icon"),
    (".svg", "image/svg+xml"),
    (".heic", "image/heic"),
    (".heif", "image/heif"),
    (".avif", "image/avif"),
    // text
    (".txt", "text/plain"),
    (".csv", "text/csv"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".js", "text/javascript"),
    (".md", "text/markdown"),
    (".markdown", "text/markdown"),
    (".xml", "text/xml"),
    (".json", "application/json"),
    (".sql", "application/sql"),
    // documents
    (".pdf", "application/pdf"),
    (".rtf", "application/rtf"),
    (".doc", "application/msword"),
    (
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (".xls", "application/vnd.ms-excel"),
    (
        ".xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (".ppt", "application/vnd.ms-powerpoint"),
    (
        ".pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    // archives
    (".zip", "application/zip"),
    (".gz", "application/gzip"),
    (".tar", "application/x-tar"),
    (".7z", "application/x-7z-compressed"),
    // audio / video
    (".mp3", "audio/mpeg"),
    (".wav", "audio/x-wav"),
    (".ogg", "audio/ogg"),
    (".m4a", "audio/mp4"),
    (".mp4", "video/mp4"),
    (".mov", "video/quicktime"),
    (".webm", "video/webm"),
    (".avi", "video/x-msvideo"),
    // fonts
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".ttf", "font/ttf"),
    (".otf", "font/otf"),
    // misc
    (".wasm", "application/wasm"),
    (".bin", "application/octet-stream"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no content type registered for extension {0:?}")]
    UnknownExtension(String),
}

/// Map an extension token (`.json`) to a wire content type.
///
/// Lookup is case-insensitive. UTF-8 text formats carry `; charset=utf-8`.
/// Callers treat `UnknownExtension` as "no declared type", not as a failure.
pub fn content_type_for_extension(extension: &str) -> Result<String, RegistryError> {
    let key = extension.to_ascii_lowercase();
    let Some((_, content_type)) = TYPE_TABLE.iter().find(|(ext, _)| *ext == key) else {
        return Err(RegistryError::UnknownExtension(extension.to_string()));
    };

    if UTF8_TEXT_EXTENSIONS.contains(&key.as_str()) {
        Ok(format!("{content_type}; charset=utf-8"))
    } else {
        Ok((*content_type).to_string())
    }
}
