use std::fmt;

use super::candidate::{Candidate, PathRef};

/// One stage of the classification chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizerKind {
    Image,
    Json,
    Csv,
    Sql,
    Html,
    Markdown,
    Text,
}

impl NormalizerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizerKind::Image => "image",
            NormalizerKind::Json => "json",
            NormalizerKind::Csv => "csv",
            NormalizerKind::Sql => "sql",
            NormalizerKind::Html => "html",
            NormalizerKind::Markdown => "markdown",
            NormalizerKind::Text => "text",
        }
    }
}

impl fmt::Display for NormalizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Treat Markdown files as plain text instead of rendering them.
    pub raw_markdown: bool,
}

const CSV_SUFFIXES: &[&str] = &[".csv", ".tsv"];
const HTML_SUFFIXES: &[&str] = &[".html", ".htm"];
const MARKDOWN_SUFFIXES: &[&str] = &[".md", ".markdown"];

/// Decides which normalizers run for a candidate, and in what order.
///
/// 顺序即优先级：第一个成功的规范化器胜出。
/// - Image candidate: image only
/// - Path candidate: image > json > csv > sql > html > markdown > text > opaque
/// - Raw text: json > csv > sql > text, no opaque fallback
///
/// For paths, the csv, html and markdown stages are gated on the file suffix.
/// SQL runs for every path, so a query reads the same from a file or as text.
/// HTML accepts any text, so it must sit after every stricter text stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationPolicy {
    options: ClassifyOptions,
}

impl ClassificationPolicy {
    pub fn new(options: ClassifyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ClassifyOptions {
        self.options
    }

    pub fn chain(&self, candidate: &Candidate) -> Vec<NormalizerKind> {
        match candidate {
            Candidate::Image(_) => vec![NormalizerKind::Image],
            Candidate::Text(_) => vec![
                NormalizerKind::Json,
                NormalizerKind::Csv,
                NormalizerKind::Sql,
                NormalizerKind::Text,
            ],
            Candidate::Path(path) => self.path_chain(path),
        }
    }

    /// Only path candidates have a suffix to fall back to.
    pub fn allows_opaque_fallback(&self, candidate: &Candidate) -> bool {
        matches!(candidate, Candidate::Path(_))
    }

    fn path_chain(&self, path: &PathRef) -> Vec<NormalizerKind> {
        let suffix = path.suffix_lower();
        let has_suffix = |set: &[&str]| suffix.as_deref().is_some_and(|s| set.contains(&s));

        let mut chain = vec![NormalizerKind::Image, NormalizerKind::Json];
        if has_suffix(CSV_SUFFIXES) {
            chain.push(NormalizerKind::Csv);
        }
        chain.push(NormalizerKind::Sql);
        if has_suffix(HTML_SUFFIXES) {
            chain.push(NormalizerKind::Html);
        }
        if has_suffix(MARKDOWN_SUFFIXES) && !self.options.raw_markdown {
            chain.push(NormalizerKind::Markdown);
        }
        chain.push(NormalizerKind::Text);
        chain
    }
}
