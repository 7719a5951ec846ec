//! Markdown rendered into a standalone, styled HTML document.

use anyhow::anyhow;
use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::escape_html;

use cs_core::{Extension, NormalizeError, NormalizeInput, Normalized};

const DEFAULT_TITLE: &str = "Document";

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<style>
body {
  max-width: 50rem;
  margin: 2rem auto;
  padding: 0 1rem;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  font-size: 16px;
  line-height: 1.6;
  color: #24292f;
  background: #ffffff;
}
h1, h2 { border-bottom: 1px solid #d0d7de; padding-bottom: 0.3em; }
a { color: #0969da; }
code {
  font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
  font-size: 85%;
  background: #f6f8fa;
  padding: 0.2em 0.4em;
  border-radius: 6px;
}
pre {
  background: #f6f8fa;
  padding: 1rem;
  overflow: auto;
  border-radius: 6px;
  line-height: 1.45;
}
pre code { background: none; padding: 0; font-size: 85%; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #d0d7de; padding: 6px 13px; }
tr:nth-child(2n) { background: #f6f8fa; }
blockquote {
  margin: 0 0 1rem;
  padding: 0 1em;
  color: #57606a;
  border-left: 0.25em solid #d0d7de;
}
img { max-width: 100%; }
</style>
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "</body>\n</html>\n";

/// Render to HTML; the Markdown source is kept on the result.
///
/// The output depends only on the text, never on the file name, so the same
/// Markdown always maps to the same object.
pub(super) fn normalize(input: &NormalizeInput<'_>) -> Result<Normalized, NormalizeError> {
    let source = input.text()?;
    let document = render_document(source)?;
    Ok(Normalized {
        content: document.into_bytes(),
        extension: Extension::html(),
        markdown_source: Some(source.to_string()),
    })
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Plain text of the first heading, if any.
fn first_heading(source: &str) -> Option<String> {
    let mut title: Option<String> = None;
    for event in Parser::new_ext(source, parser_options()) {
        match (event, title.as_mut()) {
            (Event::Start(Tag::Heading { .. }), None) => title = Some(String::new()),
            (Event::Text(text) | Event::Code(text), Some(acc)) => acc.push_str(&text),
            (Event::End(TagEnd::Heading(_)), Some(acc)) => {
                let trimmed = acc.trim();
                return (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            _ => {}
        }
    }
    None
}

fn render_document(source: &str) -> Result<String, NormalizeError> {
    let title = first_heading(source).unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut body = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut body, Parser::new_ext(source, parser_options()));

    let mut escaped_title = String::with_capacity(title.len());
    escape_html(&mut escaped_title, &title)
        .map_err(|e| anyhow!("failed to escape document title: {e:?}"))?;

    let mut document = DOCUMENT_HEAD.replace("{{title}}", &escaped_title);
    document.push_str(&body);
    document.push_str(DOCUMENT_TAIL);
    Ok(document)
}
