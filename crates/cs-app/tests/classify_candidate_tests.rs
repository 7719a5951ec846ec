//! Chain behavior of [`ClassifyCandidate`] per candidate shape.

mod support;

use std::sync::Arc;

use cs_app::ClassifyCandidate;
use cs_core::{Candidate, ClassificationPolicy, ClassifyOptions, JpegQuality, PathRef};
use cs_infra::fs::TokioFileReader;
use cs_infra::FormatNormalizer;

fn classifier(raw_markdown: bool) -> ClassifyCandidate<TokioFileReader, FormatNormalizer> {
    ClassifyCandidate::new(
        Arc::new(TokioFileReader),
        Arc::new(FormatNormalizer::new(JpegQuality::DEFAULT)),
        ClassificationPolicy::new(ClassifyOptions { raw_markdown }),
    )
}

fn path_candidate(path: &std::path::Path) -> Candidate {
    Candidate::Path(PathRef::new(path))
}

#[tokio::test]
async fn raw_text_chain_prefers_csv_over_text() {
    let result = classifier(false)
        .execute(&Candidate::Text("name,age\nalice,30\nbob,41".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.extension.as_str(), ".csv");
    assert_eq!(result.original_filename, None);
}

#[tokio::test]
async fn ragged_csv_text_falls_back_to_plain_text() {
    let result = classifier(false)
        .execute(&Candidate::Text("a,b,c\n1,2".into()))
        .await
        .unwrap();
    assert!(result.is_none(), "too short for text and not valid CSV");

    let result = classifier(false)
        .execute(&Candidate::Text("a,b,c\n1,2\nthis line is long".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.extension.as_str(), ".txt");
}

#[tokio::test]
async fn markdown_file_is_rendered_unless_raw() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "# Heading\n\nSome *emphasis* here.\n").unwrap();

    let rendered = classifier(false)
        .execute(&path_candidate(&path))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rendered.extension.as_str(), ".html");
    assert_eq!(
        rendered.markdown_source.as_deref(),
        Some("# Heading\n\nSome *emphasis* here.\n")
    );
    let html = String::from_utf8(rendered.content).unwrap();
    assert!(html.contains("<title>Heading</title>"));
    assert!(html.contains("<h1>Heading</h1>"));
    assert_eq!(rendered.original_filename.as_deref(), Some("notes.md"));

    let raw = classifier(true)
        .execute(&path_candidate(&path))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(raw.extension.as_str(), ".txt");
    assert_eq!(raw.markdown_source, None);
}

#[tokio::test]
async fn html_only_applies_to_html_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.htm");
    let note = dir.path().join("page.txt");
    let body = "<p>hello there, world</p>";
    std::fs::write(&page, body).unwrap();
    std::fs::write(&note, body).unwrap();

    let as_html = classifier(false).execute(&path_candidate(&page)).await.unwrap().unwrap();
    let as_text = classifier(false).execute(&path_candidate(&note)).await.unwrap().unwrap();
    assert_eq!(as_html.extension.as_str(), ".html");
    assert_eq!(as_text.extension.as_str(), ".txt");
}

#[tokio::test]
async fn binary_file_without_suffix_is_opaque_bin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blob");
    std::fs::write(&path, [0u8, 0xff, 0xfe, 0x80]).unwrap();

    let result = classifier(false)
        .execute(&path_candidate(&path))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.extension.as_str(), ".bin");
    assert_eq!(result.content, vec![0u8, 0xff, 0xfe, 0x80]);
    assert_eq!(result.original_filename.as_deref(), Some("blob"));
}

#[tokio::test]
async fn opaque_fallback_keeps_suffix_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("archive.TAR");
    std::fs::write(&path, [0x1fu8, 0x8b, 0x08, 0x00, 0xff]).unwrap();

    let result = classifier(false)
        .execute(&path_candidate(&path))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.extension.as_str(), ".TAR");
}

#[tokio::test]
async fn file_removed_after_resolution_classifies_as_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.txt");
    std::fs::write(&path, "short lived note, long enough").unwrap();
    let candidate = path_candidate(&path);
    std::fs::remove_file(&path).unwrap();

    let result = classifier(false).execute(&candidate).await.unwrap();
    assert!(result.is_none());
}
