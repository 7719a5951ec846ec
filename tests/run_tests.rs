//! Outcome to exit status mapping of a full run.

use std::path::Path;

use anyhow::anyhow;
use clap::Parser;
use clipstash_lib::cli::Cli;
use clipstash_lib::{run_with, RunStatus};
use cs_core::ports::{ClipboardImage, SystemClipboardPort};
use cs_core::AppConfig;

struct TextClipboard(Option<String>);

impl SystemClipboardPort for TextClipboard {
    fn read_files(&self) -> anyhow::Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn read_image(&self) -> anyhow::Result<Option<ClipboardImage>> {
        Ok(None)
    }

    fn read_text(&self) -> anyhow::Result<Option<String>> {
        Ok(self.0.clone())
    }

    fn write_text(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("clipstash").chain(args.iter().copied())).unwrap()
}

fn local_config(store_dir: &Path) -> anyhow::Result<AppConfig> {
    let dir = store_dir.to_string_lossy().into_owned();
    Ok(AppConfig::from_lookup(move |key| match key {
        "PROJECT_ID" => Some("proj".into()),
        "BUCKET_ID" => Some("bkt".into()),
        "LOCAL_STORE_DIR" => Some(dir.clone()),
        _ => None,
    })
    .unwrap())
}

fn clipboard(text: Option<&str>) -> impl FnOnce() -> anyhow::Result<TextClipboard> {
    let text = text.map(str::to_string);
    move || Ok(TextClipboard(text))
}

#[tokio::test]
async fn empty_clipboard_succeeds_with_nothing_to_upload() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let status = run_with(&cli(&[]), local_config(dir.path()), clipboard(None), &mut out).await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(String::from_utf8(out).unwrap(), "Nothing to upload\n");
}

#[tokio::test]
async fn unavailable_clipboard_succeeds_with_nothing_to_upload() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let status = run_with(
        &cli(&[]),
        local_config(dir.path()),
        || -> anyhow::Result<TextClipboard> { Err(anyhow!("no display available")) },
        &mut out,
    )
    .await;

    assert_eq!(status, RunStatus::Success);
    assert_eq!(String::from_utf8(out).unwrap(), "Nothing to upload\n");
}

#[tokio::test]
async fn config_failure_exits_with_failure() {
    let mut out = Vec::new();
    let mut opened = false;

    let status = run_with(
        &cli(&[]),
        Err(anyhow!("BUCKET_ID is not set")),
        || {
            opened = true;
            Ok(TextClipboard(Some("a note long enough to upload".into())))
        },
        &mut out,
    )
    .await;

    assert_eq!(status, RunStatus::Failure);
    assert!(!opened, "clipboard should not be touched without config");
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("Failed to read config"));
    assert!(printed.contains("BUCKET_ID is not set"));
}

#[tokio::test]
async fn store_failure_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("store");
    std::fs::write(&not_a_dir, "occupied").unwrap();
    let mut out = Vec::new();

    let status = run_with(
        &cli(&[]),
        local_config(&not_a_dir),
        clipboard(Some("a note long enough to upload")),
        &mut out,
    )
    .await;

    assert_eq!(status, RunStatus::Failure);
    assert!(out.is_empty());
}

#[tokio::test]
async fn stored_upload_prints_locator_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let status = run_with(
        &cli(&["-o", "stdout"]),
        local_config(dir.path()),
        clipboard(Some("a note long enough to upload")),
        &mut out,
    )
    .await;

    assert_eq!(status, RunStatus::Success);
    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(printed["public_url"].as_str().unwrap().starts_with("file://"));
    assert!(printed["gcs_uri"].as_str().unwrap().ends_with(".txt"));
}
