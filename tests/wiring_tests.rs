//! The wired use case graph against the local filesystem backend.

use std::sync::Arc;

use clipstash_lib::bootstrap::wiring::build_upload;
use cs_app::UploadOutcome;
use cs_core::ports::{ClipboardImage, SystemClipboardPort};
use cs_core::{AppConfig, ClassifyOptions};

struct TextClipboard(String);

impl SystemClipboardPort for TextClipboard {
    fn read_files(&self) -> anyhow::Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn read_image(&self) -> anyhow::Result<Option<ClipboardImage>> {
        Ok(None)
    }

    fn read_text(&self) -> anyhow::Result<Option<String>> {
        Ok(Some(self.0.clone()))
    }

    fn write_text(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

fn config(store_dir: &std::path::Path) -> AppConfig {
    let dir = store_dir.to_string_lossy().into_owned();
    AppConfig::from_lookup(move |key| match key {
        "PROJECT_ID" => Some("proj".into()),
        "BUCKET_ID" => Some("bkt".into()),
        "OBJECT_PREFIX" => Some("clips/".into()),
        "LOCAL_STORE_DIR" => Some(dir.clone()),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn local_store_receives_normalized_json() {
    let dir = tempfile::tempdir().unwrap();
    let upload = build_upload(
        &config(dir.path()),
        Arc::new(TextClipboard("[1,2,3]".into())),
        ClassifyOptions::default(),
    );

    let outcome = upload.execute(None).await.unwrap();
    let UploadOutcome::Stored { name, locator } = outcome else {
        panic!("expected an upload");
    };

    let stored = dir.path().join("bkt/clips").join(name.as_str());
    assert_eq!(std::fs::read_to_string(&stored).unwrap(), "[1, 2, 3]");
    assert!(locator.public_url.starts_with("file://"));
    assert_eq!(locator.canonical_uri, format!("fs://bkt/clips/{name}"));
}

#[tokio::test]
async fn second_run_reuses_existing_object() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let clipboard = Arc::new(TextClipboard("a note long enough to upload".into()));

    let first = build_upload(&config, clipboard.clone(), ClassifyOptions::default())
        .execute(None)
        .await
        .unwrap();
    let second = build_upload(&config, clipboard, ClassifyOptions::default())
        .execute(None)
        .await
        .unwrap();

    assert_eq!(first, second);
}
