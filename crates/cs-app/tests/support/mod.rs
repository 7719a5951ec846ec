//! Hand-written port fakes shared by the use case tests.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cs_app::UploadClipboardContent;
use cs_core::ports::{ClipboardImage, ObjectStorePort, StoreError, SystemClipboardPort};
use cs_core::{ClassificationPolicy, ClassifyOptions, JpegQuality, ObjectKey, ObjectMeta, StoreLocator};
use cs_infra::fs::TokioFileReader;
use cs_infra::{FormatNormalizer, Md5Hasher};

#[derive(Default)]
pub struct FakeClipboard {
    pub files: Vec<String>,
    pub image: Option<ClipboardImage>,
    pub text: Option<String>,
    pub fail_reads: bool,
    pub written: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn with_files<P: AsRef<Path>>(files: &[P]) -> Self {
        Self {
            files: files
                .iter()
                .map(|p| p.as_ref().to_string_lossy().into_owned())
                .collect(),
            ..Default::default()
        }
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn read_files(&self) -> Result<Vec<String>> {
        if self.fail_reads {
            return Err(anyhow!("clipboard unavailable"));
        }
        Ok(self.files.clone())
    }

    fn read_image(&self) -> Result<Option<ClipboardImage>> {
        if self.fail_reads {
            return Err(anyhow!("clipboard unavailable"));
        }
        Ok(self.image.clone())
    }

    fn read_text(&self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Object store kept in memory, counting uploads.
#[derive(Default)]
pub struct InMemoryStore {
    pub objects: Mutex<HashMap<String, (Vec<u8>, ObjectMeta)>>,
    pub puts: AtomicUsize,
}

impl InMemoryStore {
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn object(&self, key: &str) -> Option<(Vec<u8>, ObjectMeta)> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ObjectStorePort for InMemoryStore {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StoreError> {
        Ok(self.objects.lock().unwrap().contains_key(key.as_str()))
    }

    async fn put(
        &self,
        key: &ObjectKey,
        bytes: &[u8],
        meta: &ObjectMeta,
    ) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (bytes.to_vec(), meta.clone()));
        Ok(())
    }

    fn locate(&self, key: &ObjectKey) -> StoreLocator {
        StoreLocator {
            public_url: format!("https://storage.example/bkt/{key}"),
            canonical_uri: format!("gs://bkt/{key}"),
        }
    }
}

/// Store that refuses every request.
pub struct DenyingStore;

#[async_trait]
impl ObjectStorePort for DenyingStore {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StoreError> {
        Err(StoreError::AccessDenied {
            key: key.to_string(),
            status: 403,
        })
    }

    async fn put(&self, key: &ObjectKey, _: &[u8], _: &ObjectMeta) -> Result<(), StoreError> {
        Err(StoreError::AccessDenied {
            key: key.to_string(),
            status: 403,
        })
    }

    fn locate(&self, key: &ObjectKey) -> StoreLocator {
        StoreLocator {
            public_url: String::new(),
            canonical_uri: key.to_string(),
        }
    }
}

pub type TestUpload<S> =
    UploadClipboardContent<FakeClipboard, TokioFileReader, Md5Hasher, FormatNormalizer, S>;

/// Real normalizers and hasher, fake clipboard and store.
pub fn upload_use_case<S: ObjectStorePort>(
    clipboard: FakeClipboard,
    store: Arc<S>,
    prefix: Option<&str>,
) -> TestUpload<S> {
    UploadClipboardContent::from_ports(
        Arc::new(clipboard),
        Arc::new(TokioFileReader),
        Arc::new(Md5Hasher),
        Arc::new(FormatNormalizer::new(JpegQuality::DEFAULT)),
        store,
        ClassificationPolicy::new(ClassifyOptions::default()),
        prefix.map(str::to_string),
    )
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([12, 200, 40, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Smallest valid GIF89a: one transparent pixel.
pub const TINY_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0xff, 0xff,
    0xff, 0x00, 0x00, 0x00, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3b,
];
