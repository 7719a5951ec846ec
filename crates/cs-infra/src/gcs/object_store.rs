use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use cs_core::ports::{ObjectStorePort, StoreError};
use cs_core::{AppConfig, ObjectKey, ObjectMeta, StoreLocator};

use super::token::AccessTokenProvider;

const PROJECT_ID_HEADER: &str = "x-goog-project-id";

/// Host of public object URLs, whatever endpoint the API calls go to.
const PUBLIC_HOST: &str = "https://storage.googleapis.com";

/// GCS bucket accessed through the XML API (`HEAD`/`PUT {endpoint}/{bucket}/{key}`).
pub struct GcsObjectStore {
    client: Client,
    endpoint: String,
    bucket: String,
    project_id: String,
    token: AccessTokenProvider,
}

impl GcsObjectStore {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        project_id: impl Into<String>,
        token: AccessTokenProvider,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            project_id: project_id.into(),
            token,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Client::new(),
            &config.storage.endpoint,
            &config.bucket_id,
            &config.project_id,
            AccessTokenProvider::new(config.storage.access_token.clone()),
        )
    }

    fn object_url(&self, key: &ObjectKey) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, encode_key(key.as_str()))
    }

    fn public_url(&self, key: &ObjectKey) -> String {
        format!("{PUBLIC_HOST}/{}/{}", self.bucket, encode_key(key.as_str()))
    }
}

/// Percent-encode each path segment, keeping `/` separators.
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn transport_error(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

async fn status_error(key: &ObjectKey, response: reqwest::Response) -> StoreError {
    let status = response.status();
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        return StoreError::AccessDenied {
            key: key.to_string(),
            status: status.as_u16(),
        };
    }
    let body = response.text().await.unwrap_or_default();
    StoreError::UnexpectedStatus {
        key: key.to_string(),
        status: status.as_u16(),
        body,
    }
}

#[async_trait]
impl ObjectStorePort for GcsObjectStore {
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StoreError> {
        let token = self.token.token().await?;
        let response = self
            .client
            .head(self.object_url(key))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(status_error(key, response).await),
        }
    }

    async fn put(
        &self,
        key: &ObjectKey,
        bytes: &[u8],
        meta: &ObjectMeta,
    ) -> Result<(), StoreError> {
        let token = self.token.token().await?;
        let mut request = self
            .client
            .put(self.object_url(key))
            .bearer_auth(token)
            .header(PROJECT_ID_HEADER, &self.project_id)
            .body(bytes.to_vec());
        if let Some(content_type) = &meta.content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(disposition) = &meta.content_disposition {
            request = request.header(reqwest::header::CONTENT_DISPOSITION, disposition);
        }

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            let err = status_error(key, response).await;
            tracing::error!(key = %key, error = %err, "Upload failed");
            return Err(err);
        }

        tracing::info!(key = %key, size_bytes = bytes.len(), "Uploaded object");
        Ok(())
    }

    fn locate(&self, key: &ObjectKey) -> StoreLocator {
        StoreLocator {
            public_url: self.public_url(key),
            canonical_uri: format!("gs://{}/{}", self.bucket, key),
        }
    }
}
