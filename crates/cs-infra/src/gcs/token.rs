use tokio::process::Command;
use tokio::sync::OnceCell;

use cs_core::ports::StoreError;

/// Environment variable consulted when no token is configured.
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Bearer token for GCS, resolved on first use and cached for the process.
///
/// Sources in order: the configured `ACCESS_TOKEN`, `$GOOGLE_OAUTH_ACCESS_TOKEN`,
/// then `gcloud auth print-access-token`.
#[derive(Debug, Default)]
pub struct AccessTokenProvider {
    configured: Option<String>,
    cached: OnceCell<String>,
}

impl AccessTokenProvider {
    pub fn new(configured: Option<String>) -> Self {
        Self {
            configured,
            cached: OnceCell::new(),
        }
    }

    /// Always returns `token`; never shells out.
    pub fn fixed(token: impl Into<String>) -> Self {
        Self::new(Some(token.into()))
    }

    pub async fn token(&self) -> Result<&str, StoreError> {
        self.cached
            .get_or_try_init(|| self.resolve())
            .await
            .map(String::as_str)
    }

    async fn resolve(&self) -> Result<String, StoreError> {
        if let Some(token) = &self.configured {
            return Ok(token.clone());
        }
        if let Some(token) = std::env::var(ENV_ACCESS_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
        {
            tracing::debug!("Using access token from {}", ENV_ACCESS_TOKEN);
            return Ok(token.trim().to_string());
        }
        gcloud_token().await
    }
}

async fn gcloud_token() -> Result<String, StoreError> {
    tracing::debug!("Requesting access token from gcloud");
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .map_err(|e| StoreError::Credentials(format!("failed to run gcloud: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StoreError::Credentials(format!(
            "gcloud auth print-access-token failed: {}",
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(StoreError::Credentials(
            "gcloud returned an empty access token".into(),
        ));
    }
    Ok(token)
}
