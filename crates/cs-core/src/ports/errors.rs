use thiserror::Error;

/// Failures talking to the object store. Never retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("access denied for {key} (HTTP {status})")]
    AccessDenied { key: String, status: u16 },

    #[error("unexpected HTTP {status} for {key}: {body}")]
    UnexpectedStatus {
        key: String,
        status: u16,
        body: String,
    },

    #[error("storage transport error: {0}")]
    Transport(String),

    #[error("storage credentials unavailable: {0}")]
    Credentials(String),

    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}
