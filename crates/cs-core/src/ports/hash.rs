/// Deterministic content fingerprint.
pub trait ContentHashPort: Send + Sync {
    /// Fixed-length lowercase hex digest of `bytes`.
    fn hash_hex(&self, bytes: &[u8]) -> String;
}
