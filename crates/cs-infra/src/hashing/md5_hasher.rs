use cs_core::ports::ContentHashPort;
use md5::{Digest, Md5};

/// MD5 hex digest. Used for deduplication naming, not for integrity or security.
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5Hasher;

impl ContentHashPort for Md5Hasher {
    fn hash_hex(&self, bytes: &[u8]) -> String {
        let mut hasher = Md5::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }
}
