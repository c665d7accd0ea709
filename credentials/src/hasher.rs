use sha2::Digest;
use sha2::Sha256;

/// Deterministic secret hashing implementation.
///
/// Produces hex-encoded SHA-256 digests. The same input always yields
/// the same digest, which is what allows stored credentials to be
/// looked up by digest without ever persisting the plaintext.
pub struct CredentialHasher;

impl CredentialHasher {
    /// Create a new credential hasher instance.
    ///
    /// # Returns
    /// Stateless CredentialHasher instance
    pub fn new() -> Self {
        Self
    }

    /// Hash a secret for storage or lookup.
    ///
    /// Pure function with no side effects.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret (password or token)
    ///
    /// # Returns
    /// 64-character lowercase hex digest
    pub fn hash(&self, secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
