use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes backing a generated password.
const PASSWORD_BYTES: usize = 16;

/// Number of random bytes backing a generated token.
const TOKEN_BYTES: usize = 32;

/// Random secret generation backed by OS entropy.
///
/// Stateless: every call draws fresh bytes from the operating system
/// and encodes them URL-safe without padding. A depleted entropy source
/// aborts the process rather than degrading to weak secrets.
pub struct SecretGenerator;

impl SecretGenerator {
    /// Create a new secret generator instance.
    ///
    /// # Returns
    /// Stateless SecretGenerator instance
    pub fn new() -> Self {
        Self
    }

    /// Generate a one-time company password.
    ///
    /// # Returns
    /// URL-safe random string (16 bytes of entropy)
    pub fn generate_password(&self) -> String {
        Self::random_urlsafe(PASSWORD_BYTES)
    }

    /// Generate an opaque bearer token.
    ///
    /// # Returns
    /// URL-safe random string (32 bytes of entropy)
    pub fn generate_token(&self) -> String {
        Self::random_urlsafe(TOKEN_BYTES)
    }

    fn random_urlsafe(len: usize) -> String {
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}
