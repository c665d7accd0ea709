//! Credential utilities library
//!
//! Provides reusable credential infrastructure for services:
//! - Deterministic secret hashing (SHA-256, hex encoded)
//! - Random secret and token generation (OS entropy, URL-safe encoding)
//!
//! Digests produced here are deterministic so they can double as
//! exact-match database lookup keys: the raw secret is handed to the
//! caller once, only its digest is ever stored.
//!
//! # Examples
//!
//! ## Hashing
//! ```
//! use credentials::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//! let digest = hasher.hash("my_secret");
//! assert_eq!(digest, hasher.hash("my_secret"));
//! assert_eq!(digest.len(), 64);
//! ```
//!
//! ## Secret generation
//! ```
//! use credentials::SecretGenerator;
//!
//! let generator = SecretGenerator::new();
//! let password = generator.generate_password();
//! let token = generator.generate_token();
//! assert_ne!(password, token);
//! ```

pub mod generator;
pub mod hasher;

// Re-export commonly used items
pub use generator::SecretGenerator;
pub use hasher::CredentialHasher;
