//! Session secret — generation and safe exposure.
//!
//! The secret is 24 bytes drawn from the OS secure random source, exactly once
//! per process start. It is never persisted and never printed: `Debug` is
//! redacted, and [`SecretKey::fingerprint`] is the loggable identifier.

use std::fmt;

use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Length of the session secret in bytes.
pub const SECRET_KEY_LEN: usize = 24;

/// Process-lifetime session secret for signing/encrypting session data.
#[derive(Clone)]
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from the OS secure random source.
    ///
    /// Fails if the source is unavailable. There is no weak fallback: a
    /// predictable session secret is a security failure, not a degraded mode.
    pub fn generate() -> Result<Self, AppError> {
        let mut bytes = [0u8; SECRET_KEY_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AppError::Secret(format!("secure random source unavailable: {e}")))?;
        Ok(Self(bytes))
    }

    /// Raw key material, for the consumer that signs or encrypts session data.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }

    /// First 8 hex chars of `SHA256(key)` — identifies the key epoch in logs
    /// without exposing the key itself.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0);
        hex::encode(digest)[..8].to_string()
    }
}

// Key material must never leak through diagnostics output.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(fp={})", self.fingerprint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_fills_24_bytes() {
        let key = SecretKey::generate().unwrap();
        assert_eq!(key.as_bytes().len(), SECRET_KEY_LEN);
        // An all-zero buffer would mean the source was never consulted.
        assert_ne!(key.as_bytes(), &[0u8; SECRET_KEY_LEN]);
    }

    #[test]
    fn generate_produces_unique_keys() {
        let a = SecretKey::generate().unwrap();
        let b = SecretKey::generate().unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn fingerprint_is_8_hex_chars_and_stable() {
        let key = SecretKey::generate().unwrap();
        let fp = key.fingerprint();
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, key.fingerprint());
    }

    #[test]
    fn debug_is_redacted() {
        let key = SecretKey::generate().unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains(&hex::encode(key.as_bytes())));
        assert!(printed.contains(&key.fingerprint()));
    }
}
