//! Master-key material and generation.
//!
//! A master key is the single secret protecting every field value in a
//! vault. It is deliberately a short ASCII string rather than raw bytes:
//! the key travels inside an access-key token (see `access`) and is typed
//! or pasted by people. Its UTF-8 byte length is what keys the cipher, so
//! for the ASCII alphabet used here character count and byte count agree.
//!
//! Key material held by this type is:
//! - Not `Clone`. Cannot be duplicated without explicit reconstruction.
//! - Zeroised on drop. Memory is overwritten before deallocation.
//! - Redacted in `Debug` output.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::PassvaultError;
use crate::random::{alphabet, RandomStringGenerator};

/// Default master-key length in characters (and bytes): keys AES-256-GCM.
pub const MASTER_KEY_LEN: usize = 32;

/// A vault master key.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey(String);

impl MasterKey {
    /// Wrap an externally supplied key string, e.g. one recovered from an
    /// access-key token.
    ///
    /// No length check happens here — the cipher validates the byte length
    /// on every use and rejects anything that is not 16, 24, or 32 bytes.
    pub fn new(key: String) -> Self {
        Self(key)
    }

    /// Generate a fresh master key of the default length (32 characters
    /// over `[A-Za-z0-9]`).
    pub fn generate<R: RngCore + CryptoRng>(rng: R) -> Result<Self, PassvaultError> {
        Self::generate_with_length(rng, MASTER_KEY_LEN)
    }

    /// Generate a master key of an explicit length.
    ///
    /// A zero length yields an empty key, which the cipher later rejects
    /// with `InvalidKeyLength`; callers needing key material should pass
    /// 16, 24, or 32.
    pub fn generate_with_length<R: RngCore + CryptoRng>(
        rng: R,
        length: usize,
    ) -> Result<Self, PassvaultError> {
        let mut strings = RandomStringGenerator::new(rng);
        Ok(Self(strings.draw(alphabet::ALPHANUMERIC, length)?))
    }

    /// Borrow the raw key string.
    ///
    /// `pub(crate)` — key material never leaves the crate in the clear.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Key length in bytes. Valid cipher keys are 16, 24, or 32 bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material must never reach logs, even via Debug.
        write!(f, "MasterKey(<{} bytes redacted>)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_key_is_alphanumeric() {
        let key = MasterKey::generate(StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(key.len(), MASTER_KEY_LEN);
        assert!(key.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_explicit_lengths() {
        for length in [0, 16, 24, 31, 32] {
            let key =
                MasterKey::generate_with_length(StdRng::seed_from_u64(2), length).unwrap();
            assert_eq!(key.len(), length);
        }
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let key = MasterKey::new("supersecretsupersecret".to_string());
        let printed = format!("{:?}", key);
        assert!(!printed.contains("supersecret"));
    }

    #[test]
    fn test_distinct_draws_differ() {
        // Two independent 32-char draws colliding would indicate a broken
        // randomness source.
        let a = MasterKey::generate(StdRng::seed_from_u64(3)).unwrap();
        let b = MasterKey::generate(StdRng::seed_from_u64(4)).unwrap();
        assert_ne!(a, b);
    }
}
