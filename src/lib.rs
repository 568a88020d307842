//! # passvault
//!
//! Cryptographic core of a password vault.
//!
//! Three capabilities, each usable on its own:
//! - **Access keys** — a vault's master key and its two storage
//!   identifiers packed into one portable, opaque token (`access`).
//! - **Field encryption** — AES-GCM authenticated encryption of stored
//!   values under the master key, one fresh nonce per call (`cipher`).
//! - **Secret generation** — uniform random secrets satisfying per-class
//!   minimum counts, for user-chosen passwords and key material
//!   (`secret`, `random`).
//!
//! Storage, UI, and navigation are external collaborators: they call the
//! operations below and persist what comes back. Nothing in this crate
//! caches a key or holds state across calls.
//!
//! ## Public API
//!
//! The component types are public for callers that want to inject their
//! own randomness source; everyday use goes through the top-level
//! functions, which wire in the operating system CSPRNG.

pub mod access;
pub mod cipher;
pub mod error;
pub mod keys;
pub mod random;
pub mod secret;

pub use access::{AccessKey, AccessKeyParts};
pub use cipher::{AuthenticatedCipher, EncryptedValue, NONCE_LEN};
pub use error::PassvaultError;
pub use keys::{MasterKey, MASTER_KEY_LEN};
pub use random::{alphabet, RandomStringGenerator};
pub use secret::{CharacterClass, SecretGenerationRequest, SecretGenerator};

use rand::rngs::OsRng;

// ---------------------------------------------------------------------------
// Operation surface consumed by UI collaborators
// ---------------------------------------------------------------------------

/// Create the access key for a new vault: fresh master key plus two fresh
/// storage identifiers, encoded into one token.
pub fn generate_access_key() -> Result<AccessKey, PassvaultError> {
    access::generate_access_key(OsRng)
}

/// Recover the (master key, database name, store name) triple from a token.
pub fn read_access_key(token: &str) -> Result<AccessKeyParts, PassvaultError> {
    access::decode(token)
}

/// Generate a standalone 32-character alphanumeric master key.
pub fn generate_master_key() -> Result<MasterKey, PassvaultError> {
    MasterKey::generate(OsRng)
}

/// Encrypt one field value under a master key. The returned nonce must be
/// stored alongside the ciphertext.
pub fn encrypt(plaintext: &str, key: &MasterKey) -> Result<EncryptedValue, PassvaultError> {
    AuthenticatedCipher::new(OsRng).encrypt(plaintext, key)
}

/// Decrypt one stored field value under a master key and its stored nonce.
pub fn decrypt(
    ciphertext: &str,
    key: &MasterKey,
    nonce: &str,
) -> Result<String, PassvaultError> {
    AuthenticatedCipher::new(OsRng).decrypt(ciphertext, key, nonce)
}

/// Generate a secret satisfying the request's character-class constraints.
pub fn generate_secret(request: &SecretGenerationRequest) -> Result<String, PassvaultError> {
    SecretGenerator::new(OsRng).generate(request)
}
