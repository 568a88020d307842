//! Authenticated encryption of stored field values.
//!
//! This module is the only place in the crate that touches the AEAD
//! primitive. Everything else encrypts and decrypts exclusively through
//! `AuthenticatedCipher`.
//!
//! Primitive choices:
//! - **Cipher**: AES-GCM; the variant (128/192/256) is selected by the
//!   master key's byte length, which must be exactly 16, 24, or 32. Any
//!   other length fails with `InvalidKeyLength` before a primitive call.
//! - **Nonce**: 96-bit (12 bytes), freshly drawn from the injected CSPRNG
//!   on every encryption. Never cached, never counter-based — reuse under
//!   one key would break both confidentiality and integrity.
//! - **Stored form**: ciphertext (with GCM tag appended) and nonce as two
//!   independent base64 strings. The nonce is not secret but must be kept
//!   alongside the ciphertext to decrypt.

use aes_gcm::aead::generic_array::typenum::U12;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::PassvaultError;
use crate::keys::MasterKey;

/// Size of the nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-192-GCM, keyed by a 24-byte master key.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// One encrypted field value, as stored.
///
/// Immutable once produced; decryption never mutates it. Both fields are
/// standard base64 and safe to persist or display — neither reveals the
/// plaintext without the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedValue {
    /// The ciphertext with the authentication tag appended.
    pub ciphertext: String,
    /// The single-use 12-byte nonce for this ciphertext.
    pub nonce: String,
}

/// Authenticated encryption and decryption under a vault master key.
///
/// Holds only the injected randomness source — no key is cached across
/// calls, and each call is self-contained, so independent field values may
/// be processed concurrently in any order.
pub struct AuthenticatedCipher<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> AuthenticatedCipher<R> {
    /// Wrap a cryptographically secure randomness source for nonces.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Encrypt a field value under `key` with a fresh random nonce.
    pub fn encrypt(
        &mut self,
        plaintext: &str,
        key: &MasterKey,
    ) -> Result<EncryptedValue, PassvaultError> {
        let key_bytes = key.as_str().as_bytes();
        let mut nonce = [0u8; NONCE_LEN];
        self.rng.fill_bytes(&mut nonce);

        let ciphertext = match key_bytes.len() {
            16 => seal::<Aes128Gcm>(key_bytes, nonce, plaintext.as_bytes()),
            24 => seal::<Aes192Gcm>(key_bytes, nonce, plaintext.as_bytes()),
            32 => seal::<Aes256Gcm>(key_bytes, nonce, plaintext.as_bytes()),
            other => Err(PassvaultError::InvalidKeyLength(other)),
        }?;

        Ok(EncryptedValue {
            ciphertext: BASE64.encode(ciphertext),
            nonce: BASE64.encode(nonce),
        })
    }

    /// Decrypt a stored ciphertext under `key` and its stored nonce.
    ///
    /// `DecodingError` means the stored text could not be turned back into
    /// bytes (corrupt record); `AuthenticationFailed` means the bytes were
    /// intact but the tag check failed (tampering or wrong key).
    pub fn decrypt(
        &self,
        ciphertext: &str,
        key: &MasterKey,
        nonce: &str,
    ) -> Result<String, PassvaultError> {
        let key_bytes = key.as_str().as_bytes();
        let ciphertext = BASE64
            .decode(ciphertext)
            .map_err(|_| PassvaultError::DecodingError)?;
        let nonce: [u8; NONCE_LEN] = BASE64
            .decode(nonce)
            .map_err(|_| PassvaultError::DecodingError)?
            .try_into()
            .map_err(|_| PassvaultError::DecodingError)?;

        let plaintext = match key_bytes.len() {
            16 => open::<Aes128Gcm>(key_bytes, nonce, &ciphertext),
            24 => open::<Aes192Gcm>(key_bytes, nonce, &ciphertext),
            32 => open::<Aes256Gcm>(key_bytes, nonce, &ciphertext),
            other => Err(PassvaultError::InvalidKeyLength(other)),
        }?;

        String::from_utf8(plaintext).map_err(|_| PassvaultError::DecodingError)
    }
}

fn seal<C>(
    key_bytes: &[u8],
    nonce: [u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, PassvaultError>
where
    C: Aead + KeyInit + AeadCore<NonceSize = U12>,
{
    let cipher =
        C::new_from_slice(key_bytes).map_err(|_| PassvaultError::InvalidKeyLength(key_bytes.len()))?;
    cipher
        .encrypt(&GenericArray::from(nonce), plaintext)
        .map_err(|_| PassvaultError::EncryptionFailure)
}

fn open<C>(
    key_bytes: &[u8],
    nonce: [u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, PassvaultError>
where
    C: Aead + KeyInit + AeadCore<NonceSize = U12>,
{
    let cipher =
        C::new_from_slice(key_bytes).map_err(|_| PassvaultError::InvalidKeyLength(key_bytes.len()))?;
    cipher
        .decrypt(&GenericArray::from(nonce), ciphertext)
        .map_err(|_| PassvaultError::AuthenticationFailed)
}
