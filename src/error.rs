//! Error types for passvault.
//!
//! Every variant is a distinct failure mode of the vault core. Messages are
//! intentionally minimal — they signal *what* failed without carrying key
//! material or plaintext, so they are safe to render in a UI or log.
//!
//! Validation failures (generator or codec misuse) and cryptographic
//! failures are separate variants: callers can distinguish "tampered or
//! wrong key" (`AuthenticationFailed`) from "corrupt input"
//! (`DecodingError`) and render different messages for each.

use std::fmt;

/// The single error type for all passvault operations.
#[derive(Debug)]
pub enum PassvaultError {
    /// A random draw was requested from an empty character alphabet.
    InvalidAlphabet,

    /// A secret was requested with no character class both enabled and
    /// carrying a positive minimum count.
    NoCharacterClassSelected,

    /// The sum of the per-class minimum counts exceeds the requested
    /// total secret length.
    MinimumsExceedLength,

    /// An access-key field contains the reserved `.` delimiter. Fields are
    /// never escaped, so such a token could not be decoded unambiguously.
    InvalidField,

    /// An access-key token could not be decoded: not valid base64, not
    /// UTF-8, or not exactly three non-empty `.`-separated segments.
    MalformedAccessKey,

    /// The master key is not 16, 24, or 32 bytes and cannot key the
    /// cipher. Carries the offending byte length.
    InvalidKeyLength(usize),

    /// The authentication tag check failed during decryption. The
    /// ciphertext was tampered with or the key is wrong.
    AuthenticationFailed,

    /// Ciphertext or nonce bytes could not be decoded from their stored
    /// text form, or the decrypted bytes were not valid UTF-8.
    DecodingError,

    /// The cipher primitive refused to encrypt. The underlying AEAD
    /// operation returned an error.
    EncryptionFailure,
}

impl fmt::Display for PassvaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabet => write!(f, "alphabet is empty"),
            Self::NoCharacterClassSelected => write!(f, "no character class selected"),
            Self::MinimumsExceedLength => write!(f, "minimum counts exceed requested length"),
            Self::InvalidField => write!(f, "field contains the reserved delimiter"),
            Self::MalformedAccessKey => write!(f, "malformed access key"),
            Self::InvalidKeyLength(len) => write!(f, "invalid key length: {} bytes", len),
            Self::AuthenticationFailed => write!(f, "authentication failed"),
            Self::DecodingError => write!(f, "decoding failed"),
            Self::EncryptionFailure => write!(f, "encryption failed"),
        }
    }
}

impl std::error::Error for PassvaultError {}
