//! Access-key tokens.
//!
//! An access key is the single portable credential for a vault: the master
//! key plus the two identifiers naming where the vault lives (database
//! name, store name), joined by `.` and base64-encoded into one opaque
//! token. Decoding the token is the only way to recover the triple.
//!
//! Wire format (no version byte; any change breaks existing tokens):
//!
//! ```text
//! base64( master_key "." database_name "." store_name )
//! ```
//!
//! Fields are never escaped, so none of them may contain the delimiter.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::{CryptoRng, RngCore};

use crate::error::PassvaultError;
use crate::keys::MasterKey;
use crate::random::{alphabet, RandomStringGenerator};

/// The reserved field separator inside a decoded token.
const DELIMITER: char = '.';

/// Length of a generated database or store name, in characters.
const NAME_LEN: usize = 12;

/// An encoded access-key token. Opaque to callers; safe to display and
/// transport as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Borrow the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, yielding its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The triple recovered from a decoded access key.
#[derive(Debug, PartialEq, Eq)]
pub struct AccessKeyParts {
    pub master_key: MasterKey,
    pub database_name: String,
    pub store_name: String,
}

/// Pack a master key and the two vault identifiers into a token.
///
/// Fails with `InvalidField` if any field contains the reserved `.`
/// delimiter — no escaping is performed, so such a token could not be
/// split back apart unambiguously. Empty fields are encodable but will be
/// rejected by `decode`; callers creating real vaults pass non-empty names.
pub fn encode(
    master_key: &MasterKey,
    database_name: &str,
    store_name: &str,
) -> Result<AccessKey, PassvaultError> {
    for field in [master_key.as_str(), database_name, store_name] {
        if field.contains(DELIMITER) {
            return Err(PassvaultError::InvalidField);
        }
    }
    let joined = format!(
        "{}{}{}{}{}",
        master_key.as_str(),
        DELIMITER,
        database_name,
        DELIMITER,
        store_name
    );
    Ok(AccessKey(BASE64.encode(joined)))
}

/// Recover the (master key, database name, store name) triple from a token.
///
/// Fails with `MalformedAccessKey` if the token is empty, is not valid
/// base64, does not decode to UTF-8, or does not split into exactly three
/// non-empty segments. Garbage input never partially populates the triple.
pub fn decode(token: &str) -> Result<AccessKeyParts, PassvaultError> {
    if token.is_empty() {
        return Err(PassvaultError::MalformedAccessKey);
    }
    let decoded = BASE64
        .decode(token)
        .map_err(|_| PassvaultError::MalformedAccessKey)?;
    let decoded = String::from_utf8(decoded).map_err(|_| PassvaultError::MalformedAccessKey)?;

    let segments: Vec<&str> = decoded.split(DELIMITER).collect();
    match segments.as_slice() {
        [master_key, database_name, store_name]
            if !master_key.is_empty() && !database_name.is_empty() && !store_name.is_empty() =>
        {
            Ok(AccessKeyParts {
                master_key: MasterKey::new((*master_key).to_string()),
                database_name: (*database_name).to_string(),
                store_name: (*store_name).to_string(),
            })
        }
        _ => Err(PassvaultError::MalformedAccessKey),
    }
}

/// Create the access key for a brand-new vault: a fresh 32-character
/// master key plus two random 12-character lowercase identifiers, encoded.
///
/// The lowercase name alphabet keeps the identifiers usable directly as
/// database and object-store names in the host's storage layer.
pub fn generate_access_key<R: RngCore + CryptoRng>(
    mut rng: R,
) -> Result<AccessKey, PassvaultError> {
    let master_key = MasterKey::generate(&mut rng)?;
    let mut strings = RandomStringGenerator::new(&mut rng);
    let database_name = strings.draw(alphabet::LOWERCASE, NAME_LEN)?;
    let store_name = strings.draw(alphabet::LOWERCASE, NAME_LEN)?;
    encode(&master_key, &database_name, &store_name)
}
