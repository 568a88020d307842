//! Any bit flip in a stored ciphertext or nonce must surface as an
//! authentication failure — never as silently different plaintext.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use passvault::{decrypt, encrypt, MasterKey, PassvaultError};

/// Flip one bit inside stored base64 text, keeping it valid base64.
fn flip_bit(stored: &str, byte: usize, bit: u8) -> String {
    let mut bytes = BASE64.decode(stored).unwrap();
    bytes[byte] ^= 1 << bit;
    BASE64.encode(bytes)
}

#[test]
fn test_every_ciphertext_bit_is_authenticated() {
    let key = MasterKey::new("A".repeat(32));
    let value = encrypt("tamper target", &key).unwrap();
    let ciphertext_len = BASE64.decode(&value.ciphertext).unwrap().len();

    for byte in 0..ciphertext_len {
        let tampered = flip_bit(&value.ciphertext, byte, byte as u8 % 8);
        assert!(
            matches!(
                decrypt(&tampered, &key, &value.nonce),
                Err(PassvaultError::AuthenticationFailed)
            ),
            "bit flip in ciphertext byte {} was not detected",
            byte
        );
    }
}

#[test]
fn test_every_nonce_bit_is_authenticated() {
    let key = MasterKey::new("A".repeat(32));
    let value = encrypt("tamper target", &key).unwrap();

    for byte in 0..passvault::NONCE_LEN {
        for bit in 0..8 {
            let tampered = flip_bit(&value.nonce, byte, bit);
            assert!(
                matches!(
                    decrypt(&value.ciphertext, &key, &tampered),
                    Err(PassvaultError::AuthenticationFailed)
                ),
                "bit flip in nonce byte {} bit {} was not detected",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_wrong_key_is_an_authentication_failure() {
    let key = MasterKey::new("A".repeat(32));
    let other = MasterKey::new("B".repeat(32));
    let value = encrypt("secret field", &key).unwrap();

    assert!(matches!(
        decrypt(&value.ciphertext, &other, &value.nonce),
        Err(PassvaultError::AuthenticationFailed)
    ));
}

#[test]
fn test_corrupt_text_is_decoding_not_authentication() {
    let key = MasterKey::new("A".repeat(32));
    let value = encrypt("secret field", &key).unwrap();

    // Invalid base64 in either slot is corrupt input, not tampering.
    assert!(matches!(
        decrypt("!!not base64!!", &key, &value.nonce),
        Err(PassvaultError::DecodingError)
    ));
    assert!(matches!(
        decrypt(&value.ciphertext, &key, "!!not base64!!"),
        Err(PassvaultError::DecodingError)
    ));
    // A nonce of the wrong decoded length is likewise corrupt input.
    assert!(matches!(
        decrypt(&value.ciphertext, &key, &BASE64.encode([0u8; 8])),
        Err(PassvaultError::DecodingError)
    ));
}
