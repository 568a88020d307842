//! Uniform random string generation.
//!
//! This is the only module in the crate that draws characters from a
//! randomness source. The source is injected at construction rather than
//! reached through global state, so every caller states explicitly which
//! generator its output depends on.
//!
//! Randomness choices:
//! - **Source**: any `RngCore + CryptoRng`; production callers inject
//!   `rand::rngs::OsRng`, tests may inject a seeded `StdRng`.
//! - **Selection**: `gen_range` per character — uniform, no modulo bias.
//! - **Shuffle**: Fisher–Yates via `SliceRandom`, driven by the same
//!   source. A comparator-based random sort is not a uniform permutation
//!   and is never used here.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};

use crate::error::PassvaultError;

/// The fixed character alphabets used across the crate.
pub mod alphabet {
    /// The 26 uppercase letters.
    pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    /// The 26 lowercase letters.
    pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
    /// The 10 decimal digits.
    pub const DIGITS: &str = "0123456789";
    /// The 62-symbol master-key alphabet: uppercase, lowercase, digits.
    pub const ALPHANUMERIC: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    /// The fixed whitelist of allowed special characters. Stored secrets
    /// are interoperable only if this set matches exactly; requests may
    /// narrow it but never extend it.
    pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+[]{}|;:',.<>/?`~";
}

/// Draws uniformly random strings from a character alphabet.
///
/// Holds the injected randomness source; all draws and shuffles consume it.
pub struct RandomStringGenerator<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RandomStringGenerator<R> {
    /// Wrap a cryptographically secure randomness source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `count` characters, each independently and uniformly selected
    /// (with replacement) from `alphabet`.
    ///
    /// An empty alphabet is rejected; `count == 0` over a non-empty
    /// alphabet yields an empty string.
    pub fn draw(&mut self, alphabet: &str, count: usize) -> Result<String, PassvaultError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if symbols.is_empty() {
            return Err(PassvaultError::InvalidAlphabet);
        }
        Ok((0..count)
            .map(|_| symbols[self.rng.gen_range(0..symbols.len())])
            .collect())
    }

    /// Uniformly permute `chars` in place (Fisher–Yates).
    pub fn shuffle(&mut self, chars: &mut [char]) {
        chars.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> RandomStringGenerator<StdRng> {
        RandomStringGenerator::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_draw_has_requested_length() {
        let mut gen = generator();
        for count in [0, 1, 12, 64] {
            assert_eq!(gen.draw(alphabet::ALPHANUMERIC, count).unwrap().chars().count(), count);
        }
    }

    #[test]
    fn test_draw_stays_inside_alphabet() {
        let mut gen = generator();
        let out = gen.draw("abc", 200).unwrap();
        assert!(out.chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let mut gen = generator();
        assert_eq!(gen.draw("x", 5).unwrap(), "xxxxx");
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let mut gen = generator();
        assert!(matches!(
            gen.draw("", 4),
            Err(PassvaultError::InvalidAlphabet)
        ));
        // Rejected even for a zero-length draw.
        assert!(matches!(
            gen.draw("", 0),
            Err(PassvaultError::InvalidAlphabet)
        ));
    }

    #[test]
    fn test_shuffle_preserves_characters() {
        let mut gen = generator();
        let mut chars: Vec<char> = "AAbbcc1122!!".chars().collect();
        gen.shuffle(&mut chars);

        let mut shuffled = chars.clone();
        let mut original: Vec<char> = "AAbbcc1122!!".chars().collect();
        shuffled.sort_unstable();
        original.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_special_character_whitelist_is_fixed() {
        // Wire-format constant: 28 symbols, order as documented.
        assert_eq!(alphabet::SPECIAL_CHARACTERS.chars().count(), 28);
        assert_eq!(alphabet::ALPHANUMERIC.len(), 62);
    }
}
