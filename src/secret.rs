//! Constraint-satisfying secret generation.
//!
//! A secret request names four character classes — uppercase, lowercase,
//! digits, special — each with an enabled flag and a minimum count, plus a
//! total length. Generation draws the mandatory characters first, fills the
//! remainder from the combined alphabet of every enabled class, then
//! uniformly shuffles so the mandatory characters are not clustered at the
//! front of the result.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::PassvaultError;
use crate::random::{alphabet, RandomStringGenerator};

/// Configuration for one character class within a request.
///
/// A disabled class contributes nothing, and its stored minimum is treated
/// as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    /// Whether characters from this class may appear in the secret.
    pub enabled: bool,
    /// How many characters from this class must appear, at minimum.
    pub minimum_count: usize,
}

impl CharacterClass {
    /// An enabled class with the given minimum count.
    pub fn enabled(minimum_count: usize) -> Self {
        Self {
            enabled: true,
            minimum_count,
        }
    }

    /// A disabled class.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// The minimum this class actually imposes: zero when disabled.
    fn active_minimum(&self) -> usize {
        if self.enabled {
            self.minimum_count
        } else {
            0
        }
    }
}

/// A request for one generated secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretGenerationRequest {
    pub uppercase: CharacterClass,
    pub lowercase: CharacterClass,
    pub digits: CharacterClass,
    pub special: CharacterClass,
    /// Candidate special characters. Deduplicated (first occurrence wins)
    /// and restricted to `alphabet::SPECIAL_CHARACTERS` before any draw;
    /// symbols outside the whitelist are silently dropped.
    pub special_alphabet: String,
    /// Total length of the generated secret.
    pub length: usize,
}

/// Generates secrets satisfying per-class constraints.
pub struct SecretGenerator<R> {
    strings: RandomStringGenerator<R>,
}

impl<R: RngCore + CryptoRng> SecretGenerator<R> {
    /// Wrap a cryptographically secure randomness source.
    pub fn new(rng: R) -> Self {
        Self {
            strings: RandomStringGenerator::new(rng),
        }
    }

    /// Generate a secret satisfying `request`.
    ///
    /// Fails with `NoCharacterClassSelected` unless at least one class is
    /// both enabled and has a positive minimum — a request whose only
    /// enabled classes carry minimum zero is rejected, including at
    /// `length == 0`. Fails with `MinimumsExceedLength` when the active
    /// minimums sum past the total length.
    pub fn generate(&mut self, request: &SecretGenerationRequest) -> Result<String, PassvaultError> {
        let special_alphabet = sanitize_special_alphabet(&request.special_alphabet);
        let classes: [(&CharacterClass, &str); 4] = [
            (&request.uppercase, alphabet::UPPERCASE),
            (&request.lowercase, alphabet::LOWERCASE),
            (&request.digits, alphabet::DIGITS),
            (&request.special, &special_alphabet),
        ];

        if !classes
            .iter()
            .any(|(class, _)| class.enabled && class.minimum_count > 0)
        {
            return Err(PassvaultError::NoCharacterClassSelected);
        }
        let required: usize = classes.iter().map(|(class, _)| class.active_minimum()).sum();
        if required > request.length {
            return Err(PassvaultError::MinimumsExceedLength);
        }

        // Mandatory characters per class, plus the combined pool of every
        // enabled alphabet. Symbols shared between classes stay duplicated
        // in the pool; a global dedup would skew the fill distribution
        // away from the caller's class selection.
        let mut pool = String::new();
        let mut chars: Vec<char> = Vec::with_capacity(request.length);
        for (class, class_alphabet) in classes {
            if !class.enabled {
                continue;
            }
            pool.push_str(class_alphabet);
            if class.minimum_count > 0 {
                chars.extend(self.strings.draw(class_alphabet, class.minimum_count)?.chars());
            }
        }

        let filler = self.strings.draw(&pool, request.length - chars.len())?;
        chars.extend(filler.chars());

        self.strings.shuffle(&mut chars);
        Ok(chars.into_iter().collect())
    }
}

/// Deduplicate a candidate special alphabet and drop anything outside the
/// fixed whitelist. First occurrence wins; order is otherwise irrelevant to
/// a uniform draw.
fn sanitize_special_alphabet(candidates: &str) -> String {
    let mut kept = String::new();
    for c in candidates.chars() {
        if alphabet::SPECIAL_CHARACTERS.contains(c) && !kept.contains(c) {
            kept.push(c);
        }
    }
    kept
}
