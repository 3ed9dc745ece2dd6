//! BIP-39 seed phrase shape and dictionary checks
//!
//! Only the shape and word membership are checked here. The BIP-39 checksum
//! is left alone: a phrase with valid words but a bad checksum still encrypts.

use bip39::Language;

use crate::error::{SeedlockError, SeedlockResult};

/// Word counts a seed phrase may have
pub const ALLOWED_WORD_COUNTS: [usize; 2] = [12, 24];

/// The English BIP-39 dictionary, sorted
fn dictionary() -> &'static [&'static str] {
    Language::English.wordlist().get_words_by_prefix("")
}

/// Whether a word appears in the English BIP-39 dictionary
pub fn is_dictionary_word(word: &str) -> bool {
    dictionary().binary_search(&word).is_ok()
}

/// Validate a seed phrase, naming the first rule it breaks
pub fn validate_seed_phrase(phrase: &str) -> SeedlockResult<()> {
    if phrase.is_empty() {
        return Err(invalid("Seed phrase must not be empty"));
    }

    if phrase.starts_with(' ') || phrase.ends_with(' ') || phrase.contains("  ") {
        return Err(invalid(
            "Seed phrase must not have leading, trailing or double spaces",
        ));
    }

    let words: Vec<&str> = phrase.split(' ').collect();
    if !ALLOWED_WORD_COUNTS.contains(&words.len()) {
        return Err(invalid(format!(
            "Seed phrase must have 12 or 24 words (found {})",
            words.len()
        )));
    }

    for word in &words {
        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(invalid(format!(
                "Word '{}' contains invalid characters (only lowercase letters a-z are allowed)",
                word
            )));
        }
    }

    for word in &words {
        if !is_dictionary_word(word) {
            return Err(invalid(format!(
                "Word '{}' is not in the BIP-39 dictionary",
                word
            )));
        }
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> SeedlockError {
    SeedlockError::Validation(message.into())
}
