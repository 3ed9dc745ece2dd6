//! Input validation
//!
//! Stateless predicates run before any cryptography: password strength and
//! BIP-39 seed phrase shape.

pub mod password;
pub mod seed_phrase;

pub use password::{password_violations, validate_password, PasswordRule, MIN_PASSWORD_LENGTH};
pub use seed_phrase::{is_dictionary_word, validate_seed_phrase};
