//! Password strength rules
//!
//! Every rule is checked independently so the caller can show all remaining
//! requirements at once. Character classes are ASCII-only: a non-ASCII letter
//! or digit counts as a special character, never as upper/lower/digit.

use std::fmt;

use crate::error::{SeedlockError, SeedlockResult};

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// A single password requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    /// All rules, in the order they are reported
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// The requirement as shown before a password prompt
    pub fn requirement(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "At least 12 characters",
            PasswordRule::Uppercase => "At least one uppercase letter (A-Z)",
            PasswordRule::Lowercase => "At least one lowercase letter (a-z)",
            PasswordRule::Digit => "At least one digit (0-9)",
            PasswordRule::Special => "At least one special character (!@#$%^&* etc.)",
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            PasswordRule::MinLength => "Password is too short (at least 12 characters required)",
            PasswordRule::Uppercase => "Password must contain at least one uppercase letter",
            PasswordRule::Lowercase => "Password must contain at least one lowercase letter",
            PasswordRule::Digit => "Password must contain at least one digit",
            PasswordRule::Special => "Password must contain at least one special character",
        };
        f.write_str(message)
    }
}

/// Every rule the password violates, in reporting order
pub fn password_violations(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect()
}

/// Validate password strength, reporting all violated rules together
pub fn validate_password(password: &str) -> SeedlockResult<()> {
    let violations = password_violations(password);
    if violations.is_empty() {
        return Ok(());
    }

    let message = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Err(SeedlockError::Validation(message))
}
