//! Console input helpers shared by the subcommands and the interactive menu

use std::io::{self, BufRead, Write};

use crate::crypto::SecureString;
use crate::error::{SeedlockError, SeedlockResult};
use crate::validation::{password_violations, PasswordRule};

/// Source of hidden password input
pub trait PasswordPrompt {
    /// Show `prompt` and read one password without echoing it
    fn read_password(&mut self, prompt: &str) -> io::Result<SecureString>;
}

/// Reads passwords from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn read_password(&mut self, prompt: &str) -> io::Result<SecureString> {
        rpassword::prompt_password(prompt).map(SecureString::from)
    }
}

/// Read one line without its line ending; `None` once input is exhausted
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Print the password rules shown before every password prompt
pub fn print_password_requirements<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Password requirements:")?;
    for rule in PasswordRule::ALL {
        writeln!(out, "  - {}", rule.requirement())?;
    }
    Ok(())
}

/// Print the seed phrase rules shown before a phrase prompt
pub fn print_seed_phrase_requirements<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Seed phrase requirements:")?;
    writeln!(out, "  - Exactly 12 or 24 words")?;
    writeln!(out, "  - Words separated by a single space")?;
    writeln!(out, "  - Only words from the standard BIP-39 dictionary")?;
    writeln!(out, "  - All words in lowercase")?;
    Ok(())
}

/// Ask for a new password until it is strong and confirmed
///
/// Gives up after `attempts` rejected entries.
pub fn prompt_new_password<P: PasswordPrompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    attempts: usize,
) -> SeedlockResult<SecureString> {
    for _ in 0..attempts {
        print_password_requirements(out)?;
        out.flush()?;

        let first = prompt.read_password("Enter password: ")?;
        let violations = password_violations(&first);
        if !violations.is_empty() {
            for rule in violations {
                writeln!(out, "Error: {}", rule)?;
            }
            writeln!(out, "Please try again.")?;
            continue;
        }

        let second = prompt.read_password("Confirm password: ")?;
        if first != second {
            writeln!(out, "Passwords do not match. Please try again.")?;
            continue;
        }

        return Ok(first);
    }

    Err(SeedlockError::Validation(
        "Too many invalid password attempts".to_string(),
    ))
}

/// Ask a yes/no question; anything but `y`/`yes` is no
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    writeln!(out, "{} (y/n)", question)?;
    out.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_uppercase().as_str(),
        "Y" | "YES"
    ))
}

/// Scripted password source for tests
#[cfg(test)]
pub(crate) struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl PasswordPrompt for ScriptedPrompt {
    fn read_password(&mut self, _prompt: &str) -> io::Result<SecureString> {
        self.answers
            .pop_front()
            .map(SecureString::from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more passwords"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut input = Cursor::new("first\r\nsecond\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_new_password_retries_weak_and_mismatched() {
        let mut prompt = ScriptedPrompt::new(&[
            "weak",
            "Str0ng-Password!",
            "Str0ng-Passw0rd!",
            "Str0ng-Password!",
            "Str0ng-Password!",
        ]);
        let mut out = Vec::new();

        let password = prompt_new_password(&mut prompt, &mut out, 5).unwrap();
        assert_eq!(password.as_str(), "Str0ng-Password!");

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("too short"));
        assert!(printed.contains("Passwords do not match"));
    }

    #[test]
    fn test_prompt_new_password_gives_up() {
        let mut prompt = ScriptedPrompt::new(&["weak", "weaker"]);
        let mut out = Vec::new();

        let err = prompt_new_password(&mut prompt, &mut out, 2).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_ask_yes_no() {
        let mut out = Vec::new();
        assert!(ask_yes_no(&mut Cursor::new("yes\n"), &mut out, "Continue?").unwrap());
        assert!(ask_yes_no(&mut Cursor::new("Y\n"), &mut out, "Continue?").unwrap());
        assert!(!ask_yes_no(&mut Cursor::new("nope\n"), &mut out, "Continue?").unwrap());
        assert!(!ask_yes_no(&mut Cursor::new(""), &mut out, "Continue?").unwrap());
    }
}
