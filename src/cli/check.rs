//! `seedlock check-password` and `seedlock check-phrase`

use std::io::{BufRead, Write};

use crate::crypto::SecureString;
use crate::error::SeedlockResult;
use crate::validation::{validate_password, validate_seed_phrase};

use super::prompt::{print_password_requirements, read_line, PasswordPrompt};

/// Report whether a password meets every strength rule
pub fn handle_check_password<W: Write, P: PasswordPrompt>(
    password: Option<SecureString>,
    prompt: &mut P,
    out: &mut W,
) -> SeedlockResult<()> {
    let password = match password {
        Some(password) => password,
        None => {
            print_password_requirements(out)?;
            out.flush()?;
            prompt.read_password("Password to check: ")?
        }
    };

    validate_password(&password)?;
    writeln!(out, "Password meets all requirements.")?;
    Ok(())
}

/// Report whether the phrase on `input` is a well-formed BIP-39 seed phrase
pub fn handle_check_phrase<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> SeedlockResult<()> {
    let phrase = SecureString::from(read_line(input)?.unwrap_or_default());

    validate_seed_phrase(&phrase)?;
    writeln!(
        out,
        "Seed phrase is valid ({} words).",
        phrase.split(' ').count()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::cli::prompt::ScriptedPrompt;

    #[test]
    fn test_check_password_reports_every_rule() {
        let err = handle_check_password(
            Some(SecureString::from("short")),
            &mut ScriptedPrompt::new(&[]),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err.to_string().lines().count(), 4);
    }

    #[test]
    fn test_check_password_prompts_when_missing() {
        let mut out = Vec::new();
        handle_check_password(None, &mut ScriptedPrompt::new(&["Aa1!aaaaaaaa"]), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Password requirements:"));
        assert!(printed.contains("meets all requirements"));
    }

    #[test]
    fn test_check_phrase() {
        let mut out = Vec::new();
        let phrase = "zoo ".repeat(11) + "wrong";
        handle_check_phrase(&mut Cursor::new(phrase), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Seed phrase is valid (12 words).\n");

        let err = handle_check_phrase(&mut Cursor::new("zoo zoo"), &mut Vec::new()).unwrap_err();
        assert!(err.is_validation());
    }
}
