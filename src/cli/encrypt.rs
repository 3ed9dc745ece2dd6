//! `seedlock encrypt`

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::crypto::{encrypt, SecureString};
use crate::error::{SeedlockError, SeedlockResult};
use crate::transport::{normalize_output_path, PayloadCodec};
use crate::validation::validate_seed_phrase;

use super::prompt::{prompt_new_password, read_line, PasswordPrompt};

/// How many times a new password may be rejected before giving up
const NEW_PASSWORD_ATTEMPTS: usize = 3;

/// Arguments for the encrypt command
#[derive(Args, Debug, Default)]
pub struct EncryptArgs {
    /// Where to save the payload (defaults to the configured file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accept any text, not just a BIP-39 seed phrase
    #[arg(long)]
    pub any_text: bool,

    /// Print the payload without saving it
    #[arg(long)]
    pub print_only: bool,
}

/// Read a phrase from `input`, encrypt it and save the payload
///
/// The payload is the first line written to `out`.
pub fn handle_encrypt_command<R, W, P>(
    args: &EncryptArgs,
    password: Option<SecureString>,
    settings: &Settings,
    codec: &dyn PayloadCodec,
    prompt: &mut P,
    input: &mut R,
    out: &mut W,
) -> SeedlockResult<()>
where
    R: BufRead,
    W: Write,
    P: PasswordPrompt,
{
    let phrase = read_line(input)?
        .map(SecureString::from)
        .filter(|phrase| !phrase.is_empty())
        .ok_or_else(|| {
            SeedlockError::Validation("No text to encrypt was given on standard input".to_string())
        })?;

    if settings.enforce_seed_phrase && !args.any_text {
        validate_seed_phrase(&phrase)?;
    }

    let password = match password {
        Some(password) => password,
        None => prompt_new_password(prompt, &mut std::io::stderr(), NEW_PASSWORD_ATTEMPTS)?,
    };

    let payload = encrypt(&phrase, &password)?;
    writeln!(out, "{}", payload)?;

    if !args.print_only {
        let requested = args
            .output
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = normalize_output_path(
            &requested,
            &settings.default_output_file,
            codec.extension(),
        );
        codec.write_payload(&payload, &path)?;
        writeln!(out, "Payload saved to {}", path.display())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::cli::prompt::ScriptedPrompt;
    use crate::crypto::decrypt;
    use crate::transport::TextPayloadCodec;

    const PASSWORD: &str = "Encrypt-Cmd-2024!";
    const PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_encrypt_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let args = EncryptArgs {
            output: Some(temp_dir.path().join("wallet")),
            ..EncryptArgs::default()
        };
        let mut out = Vec::new();

        handle_encrypt_command(
            &args,
            Some(SecureString::from(PASSWORD)),
            &Settings::default(),
            &TextPayloadCodec,
            &mut ScriptedPrompt::new(&[]),
            &mut Cursor::new(format!("{PHRASE}\n")),
            &mut out,
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        let payload = printed.lines().next().unwrap();
        let saved = TextPayloadCodec
            .read_payload(&temp_dir.path().join("wallet.txt"))
            .unwrap();
        assert_eq!(saved, payload);
        assert_eq!(decrypt(payload, PASSWORD).unwrap(), PHRASE);
    }

    #[test]
    fn test_rejects_non_seed_phrase_by_default() {
        let err = handle_encrypt_command(
            &EncryptArgs::default(),
            Some(SecureString::from(PASSWORD)),
            &Settings::default(),
            &TextPayloadCodec,
            &mut ScriptedPrompt::new(&[]),
            &mut Cursor::new("hello world\n"),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = handle_encrypt_command(
            &EncryptArgs::default(),
            Some(SecureString::from(PASSWORD)),
            &Settings::default(),
            &TextPayloadCodec,
            &mut ScriptedPrompt::new(&[]),
            &mut Cursor::new(""),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_any_text_print_only_prompts_for_password() {
        let args = EncryptArgs {
            any_text: true,
            print_only: true,
            ..EncryptArgs::default()
        };
        let mut out = Vec::new();

        handle_encrypt_command(
            &args,
            None,
            &Settings::default(),
            &TextPayloadCodec,
            &mut ScriptedPrompt::new(&[PASSWORD, PASSWORD]),
            &mut Cursor::new("hello world\n"),
            &mut out,
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert_eq!(decrypt(printed.trim(), PASSWORD).unwrap(), "hello world");
    }
}
