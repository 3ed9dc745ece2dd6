//! `seedlock decrypt`

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use crate::crypto::{decrypt, SecureString};
use crate::error::{SeedlockError, SeedlockResult};
use crate::transport::PayloadCodec;

use super::prompt::{read_line, PasswordPrompt};

/// Arguments for the decrypt command
#[derive(Args, Debug, Default)]
pub struct DecryptArgs {
    /// Read the payload from this file
    #[arg(short, long, conflicts_with = "blob")]
    pub input: Option<PathBuf>,

    /// Payload text; read from standard input when neither this nor --input is given
    #[arg(long)]
    pub blob: Option<String>,
}

/// Recover the phrase from a payload and print it
pub fn handle_decrypt_command<R, W, P>(
    args: &DecryptArgs,
    password: Option<SecureString>,
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
    let payload = match (&args.input, &args.blob) {
        (Some(path), _) => codec.read_payload(path)?,
        (None, Some(blob)) => blob.clone(),
        (None, None) => read_line(input)?.unwrap_or_default(),
    };
    if payload.trim().is_empty() {
        return Err(SeedlockError::Validation(
            "No payload was given".to_string(),
        ));
    }

    let password = match password {
        Some(password) => password,
        None => prompt.read_password("Enter password: ")?,
    };

    let phrase = SecureString::from(decrypt(&payload, &password)?);
    writeln!(out, "{}", phrase.as_str())?;
    Ok(())
}
