//! Interactive menu
//!
//! Walks the user through encrypting a phrase or recovering one, re-prompting
//! on mistakes the user can fix (bad input, wrong password) and returning to
//! the menu on anything else. End of input ends the session quietly.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::crypto::{decrypt, encrypt, SecureString};
use crate::error::{SeedlockError, SeedlockResult};
use crate::transport::{normalize_output_path, PayloadCodec};
use crate::validation::{validate_password, validate_seed_phrase};

use super::prompt::{
    ask_yes_no, print_password_requirements, print_seed_phrase_requirements, read_line,
    PasswordPrompt,
};

/// `None` means the input stream ended
type Step<T> = SeedlockResult<Option<T>>;

/// One interactive session over arbitrary input/output streams
pub struct Session<'a, R, W, P> {
    input: R,
    out: W,
    prompt: P,
    codec: &'a dyn PayloadCodec,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write, P: PasswordPrompt> Session<'a, R, W, P> {
    pub fn new(
        input: R,
        out: W,
        prompt: P,
        codec: &'a dyn PayloadCodec,
        settings: &'a Settings,
    ) -> Self {
        Self {
            input,
            out,
            prompt,
            codec,
            settings,
        }
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> SeedlockResult<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "What would you like to do?")?;
            writeln!(self.out, "1. Encrypt a seed phrase and save the payload")?;
            writeln!(self.out, "2. Decrypt a payload file")?;
            writeln!(self.out, "3. Decrypt pasted payload text")?;
            writeln!(self.out, "4. Exit")?;
            write!(self.out, "\nEnter option number (1-4): ")?;
            self.out.flush()?;

            let Some(choice) = read_line(&mut self.input)? else {
                return Ok(());
            };

            let outcome = match choice.trim() {
                "1" => self.encrypt_phrase(),
                "2" => self.decrypt_file(),
                "3" => self.decrypt_text(),
                "4" => {
                    writeln!(self.out, "\nGoodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.out, "\nInvalid choice. Please enter 1, 2, 3 or 4.")?;
                    continue;
                }
            };

            match outcome {
                Ok(Some(())) => {}
                Ok(None) => return Ok(()),
                Err(e) => writeln!(self.out, "\nError: {}", e)?,
            }

            if !ask_yes_no(
                &mut self.input,
                &mut self.out,
                "\nWould you like to perform another operation?",
            )? {
                writeln!(self.out, "\nGoodbye!")?;
                return Ok(());
            }
        }
    }

    fn encrypt_phrase(&mut self) -> Step<()> {
        let Some(phrase) = self.read_phrase()? else {
            return Ok(None);
        };
        let Some(password) = self.read_valid_password()? else {
            return Ok(None);
        };

        let payload = encrypt(&phrase, &password)?;
        writeln!(self.out, "\nEncrypted payload: {}", payload)?;

        self.save_payload(&payload)
    }

    /// Ask for an output file until the payload is written
    fn save_payload(&mut self, payload: &str) -> Step<()> {
        loop {
            write!(
                self.out,
                "\nEnter a file name for the payload (Enter for '{}'): ",
                self.settings.default_output_file
            )?;
            self.out.flush()?;
            let Some(name) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            let path = normalize_output_path(
                &name,
                &self.settings.default_output_file,
                self.codec.extension(),
            );

            match self.codec.write_payload(payload, &path) {
                Ok(()) => {
                    writeln!(self.out, "Payload saved to {}", path.display())?;
                    return Ok(Some(()));
                }
                Err(e) => {
                    writeln!(self.out, "\nError: {}", e)?;
                    writeln!(self.out, "Please try again.")?;
                }
            }
        }
    }

    fn decrypt_file(&mut self) -> Step<()> {
        loop {
            write!(self.out, "\nEnter the path to the payload file: ")?;
            self.out.flush()?;
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };

            let path = line.trim();
            if path.is_empty() {
                writeln!(self.out, "\nError: Path must not be empty. Please try again.")?;
                continue;
            }
            if !Path::new(path).is_file() {
                writeln!(self.out, "\nError: File not found: {}. Please try again.", path)?;
                continue;
            }

            match self.codec.read_payload(Path::new(path)) {
                Ok(payload) => return self.decrypt_with_retries(&payload),
                Err(e) => {
                    writeln!(self.out, "\nError: {}", e)?;
                    if !ask_yes_no(&mut self.input, &mut self.out, "Try another file?")? {
                        return Ok(Some(()));
                    }
                }
            }
        }
    }

    fn decrypt_text(&mut self) -> Step<()> {
        loop {
            writeln!(self.out, "\nPaste the encrypted payload:")?;
            self.out.flush()?;
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                writeln!(self.out, "\nError: Payload must not be empty. Please try again.")?;
                continue;
            }
            return self.decrypt_with_retries(line.trim());
        }
    }

    /// Ask for the password until decryption succeeds or fails for good
    fn decrypt_with_retries(&mut self, payload: &str) -> Step<()> {
        loop {
            let Some(password) = self.read_valid_password()? else {
                return Ok(None);
            };

            match decrypt(payload, &password) {
                Ok(phrase) => {
                    let phrase = SecureString::from(phrase);
                    writeln!(self.out, "\nRecovered seed phrase: {}", phrase.as_str())?;
                    return Ok(Some(()));
                }
                Err(e) if e.is_retryable() => {
                    writeln!(self.out, "\nError: {}", e)?;
                    writeln!(self.out, "Please try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_phrase(&mut self) -> Step<SecureString> {
        let enforce = self.settings.enforce_seed_phrase;
        loop {
            if enforce {
                print_seed_phrase_requirements(&mut self.out)?;
            }
            write!(self.out, "\nEnter the seed phrase: ")?;
            self.out.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            let phrase = SecureString::from(line);

            let checked = if enforce {
                validate_seed_phrase(&phrase)
            } else if phrase.is_empty() {
                Err(SeedlockError::Validation(
                    "Seed phrase must not be empty".to_string(),
                ))
            } else {
                Ok(())
            };

            match checked {
                Ok(()) => return Ok(Some(phrase)),
                Err(e) => {
                    writeln!(self.out, "\nError: {}", e)?;
                    writeln!(self.out, "Please try again.")?;
                }
            }
        }
    }

    fn read_valid_password(&mut self) -> Step<SecureString> {
        loop {
            print_password_requirements(&mut self.out)?;
            self.out.flush()?;

            let password = match self.prompt.read_password("Enter password: ") {
                Ok(password) => password,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            match validate_password(&password) {
                Ok(()) => return Ok(Some(password)),
                Err(e) => {
                    writeln!(self.out, "\nError: {}", e)?;
                    writeln!(self.out, "Please try again.")?;
                }
            }
        }
    }
}
