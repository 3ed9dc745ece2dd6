//! CLI command handlers
//!
//! Bridges clap argument parsing with the encryption engine. Handlers take
//! their input, output and password source as parameters so they can be
//! driven from tests as well as from the terminal.

pub mod check;
pub mod decrypt;
pub mod encrypt;
pub mod interactive;
pub mod prompt;

pub use check::{handle_check_password, handle_check_phrase};
pub use decrypt::{handle_decrypt_command, DecryptArgs};
pub use encrypt::{handle_encrypt_command, EncryptArgs};
pub use interactive::Session;
pub use prompt::{PasswordPrompt, TerminalPrompt};
