//! seedlock - password-protected payloads for BIP-39 seed phrases
//!
//! Turns a seed phrase into a Base64 payload that can be printed as a QR code
//! and recovers the phrase later from that payload and the password.
//!
//! # Architecture
//!
//! - `validation`: password strength and seed phrase checks
//! - `crypto`: PBKDF2 key derivation, the versioned blob format, AES-GCM
//!   encryption and the legacy AES-CBC + HMAC decoder
//! - `transport`: moving payload strings to and from files
//! - `config`: configuration paths and user settings
//! - `cli`: subcommand handlers and the interactive menu
//! - `logging`: tracing subscriber setup
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use seedlock::{decrypt, encrypt};
//!
//! let payload = encrypt(phrase, "Str0ng-Password!")?;
//! assert_eq!(decrypt(&payload, "Str0ng-Password!")?, phrase);
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod transport;
pub mod validation;

pub use crypto::{decrypt, encrypt};
pub use error::{SeedlockError, SeedlockResult};
pub use validation::{validate_password, validate_seed_phrase};
