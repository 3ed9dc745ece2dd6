//! Cryptographic functions for seedlock
//!
//! Provides PBKDF2-SHA512 key derivation, AES-256-GCM encryption of seed
//! phrases, and a decoder for the older AES-CBC + HMAC format.

pub mod encryption;
pub mod format;
pub mod key_derivation;
pub mod legacy;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, open, MAX_PLAINTEXT_BYTES};
pub use format::EncryptedBlob;
pub use key_derivation::{derive_key, DerivedKey, KdfHash, KeyDerivationParams};
pub use secure_memory::{SecureBytes, SecureString};
