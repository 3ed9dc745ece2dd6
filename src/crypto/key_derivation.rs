//! Key derivation using PBKDF2
//!
//! Derives AES-256 keys from user passwords with PBKDF2-HMAC. The iteration
//! count is a security parameter: 600 000 is the floor, never a tuning knob.

use pbkdf2::pbkdf2_hmac;
use sha2::{Sha256, Sha512};
use tracing::{debug, error};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SeedlockError, SeedlockResult};

use super::SecureBytes;

/// Salt size in bytes, shared by every format version
pub const SALT_SIZE: usize = 32;

/// AES-256 key size in bytes
pub const KEY_SIZE: usize = 32;

/// Minimum accepted PBKDF2 iteration count
pub const MIN_ITERATIONS: u32 = 600_000;

/// Hash function driving the PBKDF2 HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfHash {
    Sha256,
    Sha512,
}

impl KdfHash {
    pub fn name(&self) -> &'static str {
        match self {
            KdfHash::Sha256 => "SHA-256",
            KdfHash::Sha512 => "SHA-512",
        }
    }
}

/// Parameters for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDerivationParams {
    /// PBKDF2 iteration count
    pub iterations: u32,
    /// HMAC hash
    pub hash: KdfHash,
    /// Output length in bytes
    pub key_len: usize,
}

impl KeyDerivationParams {
    /// Parameters used by format versions 1 and 2
    pub const CURRENT: Self = Self {
        iterations: MIN_ITERATIONS,
        hash: KdfHash::Sha512,
        key_len: KEY_SIZE,
    };

    fn check(&self) -> SeedlockResult<()> {
        if self.iterations < MIN_ITERATIONS {
            return Err(SeedlockError::Encryption(format!(
                "Iteration count {} is below the minimum of {}",
                self.iterations, MIN_ITERATIONS
            )));
        }
        if self.key_len == 0 {
            return Err(SeedlockError::Encryption(
                "Derived key length must not be zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// A derived encryption key
///
/// Lives only for the duration of one encrypt/decrypt call and is zeroized
/// when dropped, on success and error paths alike.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: SecureBytes,
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("len", &self.key.len())
            .finish()
    }
}

/// Derive an encryption key from a password
pub fn derive_key(
    password: &str,
    salt: &[u8],
    params: &KeyDerivationParams,
) -> SeedlockResult<DerivedKey> {
    params
        .check()
        .inspect_err(|e| error!(error = %e, "refusing key derivation parameters"))?;

    debug!(
        iterations = params.iterations,
        hash = params.hash.name(),
        key_len = params.key_len,
        "deriving key"
    );

    let mut key = SecureBytes::zeroed(params.key_len);
    match params.hash {
        KdfHash::Sha256 => {
            pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, key.as_bytes_mut())
        }
        KdfHash::Sha512 => {
            pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, params.iterations, key.as_bytes_mut())
        }
    }

    Ok(DerivedKey { key })
}
