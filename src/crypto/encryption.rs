//! AES-256-GCM encryption/decryption of seed phrases
//!
//! `encrypt` always writes the current (version 2) format. `decrypt` reads
//! every known version, dispatching on the blob's version tag. Each call
//! generates a fresh salt and nonce and derives a key that is dropped, and
//! therefore zeroized, before the call returns.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{AeadInPlace, KeyInit, OsRng},
    Aes256Gcm, Nonce, Tag,
};
use tracing::{debug, error, warn};
use zeroize::Zeroize;

use crate::error::{SeedlockError, SeedlockResult};
use crate::validation::validate_password;

use super::format::{EncryptedBlob, GCM_TAG_SIZE, NONCE_SIZE};
use super::key_derivation::{derive_key, DerivedKey, KeyDerivationParams, SALT_SIZE};
use super::legacy::decrypt_legacy;
use super::SecureBytes;

/// Largest plaintext accepted, in UTF-8 bytes
pub const MAX_PLAINTEXT_BYTES: usize = 1024;

/// Encrypt a seed phrase (or any short text) under a password
///
/// Returns the Base64 payload of a version 2 blob.
pub fn encrypt(plaintext: &str, password: &str) -> SeedlockResult<String> {
    validate_password(password)?;

    if plaintext.is_empty() {
        return Err(SeedlockError::Validation(
            "Text to encrypt must not be empty".to_string(),
        ));
    }
    if plaintext.len() > MAX_PLAINTEXT_BYTES {
        return Err(SeedlockError::Validation(format!(
            "Text to encrypt is too long ({} bytes, maximum {})",
            plaintext.len(),
            MAX_PLAINTEXT_BYTES
        )));
    }

    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let key = derive_key(password, &salt, &KeyDerivationParams::CURRENT)?;
    let blob = seal(&key, salt, nonce, plaintext.as_bytes()).inspect_err(log_failure)?;

    Ok(blob.encode())
}

/// Decrypt a Base64 payload produced by any supported format version
pub fn decrypt(payload: &str, password: &str) -> SeedlockResult<String> {
    validate_password(password)?;

    let blob = EncryptedBlob::decode(payload)?;
    debug!(version = blob.version(), "decoding blob");

    let key = derive_key(password, blob.salt(), &KeyDerivationParams::CURRENT)?;
    let plaintext = open(&key, &blob).inspect_err(|e| {
        if e.is_authentication() {
            warn!(version = blob.version(), "blob failed authentication");
        } else {
            log_failure(e);
        }
    })?;

    into_string(plaintext)
}

/// Encrypt raw bytes into a version 2 blob with the given key, salt and nonce
pub(crate) fn seal(
    key: &DerivedKey,
    salt: [u8; SALT_SIZE],
    nonce: [u8; NONCE_SIZE],
    plaintext: &[u8],
) -> SeedlockResult<EncryptedBlob> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SeedlockError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let mut buffer = SecureBytes::from(plaintext);
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", buffer.as_bytes_mut())
        .map_err(|e| SeedlockError::Encryption(format!("Encryption failed: {}", e)))?;

    let mut tag_bytes = [0u8; GCM_TAG_SIZE];
    tag_bytes.copy_from_slice(tag.as_slice());

    Ok(EncryptedBlob::V2Gcm {
        salt,
        nonce,
        tag: tag_bytes,
        ciphertext: buffer.as_bytes().to_vec(),
    })
}

/// Authenticate and decrypt a parsed blob with an already derived key
pub fn open(key: &DerivedKey, blob: &EncryptedBlob) -> SeedlockResult<SecureBytes> {
    match blob {
        EncryptedBlob::V2Gcm {
            nonce,
            tag,
            ciphertext,
            ..
        } => {
            let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
                .map_err(|e| SeedlockError::Encryption(format!("Failed to create cipher: {}", e)))?;

            let mut buffer = SecureBytes::new(ciphertext.clone());
            cipher
                .decrypt_in_place_detached(
                    Nonce::from_slice(nonce),
                    b"",
                    buffer.as_bytes_mut(),
                    Tag::from_slice(tag),
                )
                .map_err(|_| SeedlockError::Authentication)?;
            Ok(buffer)
        }
        EncryptedBlob::V1Legacy {
            salt,
            iv,
            ciphertext,
            tag,
        } => decrypt_legacy(key, blob.version(), salt, iv, ciphertext, tag),
    }
}

/// Cipher errors carry only the cipher's own message, never buffer contents
fn log_failure(e: &SeedlockError) {
    if let SeedlockError::Encryption(_) = e {
        error!(error = %e, "cipher operation failed");
    }
}

fn into_string(plaintext: SecureBytes) -> SeedlockResult<String> {
    String::from_utf8(plaintext.as_bytes().to_vec()).map_err(|e| {
        e.into_bytes().zeroize();
        SeedlockError::format("decrypted payload is not valid UTF-8")
    })
}
