//! Versioned binary container for encrypted seed phrases
//!
//! Layout, Base64-encoded at rest:
//!
//! ```text
//! offset  size      field
//!  0       1        version   (1 = AES-CBC + HMAC-SHA512, 2 = AES-GCM)
//!  1      32        salt      (PBKDF2 salt)
//! 33      12 | 16   nonce/iv  (GCM nonce for v2, CBC IV for v1)
//!  v2:    16        tag, then ciphertext (remainder)
//!  v1:    remainder ciphertext, then 64-byte HMAC tag
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SeedlockError, SeedlockResult};

use super::key_derivation::SALT_SIZE;

/// Version tag of the legacy CBC + HMAC format
pub const VERSION_LEGACY: u8 = 1;
/// Version tag of the AES-GCM format
pub const VERSION_GCM: u8 = 2;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;
/// Size of the AES-GCM authentication tag
pub const GCM_TAG_SIZE: usize = 16;
/// Size of the AES-CBC IV (one AES block)
pub const IV_SIZE: usize = 16;
/// Size of the HMAC-SHA512 tag
pub const HMAC_TAG_SIZE: usize = 64;
/// AES block size, which CBC ciphertext lengths are a multiple of
pub const BLOCK_SIZE: usize = 16;

/// Smallest blob any version can produce: version + salt + nonce + tag
pub const MIN_BLOB_SIZE: usize = 1 + SALT_SIZE + NONCE_SIZE + GCM_TAG_SIZE;

/// An encrypted seed phrase, one variant per format version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptedBlob {
    /// AES-256-CBC with a separate HMAC-SHA512 tag; decode only
    V1Legacy {
        salt: [u8; SALT_SIZE],
        iv: [u8; IV_SIZE],
        ciphertext: Vec<u8>,
        tag: [u8; HMAC_TAG_SIZE],
    },
    /// AES-256-GCM with an integrated tag
    V2Gcm {
        salt: [u8; SALT_SIZE],
        nonce: [u8; NONCE_SIZE],
        tag: [u8; GCM_TAG_SIZE],
        ciphertext: Vec<u8>,
    },
}

impl EncryptedBlob {
    /// The version byte this blob serializes with
    pub fn version(&self) -> u8 {
        match self {
            EncryptedBlob::V1Legacy { .. } => VERSION_LEGACY,
            EncryptedBlob::V2Gcm { .. } => VERSION_GCM,
        }
    }

    /// The PBKDF2 salt embedded in the blob
    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        match self {
            EncryptedBlob::V1Legacy { salt, .. } | EncryptedBlob::V2Gcm { salt, .. } => salt,
        }
    }

    /// Serialize to the raw container bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            EncryptedBlob::V1Legacy {
                salt,
                iv,
                ciphertext,
                tag,
            } => {
                let mut out =
                    Vec::with_capacity(1 + SALT_SIZE + IV_SIZE + ciphertext.len() + HMAC_TAG_SIZE);
                out.push(VERSION_LEGACY);
                out.extend_from_slice(salt);
                out.extend_from_slice(iv);
                out.extend_from_slice(ciphertext);
                out.extend_from_slice(tag);
                out
            }
            EncryptedBlob::V2Gcm {
                salt,
                nonce,
                tag,
                ciphertext,
            } => {
                let mut out = Vec::with_capacity(MIN_BLOB_SIZE + ciphertext.len());
                out.push(VERSION_GCM);
                out.extend_from_slice(salt);
                out.extend_from_slice(nonce);
                out.extend_from_slice(tag);
                out.extend_from_slice(ciphertext);
                out
            }
        }
    }

    /// Parse raw container bytes
    pub fn from_bytes(bytes: &[u8]) -> SeedlockResult<Self> {
        if bytes.len() < MIN_BLOB_SIZE {
            return Err(SeedlockError::format(format!(
                "blob is {} bytes, expected at least {}",
                bytes.len(),
                MIN_BLOB_SIZE
            )));
        }

        let (version, rest) = (bytes[0], &bytes[1..]);
        match version {
            VERSION_GCM => {
                let (salt, rest) = take::<SALT_SIZE>(rest)?;
                let (nonce, rest) = take::<NONCE_SIZE>(rest)?;
                let (tag, ciphertext) = take::<GCM_TAG_SIZE>(rest)?;
                Ok(EncryptedBlob::V2Gcm {
                    salt,
                    nonce,
                    tag,
                    ciphertext: ciphertext.to_vec(),
                })
            }
            VERSION_LEGACY => {
                let (salt, rest) = take::<SALT_SIZE>(rest)?;
                let (iv, rest) = take::<IV_SIZE>(rest)?;
                if rest.len() < HMAC_TAG_SIZE {
                    return Err(SeedlockError::format("legacy blob is truncated"));
                }
                let (ciphertext, tag) = rest.split_at(rest.len() - HMAC_TAG_SIZE);
                if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
                    return Err(SeedlockError::format(
                        "legacy ciphertext is not a whole number of blocks",
                    ));
                }
                let (tag, _) = take::<HMAC_TAG_SIZE>(tag)?;
                Ok(EncryptedBlob::V1Legacy {
                    salt,
                    iv,
                    ciphertext: ciphertext.to_vec(),
                    tag,
                })
            }
            other => Err(SeedlockError::UnsupportedVersion(other)),
        }
    }

    /// Serialize and Base64-encode for textual transport
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Base64-decode and parse, ignoring surrounding whitespace
    pub fn decode(text: &str) -> SeedlockResult<Self> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|_| SeedlockError::format("payload is not valid Base64"))?;
        Self::from_bytes(&bytes)
    }
}

fn take<const N: usize>(bytes: &[u8]) -> SeedlockResult<([u8; N], &[u8])> {
    if bytes.len() < N {
        return Err(SeedlockError::format("blob is truncated"));
    }
    let (head, tail) = bytes.split_at(N);
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Ok((out, tail))
}
