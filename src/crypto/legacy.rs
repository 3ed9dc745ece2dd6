//! Version 1 decoder: AES-256-CBC with an HMAC-SHA512 tag
//!
//! Kept so payloads produced before the switch to AES-GCM stay recoverable.
//! New encryptions never use this format.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;

use crate::error::{SeedlockError, SeedlockResult};

use super::format::{HMAC_TAG_SIZE, IV_SIZE};
use super::key_derivation::{DerivedKey, SALT_SIZE};
use super::SecureBytes;

type HmacSha512 = Hmac<Sha512>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// HMAC-SHA512 over `version || salt || iv || ciphertext`
///
/// The version byte is the one stored in the blob, so the tag covers the
/// header exactly as it was written.
pub(crate) fn compute_tag(
    key: &DerivedKey,
    version: u8,
    salt: &[u8; SALT_SIZE],
    iv: &[u8; IV_SIZE],
    ciphertext: &[u8],
) -> SeedlockResult<[u8; HMAC_TAG_SIZE]> {
    let mut mac = HmacSha512::new_from_slice(key.as_bytes())
        .map_err(|e| SeedlockError::Encryption(format!("Failed to create HMAC: {}", e)))?;
    mac.update(&[version]);
    mac.update(salt);
    mac.update(iv);
    mac.update(ciphertext);

    let mut tag = [0u8; HMAC_TAG_SIZE];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Authenticate and decrypt a version 1 body
///
/// Returns the unpadded plaintext bytes. A tag mismatch is an
/// authentication failure; bad padding after a valid tag means corruption.
pub fn decrypt_legacy(
    key: &DerivedKey,
    version: u8,
    salt: &[u8; SALT_SIZE],
    iv: &[u8; IV_SIZE],
    ciphertext: &[u8],
    tag: &[u8; HMAC_TAG_SIZE],
) -> SeedlockResult<SecureBytes> {
    let expected = compute_tag(key, version, salt, iv, ciphertext)?;
    if !bool::from(expected.as_slice().ct_eq(tag.as_slice())) {
        return Err(SeedlockError::Authentication);
    }

    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| SeedlockError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let mut buffer = SecureBytes::new(ciphertext.to_vec());
    let plaintext_len = cipher
        .decrypt_padded_mut::<Pkcs7>(buffer.as_bytes_mut())
        .map_err(|_| SeedlockError::format("legacy payload has invalid padding"))?
        .len();

    Ok(SecureBytes::from(&buffer.as_bytes()[..plaintext_len]))
}


#[cfg(test)]
mod tests {
    use super::fixture::{encrypt_legacy, FIXTURE_IV, FIXTURE_SALT};
    use super::*;
    use crate::crypto::format::{EncryptedBlob, VERSION_LEGACY};
    use crate::crypto::key_derivation::{derive_key, KeyDerivationParams};

    const PASSWORD: &str = "Legacy-Pass-2021!";

    fn parts(blob: &EncryptedBlob) -> (&[u8; 32], &[u8; 16], &[u8], &[u8; 64]) {
        match blob {
            EncryptedBlob::V1Legacy {
                salt,
                iv,
                ciphertext,
                tag,
            } => (salt, iv, ciphertext.as_slice(), tag),
            _ => panic!("expected a legacy blob"),
        }
    }

    #[test]
    fn test_decrypt_legacy_body() {
        let blob = encrypt_legacy("abandon ability able", PASSWORD, FIXTURE_SALT, FIXTURE_IV);
        let (salt, iv, ciphertext, tag) = parts(&blob);
        let key = derive_key(PASSWORD, salt, &KeyDerivationParams::CURRENT).unwrap();

        let plaintext = decrypt_legacy(&key, VERSION_LEGACY, salt, iv, ciphertext, tag).unwrap();
        assert_eq!(plaintext.as_bytes(), b"abandon ability able");

        // flipped tag byte
        let mut bad_tag = *tag;
        bad_tag[63] ^= 0x01;
        let err =
            decrypt_legacy(&key, VERSION_LEGACY, salt, iv, ciphertext, &bad_tag).unwrap_err();
        assert!(err.is_authentication());

        // tag covers the stored version byte
        let err = decrypt_legacy(&key, 3, salt, iv, ciphertext, tag).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_bad_padding_after_valid_tag_is_format_error() {
        use cbc::cipher::{block_padding::NoPadding, BlockEncryptMut};

        let key = derive_key(PASSWORD, &FIXTURE_SALT, &KeyDerivationParams::CURRENT).unwrap();
        // A final plaintext byte of zero is never valid PKCS#7 padding.
        let ciphertext = cbc::Encryptor::<Aes256>::new_from_slices(key.as_bytes(), &FIXTURE_IV)
            .unwrap()
            .encrypt_padded_vec_mut::<NoPadding>(&[0u8; 16]);
        let tag =
            compute_tag(&key, VERSION_LEGACY, &FIXTURE_SALT, &FIXTURE_IV, &ciphertext).unwrap();

        let err = decrypt_legacy(
            &key,
            VERSION_LEGACY,
            &FIXTURE_SALT,
            &FIXTURE_IV,
            &ciphertext,
            &tag,
        )
        .unwrap_err();
        assert!(matches!(err, SeedlockError::Format(_)));
    }
}
