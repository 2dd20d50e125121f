//! AES-128-CBC wrapper.
//!
//! The wrapper does no block-cipher work itself: it checks the key and IV
//! lengths up front and hands the buffer to the RustCrypto `aes` / `cbc`
//! implementations, turning their failures into [`CryptoError::CryptoFailed`].

use std::fmt;

use aes::Aes128 as AesBlock;
use base64::Engine;
use cbc::cipher::block_padding::{NoPadding, Pkcs7};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::{CryptStatus, CryptoError, Result};

type Aes128CbcEnc = cbc::Encryptor<AesBlock>;
type Aes128CbcDec = cbc::Decryptor<AesBlock>;

/// Required AES-128 key length in bytes.
pub const KEY_SIZE_AES128: usize = 16;

/// AES block length in bytes (and therefore the IV length).
pub const BLOCK_SIZE_AES128: usize = 16;

/// Direction of a cipher call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptOperation {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl fmt::Display for CryptOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptOperation::Encrypt => write!(f, "Encryption"),
            CryptOperation::Decrypt => write!(f, "Decryption"),
        }
    }
}

/// Block padding applied to the final block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// PKCS#7 (interoperable with `AES/CBC/PKCS5Padding` on Android)
    #[default]
    Pkcs7,
    /// No padding; input must already be block aligned
    None,
}

/// AES-128 in CBC mode with a fixed key and IV.
#[derive(Clone)]
pub struct Aes128 {
    key: [u8; KEY_SIZE_AES128],
    iv: [u8; BLOCK_SIZE_AES128],
    padding: Padding,
}

impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes128")
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .field("padding", &self.padding)
            .finish()
    }
}

impl Aes128 {
    /// Create a cipher from a 16-byte key and a 16-byte IV.
    ///
    /// The key is checked first, then the IV; no cipher state is built when
    /// either check fails.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE_AES128] = key
            .try_into()
            .map_err(|_| CryptoError::BadKeyLength { actual: key.len() })?;
        let iv: [u8; BLOCK_SIZE_AES128] = iv
            .try_into()
            .map_err(|_| CryptoError::BadInputVectorLength { actual: iv.len() })?;

        Ok(Self {
            key,
            iv,
            padding: Padding::default(),
        })
    }

    /// Use a different padding mode.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Padding mode in use.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Encrypt `plaintext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.crypt(plaintext, CryptOperation::Encrypt)
    }

    /// Decrypt `ciphertext`.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.crypt(ciphertext, CryptOperation::Decrypt)
    }

    /// Encrypt `plaintext` and return the ciphertext as standard base64.
    pub fn encrypt_to_base64(&self, plaintext: &[u8]) -> Result<String> {
        let sealed = self.encrypt(plaintext)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(sealed))
    }

    /// Decode standard base64 `encoded` and decrypt it.
    pub fn decrypt_base64(&self, encoded: &str) -> Result<Vec<u8>> {
        let sealed = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|_| CryptoError::BadBase64Data)?;
        self.decrypt(&sealed)
    }

    fn crypt(&self, input: &[u8], operation: CryptOperation) -> Result<Vec<u8>> {
        let failed = |status: CryptStatus| {
            tracing::debug!(%operation, status = status.code(), len = input.len(), "AES operation failed");
            CryptoError::CryptoFailed { status, operation }
        };

        let aligned = input.len() % BLOCK_SIZE_AES128 == 0;

        match operation {
            CryptOperation::Encrypt => {
                let cipher = Aes128CbcEnc::new_from_slices(&self.key, &self.iv)
                    .map_err(|_| failed(CryptStatus::ParamError))?;
                match self.padding {
                    Padding::Pkcs7 => Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(input)),
                    Padding::None if aligned => {
                        Ok(cipher.encrypt_padded_vec_mut::<NoPadding>(input))
                    }
                    Padding::None => Err(failed(CryptStatus::AlignmentError)),
                }
            }
            CryptOperation::Decrypt => {
                if !aligned {
                    return Err(failed(CryptStatus::AlignmentError));
                }
                let cipher = Aes128CbcDec::new_from_slices(&self.key, &self.iv)
                    .map_err(|_| failed(CryptStatus::ParamError))?;
                match self.padding {
                    Padding::Pkcs7 => cipher
                        .decrypt_padded_vec_mut::<Pkcs7>(input)
                        .map_err(|_| failed(CryptStatus::DecodeError)),
                    Padding::None => cipher
                        .decrypt_padded_vec_mut::<NoPadding>(input)
                        .map_err(|_| failed(CryptStatus::AlignmentError)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KEY: &[u8; 16] = b"0123456789abcdef";
    const IV: &[u8; 16] = b"fedcba9876543210";

    #[test]
    fn test_rejects_short_key() {
        let err = Aes128::new(b"short", IV).unwrap_err();
        assert!(matches!(err, CryptoError::BadKeyLength { actual: 5 }));
    }

    #[test]
    fn test_rejects_long_key() {
        let err = Aes128::new(&[0u8; 32], IV).unwrap_err();
        assert!(matches!(err, CryptoError::BadKeyLength { actual: 32 }));
    }

    #[test]
    fn test_rejects_bad_iv() {
        let err = Aes128::new(KEY, &[0u8; 8]).unwrap_err();
        assert!(matches!(err, CryptoError::BadInputVectorLength { actual: 8 }));

        let err = Aes128::new(KEY, &[0u8; 17]).unwrap_err();
        assert!(matches!(err, CryptoError::BadInputVectorLength { actual: 17 }));
    }

    #[test]
    fn test_key_checked_before_iv() {
        let err = Aes128::new(b"bad", b"bad").unwrap_err();
        assert!(matches!(err, CryptoError::BadKeyLength { .. }));
    }

    // NIST SP 800-38A F.2.1, first block, no padding
    #[test]
    fn test_nist_cbc_vector() {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plain = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let aes = Aes128::new(&key, &iv).unwrap().with_padding(Padding::None);
        let sealed = aes.encrypt(&plain).unwrap();
        assert_eq!(hex::encode(&sealed), "7649abac8119b246cee98e9b12e9197d");
        assert_eq!(aes.decrypt(&sealed).unwrap(), plain);
    }

    #[test]
    fn test_pkcs7_adds_full_block_when_aligned() {
        let aes = Aes128::new(KEY, IV).unwrap();
        assert_eq!(aes.encrypt(&[]).unwrap().len(), 16);
        assert_eq!(aes.encrypt(&[7u8; 16]).unwrap().len(), 32);
        assert_eq!(aes.encrypt(&[7u8; 17]).unwrap().len(), 32);
    }

    #[test]
    fn test_no_padding_rejects_unaligned_encrypt() {
        let aes = Aes128::new(KEY, IV).unwrap().with_padding(Padding::None);
        let err = aes.encrypt(b"not sixteen").unwrap_err();
        assert!(matches!(
            err,
            CryptoError::CryptoFailed {
                status: CryptStatus::AlignmentError,
                operation: CryptOperation::Encrypt,
            }
        ));
    }

    #[test]
    fn test_decrypt_unaligned_input_fails() {
        let aes = Aes128::new(KEY, IV).unwrap();
        let err = aes.decrypt(&[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::CryptoFailed {
                status: CryptStatus::AlignmentError,
                operation: CryptOperation::Decrypt,
            }
        ));
    }

    #[test]
    fn test_decrypt_with_wrong_key_fails_or_differs() {
        let sealed = Aes128::new(KEY, IV).unwrap().encrypt(b"secret message").unwrap();
        let other = Aes128::new(b"ffffffffffffffff", IV).unwrap();
        match other.decrypt(&sealed) {
            Ok(plain) => assert_ne!(plain, b"secret message"),
            Err(err) => assert!(matches!(
                err,
                CryptoError::CryptoFailed {
                    status: CryptStatus::DecodeError,
                    operation: CryptOperation::Decrypt,
                }
            )),
        }
    }

    #[test]
    fn test_base64_round_trip() {
        let aes = Aes128::new(KEY, IV).unwrap();
        let encoded = aes.encrypt_to_base64("你好, world".as_bytes()).unwrap();
        assert_eq!(aes.decrypt_base64(&encoded).unwrap(), "你好, world".as_bytes());
    }

    #[test]
    fn test_bad_base64() {
        let aes = Aes128::new(KEY, IV).unwrap();
        assert!(matches!(aes.decrypt_base64("***"), Err(CryptoError::BadBase64Data)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let aes = Aes128::new(KEY, IV).unwrap();
        let rendered = format!("{:?}", aes);
        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("redacted"));
    }

    proptest! {
        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256),
                           key in proptest::array::uniform16(any::<u8>()),
                           iv in proptest::array::uniform16(any::<u8>())) {
            let aes = Aes128::new(&key, &iv).unwrap();
            let sealed = aes.encrypt(&data).unwrap();
            prop_assert_eq!(sealed.len() % BLOCK_SIZE_AES128, 0);
            prop_assert_eq!(aes.decrypt(&sealed).unwrap(), data);
        }

        #[test]
        fn prop_wrong_key_length_rejected(len in 0usize..64) {
            prop_assume!(len != KEY_SIZE_AES128);
            let key = vec![0u8; len];
            let rejected = matches!(Aes128::new(&key, IV), Err(CryptoError::BadKeyLength { .. }));
            prop_assert!(rejected);
        }
    }
}
