//! Cryptographic utilities for GNFoundation.
//!
//! This crate provides:
//! - MD5 digests with hex output and constant-time verification
//! - An AES-128-CBC wrapper that validates key and IV lengths before
//!   touching the cipher
//! - Bilingual (English / Simplified Chinese) error descriptions
//!
//! # Example
//!
//! ```
//! use gn_crypto::{md5_hex, Aes128};
//!
//! assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let aes = Aes128::new(b"0123456789abcdef", b"fedcba9876543210").unwrap();
//! let sealed = aes.encrypt(b"hello").unwrap();
//! assert_eq!(aes.decrypt(&sealed).unwrap(), b"hello");
//! ```

#![warn(missing_docs)]

mod aes128;
mod digest;
mod error;
mod timing;

pub use aes128::{Aes128, CryptOperation, Padding, BLOCK_SIZE_AES128, KEY_SIZE_AES128};
pub use digest::{md5_digest, md5_hex, verify_md5, MD5_DIGEST_LEN};
pub use error::{CryptStatus, CryptoError, CryptoErrorCode, Language, Result};
pub use timing::constant_time_compare;
