//! MD5 digests.

use md5::{Digest, Md5};

use crate::{CryptoError, Result};

/// Length of an MD5 digest in bytes.
pub const MD5_DIGEST_LEN: usize = 16;

/// Compute the raw MD5 digest of `data`.
pub fn md5_digest(data: &[u8]) -> [u8; MD5_DIGEST_LEN] {
    let mut hasher = Md5::new();
    hasher.update(data);
    let mut out = [0u8; MD5_DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Compute the MD5 digest of `data` as a lowercase hex string.
///
/// # Example
/// ```
/// assert_eq!(gn_crypto::md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(md5_digest(data.as_ref()))
}

/// Verify `data` against an expected hex digest.
///
/// The comparison is case-insensitive on the hex text and runs in constant
/// time over the decoded bytes.
pub fn verify_md5(data: &[u8], expected_hex: &str) -> Result<()> {
    let expected = hex::decode(expected_hex.trim()).map_err(|_| CryptoError::DigestMismatch)?;
    let actual = md5_digest(data);
    if crate::constant_time_compare(&actual, &expected) {
        Ok(())
    } else {
        Err(CryptoError::DigestMismatch)
    }
}
