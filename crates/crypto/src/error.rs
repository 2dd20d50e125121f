//! Error types for the crypto crate.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::CryptOperation;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Status reported by the block cipher when an operation does not succeed.
///
/// The numeric values follow the CommonCrypto status codes so that logs stay
/// comparable with the values produced by the iOS side of the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptStatus {
    /// Illegal parameter handed to the cipher
    ParamError,
    /// Input size was not a multiple of the block size
    AlignmentError,
    /// Decrypted data did not carry valid padding
    DecodeError,
}

impl CryptStatus {
    /// Numeric status code.
    pub fn code(&self) -> i32 {
        match self {
            CryptStatus::ParamError => -4300,
            CryptStatus::AlignmentError => -4303,
            CryptStatus::DecodeError => -4304,
        }
    }
}

impl fmt::Display for CryptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Language used for human-readable failure descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Simplified Chinese
    SimplifiedChinese,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "zh" | "zh-hans" | "zh-cn" | "chinese" => Ok(Language::SimplifiedChinese),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Errors that can occur during crypto operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key is not exactly [`KEY_SIZE_AES128`](crate::KEY_SIZE_AES128) bytes
    #[error("[Cipher initialisation failed]\nReason: invalid key length ({actual} bytes)")]
    BadKeyLength {
        /// Length that was supplied
        actual: usize,
    },

    /// IV is not exactly one block long
    #[error("[Cipher initialisation failed]\nReason: invalid initialization vector length ({actual} bytes)")]
    BadInputVectorLength {
        /// Length that was supplied
        actual: usize,
    },

    /// The cipher rejected the input
    #[error("[{operation} failed]\nStatus code: {status}")]
    CryptoFailed {
        /// Status returned by the cipher
        status: CryptStatus,
        /// Operation that failed
        operation: CryptOperation,
    },

    /// Ciphertext handed in as text was not valid base64
    #[error("Ciphertext is not valid base64")]
    BadBase64Data,

    /// Digest did not match the expected value
    #[error("Digest mismatch")]
    DigestMismatch,
}

/// Error code for integration with gn-core error handling.
/// Range: 11xxx for crypto errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoErrorCode {
    /// Invalid key length
    BadKeyLength = 11001,
    /// Invalid IV length
    BadInputVectorLength = 11002,
    /// Cipher failure
    CryptoFailed = 11003,
    /// Invalid base64 input
    BadBase64Data = 11004,
    /// Digest mismatch
    DigestMismatch = 11005,
}

impl CryptoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CryptoErrorCode {
        match self {
            CryptoError::BadKeyLength { .. } => CryptoErrorCode::BadKeyLength,
            CryptoError::BadInputVectorLength { .. } => CryptoErrorCode::BadInputVectorLength,
            CryptoError::CryptoFailed { .. } => CryptoErrorCode::CryptoFailed,
            CryptoError::BadBase64Data => CryptoErrorCode::BadBase64Data,
            CryptoError::DigestMismatch => CryptoErrorCode::DigestMismatch,
        }
    }

    /// Human-readable description in the requested language.
    pub fn localized_description(&self, language: Language) -> String {
        match language {
            Language::English => self.to_string(),
            Language::SimplifiedChinese => match self {
                CryptoError::BadKeyLength { .. } => {
                    "[初始化加密器失败]\n原因：密钥长度非法".to_string()
                }
                CryptoError::BadInputVectorLength { .. } => {
                    "[初始化加密器失败]\n原因：向量长度非法".to_string()
                }
                CryptoError::CryptoFailed { status, operation } => match operation {
                    CryptOperation::Decrypt => format!("[解密失败]\n状态码：{}", status),
                    CryptOperation::Encrypt => format!("[加密失败]\n状态码：{}", status),
                },
                CryptoError::BadBase64Data => "[解密失败]\n原因：密文不是合法的 Base64".to_string(),
                CryptoError::DigestMismatch => "[校验失败]\n原因：摘要不匹配".to_string(),
            },
        }
    }
}
