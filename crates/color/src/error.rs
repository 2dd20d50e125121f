//! Error types for colour parsing.

use thiserror::Error;

/// Errors raised by [`Color::parse_rgba`](crate::Color::parse_rgba).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input did not start with `#`
    #[error("Invalid RGB string, missing '#' as prefix")]
    MissingHashMarkAsPrefix,

    /// Characters after `#` were empty or not hexadecimal
    #[error("Scan hex error")]
    UnableToScanHexValue,

    /// Hex digit count was not 3, 4, 6 or 8
    #[error("Invalid RGB string, number of characters after '#' should be either 3, 4, 6 or 8")]
    MismatchedHexStringLength,
}

/// Error code for integration with gn-core error handling.
/// Range: 13xxx for colour errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorErrorCode {
    /// Missing `#`
    MissingHashMarkAsPrefix = 13001,
    /// Not hexadecimal
    UnableToScanHexValue = 13002,
    /// Wrong digit count
    MismatchedHexStringLength = 13003,
}

impl ColorError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ColorErrorCode {
        match self {
            ColorError::MissingHashMarkAsPrefix => ColorErrorCode::MissingHashMarkAsPrefix,
            ColorError::UnableToScanHexValue => ColorErrorCode::UnableToScanHexValue,
            ColorError::MismatchedHexStringLength => ColorErrorCode::MismatchedHexStringLength,
        }
    }
}
