//! Hexadecimal string forms

use std::fmt;
use std::str::FromStr;

use crate::{Color, ColorError, Result};

fn is_hex(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

impl Color {
    /// Parse `RRGGBB` with an optional `#` or `0x` prefix, or the 3-digit
    /// short form.
    ///
    /// Extra leading digits are ignored, so an `RRGGBBAA` string keeps only
    /// its last six digits. Returns `None` for anything that is not hex.
    ///
    /// ```
    /// use gn_color::Color;
    ///
    /// assert_eq!(Color::from_hex_str("#EDE7F6", 1.0).unwrap().to_u32(), 0xEDE7F6);
    /// assert_eq!(Color::from_hex_str("0xF0F", 1.0).unwrap().to_u32(), 0xFF00FF);
    /// assert!(Color::from_hex_str("#xyz", 1.0).is_none());
    /// ```
    pub fn from_hex_str(s: &str, transparency: f64) -> Option<Self> {
        let digits = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &s[2..],
            _ => s.strip_prefix('#').unwrap_or(s),
        };

        if !is_hex(digits) || digits.len() > 8 {
            return None;
        }

        let value = if digits.len() == 3 {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok()?
        } else {
            u32::from_str_radix(digits, 16).ok()?
        };

        Some(Self::from_hex(value, transparency))
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Fails when the `#` is missing, when the remainder is empty or not
    /// hexadecimal, or when it has a length other than 3, 4, 6 or 8.
    pub fn parse_rgba(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').ok_or(ColorError::MissingHashMarkAsPrefix)?;

        if !is_hex(digits) {
            return Err(ColorError::UnableToScanHexValue);
        }

        match digits.len() {
            3 => Ok(Self::from_hex3(parse_u16(digits)?, 1.0)),
            4 => Ok(Self::from_hex4(parse_u16(digits)?)),
            6 => Ok(Self::from_hex6(parse_u32(digits)?, 1.0)),
            8 => Ok(Self::from_hex8(parse_u32(digits)?)),
            _ => Err(ColorError::MismatchedHexStringLength),
        }
    }

    /// [`parse_rgba`](Self::parse_rgba), returning `default` on any error.
    pub fn from_rgba_or(s: &str, default: Color) -> Self {
        match Self::parse_rgba(s) {
            Ok(color) => color,
            Err(e) => {
                tracing::debug!(input = s, error = %e, "Falling back to default colour");
                default
            }
        }
    }
}

fn parse_u16(digits: &str) -> Result<u16> {
    u16::from_str_radix(digits, 16).map_err(|_| ColorError::UnableToScanHexValue)
}

fn parse_u32(digits: &str) -> Result<u32> {
    u32::from_str_radix(digits, 16).map_err(|_| ColorError::UnableToScanHexValue)
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_rgba(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string_with_alpha(true))
    }
}
