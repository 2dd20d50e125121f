//! RGBA colours for GNFoundation
//!
//! [`Color`] stores four components in `0.0..=1.0` and converts to and
//! from the usual hexadecimal notations.
//!
//! ```rust
//! use gn_color::Color;
//!
//! let teal: Color = "#008080".parse().unwrap();
//! assert_eq!(teal.rgb_components(), (0, 128, 128));
//! assert_eq!(Color::from_hex_str("0f0", 1.0), Some(Color::GREEN));
//! assert_eq!(Color::WHITE.short_hex_string().as_deref(), Some("#FFF"));
//! ```

#![warn(missing_docs)]

mod color;
mod error;
mod parse;

pub use color::Color;
pub use error::{ColorError, ColorErrorCode};

/// Result type alias for colour parsing.
pub type Result<T> = std::result::Result<T, ColorError>;
