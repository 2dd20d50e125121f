//! Grapheme-aware string helpers for the GNFoundation toolkit
//!
//! - [`StrExt`]: queries, conversions, transforms and safe slicing on `str`
//! - [`path`]: path manipulation on `/`-separated strings
//! - [`percent`]: RFC 3986 query escaping and query-string building
//!
//! # Example
//!
//! ```rust
//! use gn_text::StrExt;
//!
//! assert_eq!("Hello World".slicing(6, 5), Some("World"));
//! assert_eq!("Crème Brûlée".to_slug(), "creme-brulee");
//! assert_eq!("hue".padding_start(6, "ab"), "abahue");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod path;
pub mod percent;
pub mod string;

pub use error::{Result, TextError, TextErrorCode};
pub use string::{random_string, StrExt};
