//! Terminal output helpers for GNFoundation tools
//!
//! Status lines, key/value fields and human-readable sizes, durations and
//! counts. Colour is decided per stream and can be switched off globally.

#![warn(missing_docs)]

pub mod output;

pub use output::{format_count, format_duration, format_size, print_json, set_color, Status};
