//! Numeric and date helpers for the GNFoundation toolkit
//!
//! ```rust
//! use gn_numeric::{IntExt, SignedExt};
//!
//! assert_eq!(12_500i64.k_formatted(), "12k");
//! assert_eq!(3_900i64.time_string(), "1h 5m");
//! assert_eq!(907i32.digits(), vec![9, 0, 7]);
//! ```

#![warn(missing_docs)]

pub mod boolean;
pub mod date;
pub mod float;
pub mod int;

pub use boolean::{random_bool, BoolExt};
pub use date::DateExt;
pub use float::FloatExt;
pub use int::{IntExt, SignedExt};
