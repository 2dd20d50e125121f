//! Slice and vector conveniences for the GNFoundation toolkit
//!
//! - [`SliceExt`]: safe indexing, predicate queries, chunking, partitioning
//!   and optional-key sorting on any slice
//! - [`VecExt`]: in-place edits such as de-duplication and safe swaps
//! - [`sum`] and [`FloatSliceExt::average`]
//!
//! # Example
//!
//! ```rust
//! use gn_collections::{SliceExt, VecExt};
//!
//! let chunks = [1, 2, 3, 4, 5].group_by_size(2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let mut tags = vec!["a", "b", "a", "c"];
//! tags.remove_duplicates();
//! assert_eq!(tags, ["a", "b", "c"]);
//! ```

#![warn(missing_docs)]

pub mod numeric;
pub mod slice;
pub mod vec;

pub use numeric::{sum, FloatSliceExt};
pub use slice::SliceExt;
pub use vec::VecExt;
