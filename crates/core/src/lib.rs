//! Core utilities for the GNFoundation toolkit
//!
//! This crate provides the shared plumbing used by the other `gn-*` crates
//! and the `gn` binary:
//!
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Configuration**: `gn-foundation.toml` loading with defaulted sections
//! - **File manager**: JSON file reading and directory helpers
//! - **Defaults**: a persistent key/value store for primitives and codable values
//!
//! # Example
//!
//! ```rust,no_run
//! use gn_core::{config::Config, defaults::Defaults, fs};
//!
//! let config = Config::load(None)?;
//! let defaults = Defaults::from_config(&config.schema.defaults)?;
//! defaults.set("last_opened", "settings.json")?;
//!
//! if let Some(settings) = fs::json_from_file("settings.json")? {
//!     println!("{} keys", settings.len());
//! }
//! # Ok::<(), gn_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod fs;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::defaults::Defaults;
    pub use crate::error::{exit_codes, Error, ErrorCategory, ErrorCode, Result, ResultExt};
    pub use crate::fs::JsonObject;
}
