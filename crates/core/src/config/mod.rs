//! Configuration loading and schema definitions
//!
//! Settings live in `gn-foundation.toml`; see [`Config::load`] for the lookup
//! order.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_FILE_NAME};
pub use schema::*;
