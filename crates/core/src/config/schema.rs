//! Configuration schema definitions
//!
//! Every section and field is defaulted, so an empty file (or no file at all)
//! yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Defaults store settings
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Colour parsing settings
    #[serde(default)]
    pub color: ColorConfig,

    /// Cipher error reporting settings
    #[serde(default)]
    pub crypto: CryptoConfig,
}

/// Defaults store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Store name; one JSON file per suite
    #[serde(default = "default_suite")]
    pub suite: String,

    /// Directory holding the suite files
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            suite: default_suite(),
            directory: None,
        }
    }
}

impl DefaultsConfig {
    /// Configured directory, or `<data dir>/gn-foundation`.
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("gn-foundation")
        })
    }
}

fn default_suite() -> String {
    "standard".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Print the module target with each line
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_target: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Colour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Colour used when a hex string cannot be parsed
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
        }
    }
}

fn default_fallback() -> String {
    "#00000000".to_string()
}

/// Cipher error reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// Language for failure descriptions (`en` or `zh-Hans`)
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}
