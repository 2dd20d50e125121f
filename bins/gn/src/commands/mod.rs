//! Subcommand implementations

pub mod aes;
pub mod color;
pub mod defaults;
pub mod json;
pub mod md5;
pub mod query;
pub mod text;

use gn_color::Color;
use gn_core::config::Config;
use gn_crypto::Language;
use serde::Serialize;

/// Settings shared by every subcommand
pub struct Context {
    pub config: Config,
    pub json: bool,
    pub quiet: bool,
}

impl Context {
    pub fn new(config: Config, json: bool, quiet: bool) -> Self {
        Self { config, json, quiet }
    }

    /// Language for cipher error descriptions; unknown values fall back to English.
    pub fn language(&self) -> Language {
        let configured = &self.config.schema.crypto.language;
        configured.parse().unwrap_or_else(|e| {
            tracing::warn!(language = %configured, error = %e, "Unsupported language, using English");
            Language::default()
        })
    }

    /// Colour used when an argument cannot be parsed.
    pub fn fallback_color(&self) -> Color {
        Color::from_rgba_or(&self.config.schema.color.fallback, Color::CLEAR)
    }

    /// Print `value` as JSON in `--json` mode, otherwise print `text`.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: &str) -> anyhow::Result<()> {
        if self.json {
            gn_cli::print_json(value)?;
        } else {
            println!("{text}");
        }
        Ok(())
    }
}
