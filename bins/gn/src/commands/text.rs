//! text command

use super::Context;
use anyhow::Result;
use clap::Subcommand;
use gn_collections::VecExt;
use gn_text::StrExt;
use serde_json::json;

#[derive(Subcommand)]
pub enum TextAction {
    /// Lowercase dash-separated slug
    Slug { text: String },
    /// camelCase from space or newline separated words
    Camel { text: String },
    /// Strip diacritics
    Latinize { text: String },
    /// Split into words, one per line
    Words {
        text: String,
        /// Drop repeated words, keeping the first occurrence
        #[arg(short, long)]
        unique: bool,
    },
    /// Pad on the left to a character count
    PadStart {
        text: String,
        length: usize,
        /// Padding, repeated as needed
        #[arg(long, default_value = " ")]
        pad: String,
    },
    /// Pad on the right to a character count
    PadEnd {
        text: String,
        length: usize,
        /// Padding, repeated as needed
        #[arg(long, default_value = " ")]
        pad: String,
    },
    /// Characters from an index, optionally limited to a length
    Slice {
        text: String,
        from: usize,
        length: Option<usize>,
    },
}

pub fn run(ctx: &Context, action: TextAction) -> Result<()> {
    let result = match action {
        TextAction::Slug { text } => text.to_slug(),
        TextAction::Camel { text } => text.camel_cased(),
        TextAction::Latinize { text } => text.latinized(),
        TextAction::Words { text, unique } => {
            let mut words = text.words();
            if unique {
                words.remove_duplicates();
            }
            return ctx.emit(&words, &words.join("\n"));
        }
        TextAction::PadStart { text, length, pad } => text.padding_start(length, &pad),
        TextAction::PadEnd { text, length, pad } => text.padding_end(length, &pad),
        TextAction::Slice { text, from, length } => {
            let slice = match length {
                Some(length) => text.slicing(from, length),
                None => text.slice_at(from),
            };
            let Some(slice) = slice else {
                let count = text.length();
                return Err(gn_core::Error::validation(format!(
                    "Index {from} is out of range for {count} characters"
                ))
                .into());
            };
            slice.to_string()
        }
    };

    ctx.emit(&json!({ "result": result }), &result)
}
