//! defaults command

use super::Context;
use anyhow::Result;
use clap::Subcommand;
use gn_cli::{format_count, Status};
use gn_core::defaults::Defaults;
use serde_json::{json, Value};

#[derive(Subcommand)]
pub enum DefaultsAction {
    /// Print the value stored under a key
    Get { key: String },
    /// Store a value; valid JSON is stored as JSON, anything else as a string
    Set { key: String, value: String },
    /// Delete a key
    Remove { key: String },
    /// Print every key and value
    List,
    /// Delete every key in the suite
    Clear,
}

pub fn run(ctx: &Context, suite: Option<String>, action: DefaultsAction) -> Result<()> {
    let mut config = ctx.config.schema.defaults.clone();
    if let Some(suite) = suite {
        config.suite = suite;
    }
    let store = Defaults::from_config(&config)?;

    match action {
        DefaultsAction::Get { key } => {
            let Some(value) = store.get(&key) else {
                return Err(gn_core::Error::defaults(format!("No value stored for '{key}'"))
                    .with_suggestion("Run `gn defaults list` to see stored keys")
                    .into());
            };
            ctx.emit(&json!({ "key": key, "value": value }), &display(&value))
        }
        DefaultsAction::Set { key, value } => {
            let parsed = serde_json::from_str::<Value>(&value).unwrap_or(Value::String(value));
            store.set(&key, parsed)?;
            if !ctx.quiet && !ctx.json {
                Status::success(&format!("Stored '{key}'"));
            }
            Ok(())
        }
        DefaultsAction::Remove { key } => {
            let removed = store.remove(&key)?;
            if ctx.json {
                gn_cli::print_json(&json!({ "key": key, "removed": removed }))?;
            } else if !ctx.quiet {
                if removed {
                    Status::success(&format!("Removed '{key}'"));
                } else {
                    Status::info(&format!("'{key}' was not set"));
                }
            }
            Ok(())
        }
        DefaultsAction::List => {
            let entries = store.entries();
            if ctx.json {
                gn_cli::print_json(&entries)?;
                return Ok(());
            }
            if !ctx.quiet {
                let location = store
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "memory".to_string());
                Status::header(&format!("{} ({location})", config.suite));
            }
            for key in store.keys() {
                if let Some(value) = entries.get(&key) {
                    println!("{key} = {}", display(value));
                }
            }
            if !ctx.quiet {
                Status::info(&format_count(entries.len(), "key", "keys"));
            }
            Ok(())
        }
        DefaultsAction::Clear => {
            let count = store.keys().len();
            store.clear()?;
            if !ctx.quiet && !ctx.json {
                Status::success(&format!("Cleared {}", format_count(count, "key", "keys")));
            }
            Ok(())
        }
    }
}

/// Strings print bare; everything else as compact JSON.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
