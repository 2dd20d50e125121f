//! File-manager helpers
//!
//! JSON readers return `Result<Option<_>>`: an `Err` for unreadable or
//! malformed files, `Ok(None)` when the document parses but is not an object.
//! The directory helpers report plain `bool` success and log the reason for
//! any failure.

use crate::error::{Error, Result, ResultExt};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loosely typed JSON object.
pub type JsonObject = serde_json::Map<String, Value>;

/// Read a UTF-8 JSON file and return its top-level object.
pub fn json_from_file(path: impl AsRef<Path>) -> Result<Option<JsonObject>> {
    let path = path.as_ref();
    let context = format!("Reading JSON from {}", path.display());

    let data = std::fs::read(path).map_err(Error::from).context(context.clone())?;
    let value: Value = serde_json::from_slice(&data)
        .map_err(Error::from)
        .context(context)?;

    match value {
        Value::Object(map) => Ok(Some(map)),
        other => {
            tracing::debug!(path = %path.display(), kind = json_kind(&other), "JSON top level is not an object");
            Ok(None)
        }
    }
}

/// Look up `<name>.json` inside `dir`, where `name` is `filename` up to its
/// first `.`, and read it.
///
/// Returns `Ok(None)` when no such file exists.
pub fn json_from_resource(dir: impl AsRef<Path>, filename: &str) -> Result<Option<JsonObject>> {
    let name = filename.split('.').next().unwrap_or(filename);
    if name.is_empty() {
        return Err(Error::validation(format!("Invalid resource name: {:?}", filename)));
    }

    let path = dir.as_ref().join(format!("{name}.json"));
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "JSON resource not found");
        return Ok(None);
    }
    json_from_file(&path)
}

/// The system temporary directory.
pub fn temporary_directory() -> PathBuf {
    std::env::temp_dir()
}

/// Create `path` and any missing parents.
pub fn create_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match std::fs::create_dir_all(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to create directory");
            false
        }
    }
}

/// Remove a file, a symlink or a whole directory tree.
pub fn remove_item(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let result = std::fs::symlink_metadata(path).and_then(|meta| {
        if meta.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        }
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove item");
            false
        }
    }
}

/// Remove everything inside `path`, keeping the directory itself.
///
/// Returns `false` when `path` is not a directory or any entry could not be
/// removed; removal continues past individual failures.
pub fn remove_all_items_inside_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if !path.is_dir() {
        tracing::warn!(path = %path.display(), "Not a directory");
        return false;
    }

    let mut ok = true;
    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => ok &= remove_item(entry.path()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to list directory");
                ok = false;
            }
        }
    }
    ok
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
