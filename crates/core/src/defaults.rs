//! Persistent key/value defaults store
//!
//! A suite is a single JSON object on disk (`<dir>/<suite>.json`) mirrored in
//! memory behind an `RwLock`. Every write goes to a uniquely named temporary
//! file in the same directory, which is then renamed over the suite file, so
//! readers never see a half-written document and concurrent writers never
//! share a temporary file.
//!
//! Reads survive a poisoned lock by logging a warning and using the last
//! committed values. Writes to a poisoned store fail with `E1001`.
//!
//! Values are plain JSON. Typed getters return `None` both for a missing key
//! and for a value of the wrong type, and dates are stored as RFC 3339 text.
//!
//! # Example
//!
//! ```rust
//! use gn_core::defaults::Defaults;
//!
//! let defaults = Defaults::in_memory();
//! defaults.set("launch_count", 3).unwrap();
//! assert_eq!(defaults.int("launch_count"), Some(3));
//! assert_eq!(defaults.string("launch_count"), None);
//! ```

use crate::config::DefaultsConfig;
use crate::error::{Error, ErrorCode, Result, ResultExt};
use crate::fs::JsonObject;
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};
use tempfile::NamedTempFile;

/// JSON-file-backed defaults store.
#[derive(Debug)]
pub struct Defaults {
    path: Option<PathBuf>,
    values: RwLock<JsonObject>,
}

impl Defaults {
    /// Open (or create) the store for `suite` inside `dir`.
    pub fn open(dir: impl AsRef<Path>, suite: &str) -> Result<Self> {
        validate_suite(suite)?;

        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(Error::from)
            .context(format!("Creating defaults directory {}", dir.display()))?;

        let path = dir.join(format!("{suite}.json"));
        let values = if path.exists() {
            load_suite(&path)?
        } else {
            JsonObject::new()
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "Defaults suite opened");

        Ok(Self {
            path: Some(path),
            values: RwLock::new(values),
        })
    }

    /// Open the suite named by a `[defaults]` configuration section.
    pub fn from_config(config: &DefaultsConfig) -> Result<Self> {
        Self::open(config.resolved_directory(), &config.suite)
    }

    /// A store that lives only as long as this value.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: RwLock::new(JsonObject::new()),
        }
    }

    /// Backing file, if the store is persistent.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Store `value` under `key`. Storing `null` removes the key.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.write(|values| {
            if value.is_null() {
                values.remove(key);
            } else {
                values.insert(key.to_string(), value);
            }
        })
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut existed = false;
        self.write(|values| existed = values.remove(key).is_some())?;
        Ok(existed)
    }

    /// Whether `key` holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Snapshot of every entry.
    pub fn entries(&self) -> JsonObject {
        self.read().clone()
    }

    /// String value for `key`.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value for `key`.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Integer value for `key`.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    /// Single-precision value for `key`.
    pub fn float(&self, key: &str) -> Option<f32> {
        self.double(key).map(|v| v as f32)
    }

    /// Double-precision value for `key`.
    pub fn double(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// Date stored under `key` by [`set_date`](Self::set_date).
    pub fn date(&self, key: &str) -> Option<DateTime<Utc>> {
        let text = self.string(key)?;
        DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    /// Store a date as RFC 3339 text.
    pub fn set_date<Tz: TimeZone>(&self, key: &str, date: &DateTime<Tz>) -> Result<()> {
        self.set(key, date.with_timezone(&Utc).to_rfc3339())
    }

    /// Decode the value under `key` into `T`.
    ///
    /// Returns `None` when the key is missing or the value does not decode.
    pub fn object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(object) => Some(object),
            Err(e) => {
                tracing::debug!(key, error = %e, "Stored value does not decode");
                None
            }
        }
    }

    /// Encode `object` as JSON and store it under `key`.
    pub fn set_object<T: Serialize + ?Sized>(&self, key: &str, object: &T) -> Result<()> {
        let value = serde_json::to_value(object).map_err(|e| {
            Error::new(ErrorCode::JsonEncode, format!("Cannot encode value for {key}"))
                .with_source(e)
        })?;
        self.set(key, value)
    }

    /// Remove every key.
    pub fn clear(&self) -> Result<()> {
        self.write(|values| values.clear())
    }

    fn read(&self) -> RwLockReadGuard<'_, JsonObject> {
        self.values.read().unwrap_or_else(|poisoned| {
            tracing::warn!(
                path = ?self.path,
                "Defaults lock poisoned, reading last committed values"
            );
            poisoned.into_inner()
        })
    }

    fn write(&self, mutate: impl FnOnce(&mut JsonObject)) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| Error::internal("Defaults lock poisoned"))?;

        let mut updated = values.clone();
        mutate(&mut updated);
        if let Some(path) = &self.path {
            persist(path, &updated)?;
        }
        *values = updated;
        Ok(())
    }
}

fn validate_suite(suite: &str) -> Result<()> {
    let bad = suite.is_empty()
        || suite.starts_with('.')
        || suite.contains(['/', '\\'])
        || suite.chars().any(char::is_control);
    if bad {
        return Err(Error::new(
            ErrorCode::InvalidInput,
            format!("Invalid defaults suite name: {:?}", suite),
        )
        .with_suggestion("Use a plain name such as \"standard\" or \"group.example.app\""));
    }
    Ok(())
}

fn load_suite(path: &Path) -> Result<JsonObject> {
    let data = std::fs::read(path)
        .map_err(Error::from)
        .context(format!("Reading defaults from {}", path.display()))?;

    match serde_json::from_slice::<Value>(&data) {
        Ok(Value::Object(values)) => Ok(values),
        Ok(_) => Err(corrupted(path, None)),
        Err(e) => Err(corrupted(path, Some(e))),
    }
}

fn corrupted(path: &Path, source: Option<serde_json::Error>) -> Error {
    let err = Error::new(
        ErrorCode::DefaultsCorrupted,
        format!("Defaults file is not a JSON object: {}", path.display()),
    )
    .with_suggestion("Fix or delete the file to start with empty defaults");
    match source {
        Some(e) => err.with_source(e),
        None => err,
    }
}

fn persist(path: &Path, values: &JsonObject) -> Result<()> {
    let failed = |e: std::io::Error| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to persist defaults");
        Error::new(
            ErrorCode::DefaultsPersist,
            format!("Cannot write defaults to {}", path.display()),
        )
        .with_source(e)
    };

    let data = serde_json::to_vec_pretty(values)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(failed)?;
    tmp.write_all(&data).map_err(failed)?;
    tmp.persist(path).map_err(|e| failed(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        age: u32,
    }

    #[test]
    fn test_primitives() {
        let defaults = Defaults::in_memory();
        defaults.set("name", "Ada").unwrap();
        defaults.set("enabled", true).unwrap();
        defaults.set("count", 42).unwrap();
        defaults.set("ratio", 0.5).unwrap();

        assert_eq!(defaults.string("name").as_deref(), Some("Ada"));
        assert_eq!(defaults.bool("enabled"), Some(true));
        assert_eq!(defaults.int("count"), Some(42));
        assert_eq!(defaults.double("ratio"), Some(0.5));
        assert_eq!(defaults.float("ratio"), Some(0.5f32));
        assert_eq!(defaults.double("count"), Some(42.0));
    }

    #[test]
    fn test_wrong_type_is_none() {
        let defaults = Defaults::in_memory();
        defaults.set("name", "Ada").unwrap();
        assert_eq!(defaults.int("name"), None);
        assert_eq!(defaults.bool("name"), None);
        assert_eq!(defaults.string("missing"), None);
    }

    #[test]
    fn test_null_removes() {
        let defaults = Defaults::in_memory();
        defaults.set("k", 1).unwrap();
        defaults.set("k", Value::Null).unwrap();
        assert!(!defaults.contains("k"));
    }

    #[test]
    fn test_remove_and_keys() {
        let defaults = Defaults::in_memory();
        defaults.set("b", 2).unwrap();
        defaults.set("a", 1).unwrap();
        assert_eq!(defaults.keys(), vec!["a", "b"]);
        assert!(defaults.remove("a").unwrap());
        assert!(!defaults.remove("a").unwrap());
        assert_eq!(defaults.keys(), vec!["b"]);
        defaults.clear().unwrap();
        assert!(defaults.keys().is_empty());
    }

    #[test]
    fn test_date_round_trip() {
        let defaults = Defaults::in_memory();
        let date = Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();
        defaults.set_date("last_sync", &date).unwrap();
        assert_eq!(defaults.date("last_sync"), Some(date));

        defaults.set("bogus", "yesterday").unwrap();
        assert_eq!(defaults.date("bogus"), None);
    }

    #[test]
    fn test_codable_object() {
        let defaults = Defaults::in_memory();
        let profile = Profile {
            name: "Grace".into(),
            age: 85,
        };
        defaults.set_object("profile", &profile).unwrap();
        assert_eq!(defaults.object::<Profile>("profile"), Some(profile));

        defaults.set("profile", "not a profile").unwrap();
        assert_eq!(defaults.object::<Profile>("profile"), None);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let defaults = Defaults::open(dir.path(), "standard").unwrap();
            defaults.set("theme", "dark").unwrap();
            defaults.set_object("sizes", &vec![1, 2, 3]).unwrap();
        }

        let defaults = Defaults::open(dir.path(), "standard").unwrap();
        assert_eq!(defaults.string("theme").as_deref(), Some("dark"));
        assert_eq!(defaults.object::<Vec<u32>>("sizes"), Some(vec![1, 2, 3]));
        assert_eq!(defaults.path(), Some(dir.path().join("standard.json").as_path()));
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("standard.json")]);
    }

    #[test]
    fn test_concurrent_writers_share_suite() {
        let dir = TempDir::new().unwrap();
        let writers: Vec<_> = (0..4)
            .map(|id| {
                let dir = dir.path().to_path_buf();
                std::thread::spawn(move || {
                    let defaults = Defaults::open(&dir, "standard").unwrap();
                    for round in 0..25 {
                        defaults.set(&format!("writer{id}"), round).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let reopened = Defaults::open(dir.path(), "standard").unwrap();
        assert!(!reopened.keys().is_empty());
        let files = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 1);
    }

    #[test]
    fn test_poisoned_lock_still_reads() {
        let defaults = std::sync::Arc::new(Defaults::in_memory());
        defaults.set("count", 7).unwrap();

        let poisoner = std::sync::Arc::clone(&defaults);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.values.write().unwrap();
            panic!("poison the defaults lock");
        })
        .join();
        assert!(result.is_err());
        assert!(defaults.values.is_poisoned());

        assert_eq!(defaults.int("count"), Some(7));
        assert!(defaults.contains("count"));
        assert_eq!(defaults.keys(), vec!["count"]);
        assert_eq!(defaults.entries().len(), 1);

        let err = defaults.set("count", 8).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Internal);
    }

    #[test]
    fn test_suites_are_separate() {
        let dir = TempDir::new().unwrap();
        let a = Defaults::open(dir.path(), "group.a").unwrap();
        let b = Defaults::open(dir.path(), "group.b").unwrap();
        a.set("k", 1).unwrap();
        assert!(!b.contains("k"));
    }

    #[test]
    fn test_invalid_suite_name() {
        let dir = TempDir::new().unwrap();
        for suite in ["", "../escape", "a/b", ".hidden"] {
            let err = Defaults::open(dir.path(), suite).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidInput, "suite {:?}", suite);
        }
    }

    #[test]
    fn test_corrupted_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("standard.json"), "[1, 2]").unwrap();
        let err = Defaults::open(dir.path(), "standard").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DefaultsCorrupted);

        std::fs::write(dir.path().join("standard.json"), "{ broken").unwrap();
        let err = Defaults::open(dir.path(), "standard").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DefaultsCorrupted);
    }

    #[test]
    fn test_from_config() {
        let dir = TempDir::new().unwrap();
        let config = DefaultsConfig {
            suite: "cfg".into(),
            directory: Some(dir.path().to_path_buf()),
        };
        let defaults = Defaults::from_config(&config).unwrap();
        defaults.set("x", 1).unwrap();
        assert!(dir.path().join("cfg.json").is_file());
    }
}
