//! Structured errors with codes, context and recovery suggestions
//!
//! Every fallible operation in the core crate returns [`Error`], which
//! carries:
//! - a numeric [`ErrorCode`] grouped into an [`ErrorCategory`]
//! - optional context and a recovery suggestion
//! - the underlying source error, when there is one
//!
//! [`ErrorReport`] is the serialisable form used by `gn --json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Concern an [`ErrorCode`] belongs to; the thousands digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// 1xxx
    General,
    /// 2xxx
    Io,
    /// 3xxx
    Configuration,
    /// 4xxx
    Json,
    /// 5xxx
    Defaults,
    /// 6xxx
    Validation,
}

impl ErrorCategory {
    /// Process exit code for errors of this category.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Io => exit_codes::IO_ERROR,
            ErrorCategory::Configuration => exit_codes::CONFIG_ERROR,
            ErrorCategory::Validation => exit_codes::VALIDATION_ERROR,
            ErrorCategory::General | ErrorCategory::Json | ErrorCategory::Defaults => {
                exit_codes::FAILURE
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::General => "General",
            ErrorCategory::Io => "IO",
            ErrorCategory::Configuration => "Configuration",
            ErrorCategory::Json => "JSON",
            ErrorCategory::Defaults => "Defaults",
            ErrorCategory::Validation => "Validation",
        };
        f.write_str(name)
    }
}

/// Error codes for programmatic error handling
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invariant broken inside the toolkit, such as a poisoned lock
    Internal = 1001,

    /// Generic I/O failure
    Io = 2000,
    /// File does not exist
    FileNotFound = 2001,
    /// Insufficient permissions
    PermissionDenied = 2002,

    /// Explicitly requested configuration file is missing
    ConfigNotFound = 3001,
    /// Configuration file is not valid TOML
    ConfigParse = 3002,

    /// JSON has the wrong shape for the target type
    Json = 4000,
    /// Text is not valid JSON
    JsonSyntax = 4001,
    /// JSON is valid but the top level is not an object
    JsonNotObject = 4002,
    /// Value could not be serialised to JSON
    JsonEncode = 4003,

    /// Generic defaults store failure
    Defaults = 5000,
    /// Backing file exists but does not hold a JSON object
    DefaultsCorrupted = 5001,
    /// Backing file could not be written
    DefaultsPersist = 5002,

    /// Generic validation failure
    Validation = 6000,
    /// Input rejected
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Concern this code belongs to
    pub fn category(self) -> ErrorCategory {
        match self.code() / 1000 {
            2 => ErrorCategory::Io,
            3 => ErrorCategory::Configuration,
            4 => ErrorCategory::Json,
            5 => ErrorCategory::Defaults,
            6 => ErrorCategory::Validation,
            _ => ErrorCategory::General,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Error with a code, optional context and an optional recovery suggestion
#[derive(Error, Debug)]
pub struct Error {
    code: ErrorCode,
    message: String,
    context: Option<String>,
    suggestion: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let extras = [("Context", &self.context), ("Suggestion", &self.suggestion)];
        for (label, value) in extras {
            if let Some(value) = value {
                write!(f, "\n  {label}: {value}")?;
            }
        }
        Ok(())
    }
}

impl Error {
    /// Create an error with no context, suggestion or source
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Code of this error
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message without context or suggestion
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What was being done when the error happened
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// How the caller might recover
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.code.category().exit_code()
    }

    /// Replace the context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Replace the recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach the underlying error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Explicit configuration path that does not exist
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a gn-foundation.toml file or use --config to specify a path")
    }

    /// JSON document whose top level is not an object
    pub fn json_not_object(what: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::JsonNotObject,
            format!("Expected a JSON object: {}", what.into()),
        )
    }

    /// Defaults store failure
    pub fn defaults(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Defaults, message)
    }

    /// Generic validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// Poisoned lock or similar internal fault
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

/// Serialisable snapshot of an [`Error`], or of a coded error from another
/// `gn-*` crate built with [`ErrorReport::new`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// `E` followed by the numeric code
    pub code: String,
    /// Concern the code belongs to, e.g. `IO` or `Crypto`
    pub category: String,
    /// Message without context or suggestion
    pub message: String,
    /// What was being done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// How to recover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Text of the underlying error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ErrorReport {
    /// Report for an error that only has a numeric code and a message.
    pub fn new(code: u32, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: format!("E{code:04}"),
            category: category.into(),
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code.to_string(),
            category: err.code.category().to_string(),
            message: err.message.clone(),
            context: err.context.clone(),
            suggestion: err.suggestion.clone(),
            source: err.source.as_ref().map(ToString::to_string),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes used by the `gn` binary
#[allow(missing_docs)]
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const CRYPTO_ERROR: i32 = 5;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::Io,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let code = match err.classify() {
            Category::Io => ErrorCode::Io,
            Category::Syntax | Category::Eof => ErrorCode::JsonSyntax,
            Category::Data => ErrorCode::Json,
        };
        Error::new(code, format!("Invalid JSON: {err}")).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParse, format!("Invalid TOML: {}", err.message())).with_source(err)
    }
}

/// Attach context or a suggestion to the error of a [`Result`]
pub trait ResultExt<T> {
    /// Set the context of the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Set the recovery suggestion of the error, if any
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}
