//! Unified error types for bomer.
//!
//! Fatal conditions only: configuration problems, unreadable inputs and
//! engine contract violations. Data-quality problems in a BOM are not errors;
//! they are reported as [`Issue`](crate::schema::Issue)s and never abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bomer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomerError {
    /// Invalid or out-of-range configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The BOM file could not be loaded
    #[error("Failed to load BOM {path:?}: {source}")]
    BomLoad {
        path: PathBuf,
        #[source]
        source: LoadErrorKind,
    },

    /// The supplier catalog could not be loaded
    #[error("Failed to load supplier catalog {path:?}: {source}")]
    SupplierLoad {
        path: PathBuf,
        #[source]
        source: LoadErrorKind,
    },

    /// An engine was invoked on a table that breaks its contract
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why an input file could not be loaded.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("file not found")]
    NotFound,

    #[error("unsupported file extension {found:?} (expected {expected})")]
    UnsupportedExtension { found: String, expected: String },

    #[error("file contains no data rows")]
    Empty,

    #[error("invalid CSV: {0}")]
    InvalidCsv(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Read(String),
}

/// Engine precondition violations. These signal caller misuse, not bad data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("BOM must contain {} columns (missing: {})", .required.join(" and "), .missing.join(", "))]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("CSV serialization failed: {0}")]
    CsvSerializationError(String),

    #[error("Text formatting failed: {0}")]
    FormatError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for bomer operations
pub type Result<T> = std::result::Result<T, BomerError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl BomerError {
    /// Create a BOM load error
    pub fn bom_load(path: impl Into<PathBuf>, source: LoadErrorKind) -> Self {
        Self::BomLoad {
            path: path.into(),
            source,
        }
    }

    /// Create a supplier catalog load error
    pub fn supplier_load(path: impl Into<PathBuf>, source: LoadErrorKind) -> Self {
        Self::SupplierLoad {
            path: path.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Whether this error came from a malformed or missing input file.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(self, Self::BomLoad { .. } | Self::SupplierLoad { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for BomerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BomerError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

impl From<csv::Error> for BomerError {
    fn from(err: csv::Error) -> Self {
        Self::report(
            "CSV serialization",
            ReportErrorKind::CsvSerializationError(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure deep in the
/// report writer surfaces as `"writing artifacts: writing issues.json: ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<BomerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Load and schema errors already name their subject and are returned as-is.
fn add_context_to_error(err: BomerError, new_ctx: &str) -> BomerError {
    match err {
        BomerError::Report {
            context: existing,
            source,
        } => BomerError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BomerError::Io {
            path,
            message,
            source,
        } => BomerError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        BomerError::Config(msg) => BomerError::Config(chain_context(new_ctx, &msg)),
        other => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
