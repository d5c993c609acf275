//! Error types shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, cleaning, persisting or aggregating a dataset.
///
/// Every variant is fatal to the run. Row-level problems (malformed records,
/// rows missing a required field) are not errors: they are skipped or dropped
/// and logged by the stage that sees them.
#[derive(Debug, Error)]
pub enum DataError {
    // === Source Errors ===
    /// Local file missing or remote URL unreachable.
    #[error("source not found: {source_name}")]
    NotFound { source_name: String },

    /// Delimited content is structurally invalid.
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    // === Schema Errors ===
    /// One or more required columns are absent.
    #[error("missing required column(s): {}", columns.join(", "))]
    Schema { columns: Vec<String> },

    // === Output Errors ===
    /// Destination directory or file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Anything else (unsupported encoding, unexpected HTTP status, dataframe failure).
    #[error("{message}")]
    Unknown { message: String },
}

impl DataError {
    /// Schema error for a single missing column.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::Schema {
            columns: vec![column.into()],
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for DataError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Unknown {
            message: format!("dataframe operation failed: {err}"),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, DataError>;
