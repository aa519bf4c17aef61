//! Error handling for the EDA report.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;

/// Specialized error type for report generation
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An input CSV file does not exist
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Error opening, reading or creating a file or directory
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error inferring, decoding or casting CSV data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A required column is absent from a table
    #[error("Column '{column}' not found in {table}")]
    ColumnNotFound { table: String, column: String },

    /// A required value is missing or cannot be converted
    #[error("Invalid value in {table}.{column} at row {row}: {value:?}")]
    InvalidValue {
        table: String,
        column: String,
        row: usize,
        value: String,
    },

    /// Error drawing or encoding a chart image
    #[error("Failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },

    /// The bundled chart font could not be registered
    #[error("Font error: {0}")]
    Font(String),
}

impl ReportError {
    /// Wrap an IO error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn column_not_found(table: &str, column: &str) -> Self {
        Self::ColumnNotFound {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    pub fn invalid_value(table: &str, column: &str, row: usize, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            table: table.to_string(),
            column: column.to_string(),
            row,
            value: value.into(),
        }
    }

    pub fn render(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Render {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
