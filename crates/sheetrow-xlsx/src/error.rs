//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while serializing rows
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Text cell content is not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The shared-string table could not resolve a string
    #[error("Shared string table error: {0}")]
    SharedStrings(String),

    /// Rows must be written in strictly increasing order
    #[error("Row {row} written out of order (next row is {next})")]
    RowOutOfOrder { row: u32, next: u32 },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetrow_core::Error),
}
