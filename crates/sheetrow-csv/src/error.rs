//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while converting CSV to rows
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record arrived after row `u32::MAX` was used
    #[error("CSV has more records than a sheet has rows")]
    RowLimit,

    /// Row serialization error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] sheetrow_xlsx::XlsxError),
}
