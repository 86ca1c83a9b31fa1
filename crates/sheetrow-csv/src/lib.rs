//! # sheetrow-csv
//!
//! Streams CSV records into SpreadsheetML `<row>` fragments, one record at a
//! time. Every field enters as text; with auto-format on (the default) numbers,
//! booleans and ISO dates become typed cells.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvRowReader;
