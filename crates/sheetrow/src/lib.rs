//! # sheetrow
//!
//! Converts spreadsheet rows, one at a time, into SpreadsheetML `<row>`
//! fragments ready to be streamed into an XLSX worksheet part.
//!
//! ## Features
//!
//! - Typed cells: booleans, integers, floats, decimals, dates, date-times, times and text
//! - Dates and times encoded as OLE Automation Dates
//! - Optional auto-format detection for text input (`"42"`, `"true"`, `"2024-01-15"`, ...)
//! - Inline strings or a shared-string table
//! - Streaming `<sheetData>` writer and CSV ingestion (`csv` feature)
//!
//! ## Example
//!
//! ```rust
//! use sheetrow::prelude::*;
//!
//! let mut strings = SharedStrings::new();
//! let serializer = RowSerializer::new(RowOptions::default().auto_format(true));
//!
//! let header = serializer
//!     .serialize_row(&["region".into(), "total".into()], 1, Some(&mut strings))
//!     .unwrap();
//! let row = serializer
//!     .serialize_row(&["north".into(), "1250.5".into()], 2, Some(&mut strings))
//!     .unwrap();
//!
//! assert_eq!(header, r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>"#);
//! assert_eq!(row, r#"<row r="2"><c r="A2" t="s"><v>2</v></c><c r="B2" s="3" t="n"><v>1250.5</v></c></row>"#);
//! ```

pub mod prelude;

// Re-export core types
pub use sheetrow_core::{
    date, date_to_oa_date, datetime_to_oa_date, decompose, detect, timestamp_to_oa_date, CellRef,
    CellValue, DateTime, Decimal, Error, FixedOffset, NaiveDate, NaiveDateTime, Result,
};

// Re-export XLSX types
pub use sheetrow_xlsx::{
    serialize_row, CellStyleIds, RowOptions, RowSerializer, SharedStringTable, SharedStrings,
    SheetDataWriter, XlsxError, XlsxResult, DATE_STYLE_ID, FLOAT_STYLE_ID, TIME_STYLE_ID,
};

// Re-export CSV types
#[cfg(feature = "csv")]
pub use sheetrow_csv::{CsvError, CsvReadOptions, CsvResult, CsvRowReader};
