//! # sheetrow-xlsx
//!
//! Streams SpreadsheetML (XLSX worksheet) rows one at a time.
//!
//! - [`RowSerializer`] turns an ordered list of [`CellValue`]s into one
//!   `<row r="N">...</row>` fragment
//! - [`SharedStrings`] is an in-memory shared-string table that can be handed
//!   to the serializer and later rendered as `xl/sharedStrings.xml`
//! - [`SheetDataWriter`] wraps a stream of rows in `<sheetData>` and writes
//!   them to any [`std::io::Write`]
//!
//! ## Example
//!
//! ```rust
//! use sheetrow_xlsx::{RowOptions, RowSerializer};
//! use sheetrow_core::CellValue;
//!
//! let serializer = RowSerializer::new(RowOptions::default().auto_format(true));
//! let row = vec![CellValue::from(1), CellValue::from("true"), CellValue::from("")];
//! let xml = serializer.serialize_row(&row, 1, None).unwrap();
//!
//! assert_eq!(
//!     xml,
//!     r#"<row r="1"><c r="A1" t="n"><v>1</v></c><c r="B1" t="b"><v>1</v></c></row>"#
//! );
//! ```

pub mod error;
mod escape;
pub mod options;
pub mod shared_strings;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use options::{CellStyleIds, RowOptions, DATE_STYLE_ID, FLOAT_STYLE_ID, TIME_STYLE_ID};
pub use shared_strings::{SharedStringTable, SharedStrings};
pub use writer::{serialize_row, RowSerializer, SheetDataWriter};

pub use sheetrow_core::CellValue;
