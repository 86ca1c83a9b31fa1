//! # sheetrow-core
//!
//! Core data structures for the sheetrow row serializer.
//!
//! This crate provides the value-level building blocks used by `sheetrow-xlsx`:
//! - [`CellValue`] - The closed set of scalar values a row cell can hold
//! - [`CellRef`] - Cell references and column letters (A, B, ..., AA, ...)
//! - [`date`] - OLE Automation Date encoding for dates, date-times and times
//! - [`detect`] - Auto-format detection for loosely-typed text input
//!
//! ## Example
//!
//! ```rust
//! use sheetrow_core::{detect, CellRef, CellValue};
//!
//! assert_eq!(CellRef::new(1, 0).to_string(), "A1");
//! assert_eq!(CellRef::column_to_letters(26), "AA");
//!
//! assert_eq!(detect::detect("42"), Some(CellValue::Integer(42)));
//! assert_eq!(CellValue::from("hello").auto_format(), CellValue::from("hello"));
//! ```

pub mod cell;
pub mod date;
pub mod detect;
pub mod error;

// Re-exports for convenience
pub use cell::{CellRef, CellValue};
pub use date::{date_to_oa_date, datetime_to_oa_date, decompose, timestamp_to_oa_date};
pub use error::{Error, Result};

// Re-export the value types that appear in `CellValue` variants
pub use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
pub use rust_decimal::Decimal;
