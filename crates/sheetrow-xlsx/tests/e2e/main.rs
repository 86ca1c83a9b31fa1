//! End-to-end tests for sheetrow-xlsx.
//!
//! Each test serializes rows, parses the emitted XML back with `quick-xml`
//! and asserts on the cells a spreadsheet reader would see.

mod common;
mod properties;
mod rows;
mod sheet_data;

// Re-export common utilities for submodules
pub use common::*;
