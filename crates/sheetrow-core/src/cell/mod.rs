//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value placed in one row position
//! - [`CellRef`] - A cell's location (e.g., "A1")

mod address;
mod value;

pub use address::CellRef;
pub use value::CellValue;
