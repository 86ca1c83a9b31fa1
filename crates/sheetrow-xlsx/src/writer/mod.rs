//! Row and sheet-data writers

mod row;
mod sheet_data;

pub use row::{serialize_row, RowSerializer};
pub use sheet_data::SheetDataWriter;
