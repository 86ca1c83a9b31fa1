//! Prelude module - common imports for sheetrow users
//!
//! ```rust
//! use sheetrow::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellRef,
    CellValue,

    // Serialization
    CellStyleIds,
    RowOptions,
    RowSerializer,
    SharedStringTable,
    SharedStrings,
    SheetDataWriter,

    // Error types
    Error,
    XlsxError,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvRowReader};
