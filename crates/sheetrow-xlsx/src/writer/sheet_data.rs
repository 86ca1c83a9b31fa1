//! Streaming `<sheetData>` writer

use std::io::Write;

use sheetrow_core::CellValue;

use crate::error::{XlsxError, XlsxResult};
use crate::options::RowOptions;
use crate::shared_strings::SharedStringTable;
use crate::writer::RowSerializer;

/// Streams rows into the `<sheetData>` element of a worksheet part
///
/// Each row is serialized and written as soon as it is handed over; nothing
/// but the current row is kept in memory. Rows are numbered from 1 unless an
/// explicit row number is given, and row numbers must strictly increase.
///
/// ```rust
/// use sheetrow_xlsx::{RowOptions, SheetDataWriter};
/// use sheetrow_core::CellValue;
///
/// let mut writer = SheetDataWriter::new(Vec::new(), RowOptions::default()).unwrap();
/// writer.write_row(&[CellValue::from("id")], None).unwrap();
/// writer.write_row(&[CellValue::from(7)], None).unwrap();
/// let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
///
/// assert!(xml.starts_with("<sheetData><row r=\"1\">"));
/// assert!(xml.ends_with("</row></sheetData>"));
/// ```
pub struct SheetDataWriter<W: Write> {
    inner: W,
    serializer: RowSerializer,
    /// Smallest row number the next row may use
    next_row: u32,
    rows_written: u64,
    /// Reused between rows
    buf: String,
}

impl<W: Write> SheetDataWriter<W> {
    /// Create a writer and emit the opening `<sheetData>` tag
    pub fn new(mut inner: W, options: RowOptions) -> XlsxResult<Self> {
        inner.write_all(b"<sheetData>")?;
        Ok(Self {
            inner,
            serializer: RowSerializer::new(options),
            next_row: 1,
            rows_written: 0,
            buf: String::new(),
        })
    }

    /// Write the next row, numbered one past the previous row
    ///
    /// Returns the row number used.
    pub fn write_row(
        &mut self,
        values: &[CellValue],
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<u32> {
        let row = self.next_row;
        self.write_row_at(row, values, shared_strings)?;
        Ok(row)
    }

    /// Write a row with an explicit 1-based row number
    ///
    /// Skipped row numbers are simply absent from the sheet.
    pub fn write_row_at(
        &mut self,
        row: u32,
        values: &[CellValue],
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<()> {
        if row == 0 || row < self.next_row {
            return Err(XlsxError::RowOutOfOrder {
                row,
                next: self.next_row,
            });
        }

        self.buf.clear();
        self.serializer
            .write_row(&mut self.buf, values, row, shared_strings)?;
        self.inner.write_all(self.buf.as_bytes())?;

        self.next_row = row.saturating_add(1);
        self.rows_written += 1;
        Ok(())
    }

    /// Change the options used for the rows written from now on
    pub fn set_options(&mut self, options: RowOptions) {
        self.serializer = RowSerializer::new(options);
    }

    /// Number of rows written so far
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Emit the closing `</sheetData>` tag and return the inner writer
    pub fn finish(mut self) -> XlsxResult<W> {
        self.inner.write_all(b"</sheetData>")?;
        self.inner.flush()?;
        log::debug!("sheet data finished: {} rows", self.rows_written);
        Ok(self.inner)
    }
}
