//! CSV reader

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use sheetrow_core::CellValue;
use sheetrow_xlsx::{RowOptions, RowSerializer, SharedStringTable, SheetDataWriter};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// Converts CSV records into `<row>` fragments
///
/// Fields are handed to the row serializer as raw bytes, so a field that is
/// not valid UTF-8 fails the record it belongs to instead of being replaced.
pub struct CsvRowReader<R: Read> {
    reader: csv::Reader<R>,
    record: csv::ByteRecord,
    /// Serializer for the header record (never auto-formatted)
    header: RowSerializer,
    /// Serializer for data records
    data: RowSerializer,
    has_header: bool,
    /// `None` once row `u32::MAX` has been used
    next_row: Option<u32>,
    values: Vec<CellValue>,
}

impl CsvRowReader<File> {
    /// Open a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file, options))
    }
}

impl<R: Read> CsvRowReader<R> {
    /// Read CSV from a reader
    pub fn new(reader: R, options: &CsvReadOptions) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            // The header is emitted as a row of its own
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            reader,
            record: csv::ByteRecord::new(),
            header: RowSerializer::new(RowOptions::default()),
            data: RowSerializer::new(RowOptions::default().auto_format(options.auto_format)),
            has_header: options.has_header,
            next_row: Some(options.first_row.max(1)),
            values: Vec::new(),
        }
    }

    /// Row number the next record will get, `None` if no rows are left
    pub fn next_row_number(&self) -> Option<u32> {
        self.next_row
    }

    /// Serialize the next record, or return `None` at the end of the input
    pub fn next_row(
        &mut self,
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> CsvResult<Option<String>> {
        if !self.read_values()? {
            return Ok(None);
        }

        let is_header = std::mem::take(&mut self.has_header);
        let row = self.take_row_number()?;
        let serializer = if is_header {
            &self.header
        } else {
            &self.data
        };
        let xml = serializer.serialize_row(&self.values, row, shared_strings)?;
        Ok(Some(xml))
    }

    /// Stream every remaining record into a `<sheetData>` element on `out`
    ///
    /// Returns `out` once the closing tag is written.
    pub fn write_sheet_data<W: Write>(
        mut self,
        out: W,
        mut shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> CsvResult<W> {
        let mut writer = SheetDataWriter::new(out, self.data.options().clone())?;

        if std::mem::take(&mut self.has_header) && self.read_values()? {
            writer.set_options(self.header.options().clone());
            let row = self.take_row_number()?;
            writer.write_row_at(row, &self.values, shared_strings.as_deref_mut())?;
            writer.set_options(self.data.options().clone());
        }

        while self.read_values()? {
            let row = self.take_row_number()?;
            writer.write_row_at(row, &self.values, shared_strings.as_deref_mut())?;
        }

        log::debug!("converted CSV into {} rows", writer.rows_written());
        Ok(writer.finish()?)
    }

    fn take_row_number(&mut self) -> CsvResult<u32> {
        let row = self.next_row.ok_or(CsvError::RowLimit)?;
        self.next_row = row.checked_add(1);
        Ok(row)
    }

    /// Read the next record into `self.values`
    fn read_values(&mut self) -> CsvResult<bool> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(false);
        }

        self.values.clear();
        self.values
            .extend(self.record.iter().map(|field| CellValue::Bytes(field.to_vec())));
        Ok(true)
    }
}
