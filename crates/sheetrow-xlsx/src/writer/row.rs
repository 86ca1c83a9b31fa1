//! Row serializer

use std::fmt::Write as _;

use sheetrow_core::{
    date_to_oa_date, datetime_to_oa_date, detect, timestamp_to_oa_date, CellRef, CellValue,
};

use crate::error::XlsxResult;
use crate::escape::escape_text;
use crate::options::RowOptions;
use crate::shared_strings::SharedStringTable;

/// Serializes rows of [`CellValue`]s into SpreadsheetML `<row>` fragments
///
/// The serializer holds no per-row state, so one instance can serialize any
/// number of rows. Shared-string lookups go through the table passed to each
/// call; without one, text is written inline.
#[derive(Debug, Clone, Default)]
pub struct RowSerializer {
    options: RowOptions,
}

impl RowSerializer {
    /// Create a serializer with the given options
    pub fn new(options: RowOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &RowOptions {
        &self.options
    }

    /// Serialize one row into a `<row r="{row}">...</row>` fragment
    ///
    /// `row` is the 1-based row number. Values are placed in consecutive
    /// columns starting at `A`; empty values produce no `<c>` element but
    /// still take up their column.
    pub fn serialize_row(
        &self,
        values: &[CellValue],
        row: u32,
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<String> {
        let mut out = String::with_capacity(16 + values.len() * 32);
        self.write_row(&mut out, values, row, shared_strings)?;
        Ok(out)
    }

    /// Append one `<row>` fragment to `out`, returning the number of cells written
    ///
    /// On error `out` is left as it was. Undecodable [`CellValue::Bytes`] are
    /// rejected before any string reaches the shared-string table.
    pub fn write_row(
        &self,
        out: &mut String,
        values: &[CellValue],
        row: u32,
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<usize> {
        for value in values {
            if let CellValue::Bytes(b) = value {
                std::str::from_utf8(b)?;
            }
        }

        let start = out.len();
        let result = self.write_cells(out, values, row, shared_strings);
        if result.is_err() {
            out.truncate(start);
        }
        result
    }

    fn write_cells(
        &self,
        out: &mut String,
        values: &[CellValue],
        row: u32,
        mut shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<usize> {
        let _ = write!(out, "<row r=\"{}\">", row);

        let mut written = 0;
        for (col, value) in values.iter().enumerate() {
            let cell = CellRef::new(row, col as u32);
            if self.write_cell(out, cell, value, shared_strings.as_deref_mut())? {
                written += 1;
            }
        }

        out.push_str("</row>");
        log::trace!("row {}: {} of {} cells written", row, written, values.len());
        Ok(written)
    }

    /// Write one `<c>` element, returning whether anything was written
    fn write_cell(
        &self,
        out: &mut String,
        cell: CellRef,
        value: &CellValue,
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<bool> {
        let styles = &self.options.styles;

        match value {
            CellValue::Float(n) => {
                open_cell(out, cell, Some(styles.float), Some("n"));
                let _ = write!(out, "<v>{}</v></c>", n);
            }
            CellValue::Integer(n) => {
                open_cell(out, cell, None, Some("n"));
                let _ = write!(out, "<v>{}</v></c>", n);
            }
            CellValue::Decimal(d) => {
                open_cell(out, cell, None, Some("n"));
                let _ = write!(out, "<v>{}</v></c>", d);
            }
            CellValue::Boolean(b) => {
                open_cell(out, cell, None, Some("b"));
                out.push_str(if *b { "<v>1</v></c>" } else { "<v>0</v></c>" });
            }
            CellValue::Time(t) => {
                open_cell(out, cell, Some(styles.time), None);
                let _ = write!(out, "<v>{}</v></c>", timestamp_to_oa_date(t));
            }
            CellValue::DateTime(dt) => {
                open_cell(out, cell, Some(styles.date), None);
                let _ = write!(out, "<v>{}</v></c>", datetime_to_oa_date(dt));
            }
            CellValue::Date(d) => {
                open_cell(out, cell, Some(styles.date), None);
                let _ = write!(out, "<v>{}</v></c>", date_to_oa_date(*d));
            }
            CellValue::Text(s) => return self.write_text(out, cell, s, shared_strings),
            CellValue::Bytes(b) => {
                let s = std::str::from_utf8(b)?;
                return self.write_text(out, cell, s, shared_strings);
            }
            CellValue::Empty => {
                log::trace!("{}: empty, skipped", cell);
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn write_text(
        &self,
        out: &mut String,
        cell: CellRef,
        s: &str,
        shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    ) -> XlsxResult<bool> {
        if self.options.auto_format {
            // Detection never yields text, so this cannot recurse back here
            if let Some(detected) = detect::detect(s) {
                return self.write_cell(out, cell, &detected, shared_strings);
            }
        }

        if s.is_empty() {
            log::trace!("{}: empty string, skipped", cell);
            return Ok(false);
        }

        match shared_strings {
            Some(table) => {
                let idx = table.index_of(s)?;
                open_cell(out, cell, None, Some("s"));
                let _ = write!(out, "<v>{}</v></c>", idx);
            }
            None => {
                open_cell(out, cell, None, Some("inlineStr"));
                let _ = write!(out, "<is><t>{}</t></is></c>", escape_text(s));
            }
        }

        Ok(true)
    }
}

/// Write `<c r="{ref}"[ s="{style}"][ t="{kind}"]>`
fn open_cell(out: &mut String, cell: CellRef, style: Option<u32>, kind: Option<&str>) {
    out.push_str("<c r=\"");
    cell.write_a1(out);
    out.push('"');
    if let Some(style) = style {
        let _ = write!(out, " s=\"{}\"", style);
    }
    if let Some(kind) = kind {
        let _ = write!(out, " t=\"{}\"", kind);
    }
    out.push('>');
}

/// Serialize one row with the default style ids
///
/// Shorthand for [`RowSerializer::serialize_row`] with
/// `RowOptions::default().auto_format(auto_format)`.
pub fn serialize_row(
    values: &[CellValue],
    row: u32,
    shared_strings: Option<&mut (dyn SharedStringTable + '_)>,
    auto_format: bool,
) -> XlsxResult<String> {
    RowSerializer::new(RowOptions::default().auto_format(auto_format))
        .serialize_row(values, row, shared_strings)
}
