//! Shared-string table
//!
//! Text cells can either be written inline or reference an entry of the
//! workbook's shared-string table (`xl/sharedStrings.xml`). The serializer
//! only needs a way to turn a string into its index, which is what
//! [`SharedStringTable`] describes. [`SharedStrings`] is the in-memory
//! implementation.

use std::io::Write;
use std::sync::Arc;

use ahash::AHashMap;
use crate::escape::escape_text;
use crate::error::{XlsxError, XlsxResult};

/// Maps unique string content to a stable index
///
/// Looking up a string that is not in the table yet inserts it. Calling
/// `index_of` twice with equal content returns the same index.
pub trait SharedStringTable {
    /// Get the index of `s`, inserting it if it is new
    fn index_of(&mut self, s: &str) -> XlsxResult<u32>;
}

impl<T: SharedStringTable + ?Sized> SharedStringTable for &mut T {
    fn index_of(&mut self, s: &str) -> XlsxResult<u32> {
        (**self).index_of(s)
    }
}

/// In-memory shared-string table
///
/// Strings keep their insertion order, which is also their index order in the
/// rendered `<sst>` part.
#[derive(Debug, Default)]
pub struct SharedStrings {
    /// Unique strings in index order
    strings: Vec<Arc<str>>,
    /// Fast lookup for deduplication
    index_map: AHashMap<Arc<str>, u32>,
    /// Total number of lookups, i.e. cells referencing the table
    count: u64,
}

impl SharedStrings {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a string by index
    pub fn get(&self, index: u32) -> Option<&str> {
        self.strings.get(index as usize).map(|s| s.as_ref())
    }

    /// Number of unique strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Number of references handed out (the `count` attribute of `<sst>`)
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Iterate over all strings with their indices
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (i as u32, s.as_ref()))
    }

    /// Write the `xl/sharedStrings.xml` part
    pub fn write_xml<W: Write>(&self, mut writer: W) -> XlsxResult<()> {
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            self.count,
            self.strings.len()
        )?;

        for s in &self.strings {
            let preserve = s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace);
            if preserve {
                write!(writer, r#"<si><t xml:space="preserve">{}</t></si>"#, escape_text(s))?;
            } else {
                write!(writer, "<si><t>{}</t></si>", escape_text(s))?;
            }
        }

        writer.write_all(b"</sst>")?;
        log::debug!(
            "wrote shared string table: {} unique, {} references",
            self.strings.len(),
            self.count
        );
        Ok(())
    }

    /// Render the `xl/sharedStrings.xml` part into a string
    pub fn to_xml(&self) -> XlsxResult<String> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        // Everything written above came from `&str`s
        String::from_utf8(buf).map_err(|e| XlsxError::Encoding(e.utf8_error()))
    }
}

impl SharedStringTable for SharedStrings {
    fn index_of(&mut self, s: &str) -> XlsxResult<u32> {
        self.count += 1;

        if let Some(&idx) = self.index_map.get(s) {
            return Ok(idx);
        }

        let idx = u32::try_from(self.strings.len())
            .map_err(|_| XlsxError::SharedStrings("table is full".into()))?;
        let key: Arc<str> = Arc::from(s);
        self.index_map.insert(key.clone(), idx);
        self.strings.push(key);
        Ok(idx)
    }
}
