//! Cell references and column letters

use crate::error::{Error, Result};
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// A cell reference (e.g., "A1", "AB12")
///
/// Rows are 1-based, exactly as they appear in the `r` attribute of a `<row>`.
/// Columns are 0-based positions within the row (A=0, B=1, ..., Z=25, AA=26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    /// Row number (1-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u32,
}

impl CellRef {
    /// Create a new cell reference from a 1-based row number and a 0-based column index
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetrow_core::CellRef;
    ///
    /// let cell = CellRef::parse("B7").unwrap();
    /// assert_eq!(cell.row, 7);
    /// assert_eq!(cell.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty reference".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        if split == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..split])?;

        let row_str = &s[split..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        Self::push_column_letters(col, &mut result);
        result
    }

    /// Append the letters for a column index to `out`
    pub fn push_column_letters(col: u32, out: &mut String) {
        // Seven letters cover every u32 column index
        let mut buf = [0u8; 7];
        let mut pos = buf.len();
        let mut n = col as u64 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            pos -= 1;
            buf[pos] = (n % 26) as u8 + b'A';
            n /= 26;
        }

        for &b in &buf[pos..] {
            out.push(b as char);
        }
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u64 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u64 - 'A' as u64 + 1);
            if col > u32::MAX as u64 + 1 {
                return Err(Error::ColumnOutOfBounds(letters.to_string()));
            }
        }

        Ok((col - 1) as u32)
    }

    /// Append this reference in A1 form to `out`
    pub fn write_a1(&self, out: &mut String) {
        Self::push_column_letters(self.col, out);
        // Writing into a String cannot fail
        let _ = write!(out, "{}", self.row);
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = String::new();
        self.write_a1(&mut result);
        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
