//! Cell value types

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the value placed at one position of a row
///
/// Exactly one variant applies per value. The variant decides the cell type
/// attribute, the style id and how the content is encoded when the row is
/// serialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellValue {
    /// Empty position (no `<c>` element is written, the column still advances)
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Integer value
    Integer(i64),

    /// Floating-point value, written with the float style
    Float(f64),

    /// Arbitrary precision number
    Decimal(Decimal),

    /// Calendar date without a time component
    Date(NaiveDate),

    /// Calendar date and time with a UTC offset
    DateTime(DateTime<FixedOffset>),

    /// Wall-clock timestamp with a UTC offset, written with the time style
    Time(DateTime<FixedOffset>),

    /// Text value
    Text(String),

    /// Text carried as raw bytes, decoded as UTF-8 when the row is serialized
    Bytes(Vec<u8>),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the value is empty
    ///
    /// Empty text counts as empty, since it produces no cell either.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Bytes(b) => b.is_empty(),
            _ => false,
        }
    }

    /// Check if the value is text (and thus a candidate for auto-format detection)
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_) | CellValue::Bytes(_))
    }

    /// Try to get the value as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Reclassify a text value with the auto-format detector
    ///
    /// Only [`CellValue::Text`] is ever promoted; every other variant is
    /// returned untouched.
    pub fn auto_format(self) -> CellValue {
        match self {
            CellValue::Text(s) => crate::detect::detect(&s).unwrap_or(CellValue::Text(s)),
            other => other,
        }
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Boolean(_) => "boolean",
            CellValue::Integer(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Decimal(_) => "decimal",
            CellValue::Date(_) => "date",
            CellValue::DateTime(_) => "datetime",
            CellValue::Time(_) => "time",
            CellValue::Text(_) => "text",
            CellValue::Bytes(_) => "bytes",
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Decimal(d) => write!(f, "{}", d),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) | CellValue::Time(dt) => write!(f, "{}", dt.to_rfc3339()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Decimal(d)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<DateTime<FixedOffset>> for CellValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<Vec<u8>> for CellValue {
    fn from(b: Vec<u8>) -> Self {
        CellValue::Bytes(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Integer(42));
        assert_eq!(CellValue::from(3.5), CellValue::Float(3.5));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(
            CellValue::from(Decimal::from_str("1.50").unwrap()),
            CellValue::Decimal(Decimal::from_str("1.50").unwrap())
        );
        assert_eq!(CellValue::from(None::<i64>), CellValue::Empty);
        assert_eq!(CellValue::from(Some("x")), CellValue::text("x"));

        let s = CellValue::from("hello");
        assert_eq!(s.as_text(), Some("hello"));
    }

    #[test]
    fn test_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::text("").is_empty());
        assert!(CellValue::Bytes(Vec::new()).is_empty());
        assert!(!CellValue::text(" ").is_empty());
        assert!(!CellValue::Integer(0).is_empty());
    }

    #[test]
    fn test_auto_format_only_promotes_text() {
        assert_eq!(CellValue::text("true").auto_format(), CellValue::Boolean(true));
        assert_eq!(CellValue::Integer(7).auto_format(), CellValue::Integer(7));
        assert_eq!(CellValue::Float(1.25).auto_format(), CellValue::Float(1.25));
        assert_eq!(CellValue::text("hello").auto_format(), CellValue::text("hello"));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Boolean(false).to_string(), "FALSE");
        assert_eq!(CellValue::Float(0.1).to_string(), "0.1");
        assert_eq!(
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()).to_string(),
            "2024-01-15"
        );
        assert_eq!(CellValue::Bytes(b"abc".to_vec()).to_string(), "abc");
    }
}
