//! CSV options

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether first record is a header (written as plain text)
    pub has_header: bool,
    /// Automatic type detection for data records
    pub auto_format: bool,
    /// Row number of the first record (1-based)
    pub first_row: u32,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
            auto_format: true,
            first_row: 1,
        }
    }
}
