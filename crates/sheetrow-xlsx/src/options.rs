//! Row serialization options

/// Style id referenced by date and date-time cells
pub const DATE_STYLE_ID: u32 = 1;

/// Style id referenced by time cells
pub const TIME_STYLE_ID: u32 = 2;

/// Style id referenced by floating-point cells
pub const FLOAT_STYLE_ID: u32 = 3;

/// Cell format (`xf`) ids the serializer attaches to typed cells
///
/// The workbook's stylesheet has to define these ids; the defaults match the
/// conventional layout of one date, one time and one float format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyleIds {
    /// Style for dates and date-times
    pub date: u32,
    /// Style for times
    pub time: u32,
    /// Style for floating-point numbers
    pub float: u32,
}

impl Default for CellStyleIds {
    fn default() -> Self {
        Self {
            date: DATE_STYLE_ID,
            time: TIME_STYLE_ID,
            float: FLOAT_STYLE_ID,
        }
    }
}

/// Options for serializing rows
#[derive(Debug, Clone, Default)]
pub struct RowOptions {
    /// Promote text values to booleans, numbers and dates when they look like one
    pub auto_format: bool,
    /// Style ids for typed cells
    pub styles: CellStyleIds,
}

impl RowOptions {
    /// Create options with auto-format off and the default style ids
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable auto-format detection
    pub fn auto_format(mut self, enabled: bool) -> Self {
        self.auto_format = enabled;
        self
    }

    /// Use custom style ids
    pub fn styles(mut self, styles: CellStyleIds) -> Self {
        self.styles = styles;
        self
    }
}
