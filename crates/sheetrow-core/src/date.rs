//! OLE Automation Date encoding
//!
//! Spreadsheet cells store dates and times as a fractional day count, the
//! OLE Automation Date:
//! - day 0 is 1899-12-30, day 1 is 1899-12-31
//! - 1970-01-01 (the Unix epoch) is day 25569
//! - the fractional part is the time of day (0.5 == 12:00:00)
//!
//! The target format has no notion of time zones, so every conversion here
//! works on the local wall-clock reading of a value and ignores its offset.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

/// Julian day number of OLE Automation day 0 (1899-12-30)
pub const OA_EPOCH_JULIAN_DAY: i64 = 2_415_019;

/// OLE Automation day number of the Unix epoch (1970-01-01)
pub const UNIX_EPOCH_OA_DAY: f64 = 25_569.0;

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day number of 0000-12-31 (chrono's day 0 of the common era)
const CE_JULIAN_OFFSET: i64 = 1_721_425;

/// Julian day number of a calendar date
pub fn julian_day(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + CE_JULIAN_OFFSET
}

/// Split a date-time into `(julian_day, day_fraction_seconds, sub_second_fraction)`
///
/// `day_fraction_seconds` is the whole number of seconds since midnight and
/// `sub_second_fraction` the remaining fraction of a second.
pub fn decompose(dt: &NaiveDateTime) -> (i64, u32, f64) {
    (
        julian_day(dt.date()),
        dt.num_seconds_from_midnight(),
        dt.nanosecond() as f64 / 1e9,
    )
}

/// Convert a calendar date to its OLE Automation Date
///
/// Always a whole number of days.
///
/// ```
/// use sheetrow_core::{date_to_oa_date, NaiveDate};
///
/// assert_eq!(date_to_oa_date(NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()), 0.0);
/// assert_eq!(date_to_oa_date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 25569.0);
/// ```
pub fn date_to_oa_date(date: NaiveDate) -> f64 {
    (julian_day(date) - OA_EPOCH_JULIAN_DAY) as f64
}

/// Convert a naive date-time to its OLE Automation Date through [`decompose`]
pub fn naive_datetime_to_oa_date(dt: &NaiveDateTime) -> f64 {
    let (jd, seconds, sub_second) = decompose(dt);
    (jd - OA_EPOCH_JULIAN_DAY) as f64 + (seconds as f64 + sub_second) / SECONDS_PER_DAY
}

/// Convert a date-time with offset to its OLE Automation Date (calendar path)
pub fn datetime_to_oa_date(dt: &DateTime<FixedOffset>) -> f64 {
    naive_datetime_to_oa_date(&dt.naive_local())
}

/// Convert a timestamp with offset to its OLE Automation Date (Unix seconds path)
///
/// The wall-clock reading is treated as if it were UTC before counting
/// seconds since the Unix epoch.
pub fn timestamp_to_oa_date(dt: &DateTime<FixedOffset>) -> f64 {
    let wall_clock = dt.naive_local().and_utc();
    let seconds =
        wall_clock.timestamp() as f64 + wall_clock.timestamp_subsec_nanos() as f64 / 1e9;
    seconds / SECONDS_PER_DAY + UNIX_EPOCH_OA_DAY
}
