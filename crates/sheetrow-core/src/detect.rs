//! Auto-format detection
//!
//! Promotes loosely-typed text (typically read from CSV or another text
//! source) to a boolean, number, date or date-time. Rules are tried in
//! order and the first match wins:
//!
//! 1. `true` / `false`
//! 2. `-?digits(.digits)?` (float when a decimal point is present)
//! 3. `YYYY-MM-DD`
//! 4. `YYYY-MM-DDTHH:MM[:SS[.fffffffff]][Z|+HH:MM|-HH:MM]`
//!
//! Every pattern must match the whole string. A string that looks like a date
//! but is not a real calendar value (e.g. `2024-02-30`) stays text.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::cell::CellValue;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]{1,9})?)?(?P<offset>Z|[+-][0-9]{2}:[0-9]{2})?$",
    )
    .unwrap()
});

/// Detect the value a text cell should be written as
///
/// Returns `None` when the text should stay text.
pub fn detect(text: &str) -> Option<CellValue> {
    match text {
        "true" => return Some(CellValue::Boolean(true)),
        "false" => return Some(CellValue::Boolean(false)),
        _ => {}
    }

    if NUMBER.is_match(text) {
        return parse_number(text);
    }

    if DATE.is_match(text) {
        return match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Some(CellValue::Date(date)),
            Err(e) => {
                log::debug!("'{}' looks like a date but is not one: {}", text, e);
                None
            }
        };
    }

    if let Some(caps) = TIMESTAMP.captures(text) {
        let (body, offset) = match caps.name("offset") {
            Some(m) => (&text[..m.start()], m.as_str()),
            None => (text, "Z"),
        };
        let parsed = parse_timestamp(body, offset);
        if parsed.is_none() {
            log::debug!("'{}' looks like a timestamp but is not one", text);
        }
        return parsed.map(CellValue::DateTime);
    }

    None
}

fn parse_number(text: &str) -> Option<CellValue> {
    if text.contains('.') {
        // The pattern has no exponent, so only absurdly long digit runs overflow
        return text
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(CellValue::Float);
    }

    match text.parse::<i64>() {
        Ok(n) => Some(CellValue::Integer(n)),
        // Too wide for i64: exact if it fits a decimal, approximate otherwise
        Err(_) => match Decimal::from_str(text) {
            Ok(d) => Some(CellValue::Decimal(d)),
            Err(_) => text
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(CellValue::Float),
        },
    }
}

fn parse_timestamp(body: &str, offset: &str) -> Option<DateTime<FixedOffset>> {
    // `%.f` also accepts a missing fractional part
    let naive = NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M"))
        .ok()?;

    parse_offset(offset)?.from_local_datetime(&naive).single()
}

/// Parse `Z`, `+HH:MM` or `-HH:MM`
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    if offset == "Z" {
        return FixedOffset::east_opt(0);
    }

    let sign = match offset.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i32 = offset.get(1..3)?.parse().ok()?;
    let minutes: i32 = offset.get(4..6)?.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
