//! Typical-time interpretation.
//!
//! A typical time is either a span such as "10am-12pm" or free text without
//! an am/pm marker, which means the activity runs all day.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use super::date_window::RANGE_SEPARATORS;
use super::ParseError;

static MERIDIEM_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\d\s*[ap]\.?m\b").unwrap());

static HOUR_WITH_MERIDIEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*([ap])\.?m\.?$").unwrap());

/// Whether `typical_time` names a clock time with am/pm.
pub fn has_meridiem(typical_time: &str) -> bool {
    MERIDIEM_MARKER.is_match(typical_time)
}

/// Start of the span, converted to the 24-hour clock. The end of the span is
/// ignored.
pub fn start_time(typical_time: &str) -> Result<NaiveTime, ParseError> {
    let start = typical_time.split(RANGE_SEPARATORS).next().unwrap_or_default().trim();

    let caps = HOUR_WITH_MERIDIEM
        .captures(start)
        .ok_or_else(|| ParseError::InvalidTime(start.to_string()))?;

    let hour: u32 = caps[1].parse().map_err(|_| ParseError::InvalidTime(start.to_string()))?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| ParseError::InvalidTime(start.to_string()))?,
        None => 0,
    };
    let is_pm = caps[3].eq_ignore_ascii_case("p");

    if !(1..=12).contains(&hour) {
        return Err(ParseError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(ParseError::MinuteOutOfRange(minute));
    }

    let hour_24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour_24, minute, 0).ok_or_else(|| ParseError::InvalidTime(start.to_string()))
}
