//! Field interpreter for activity rows
//!
//! Turns the free-text `date_window`, `typical_time` and `cost_estimate`
//! columns into structured values. Every function here works on a single
//! record; a failure never affects other records.

pub mod cost;
pub mod date_window;
pub mod time_of_day;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;

pub use cost::{interpret_cost, CostEstimate};

/// Errors raised while interpreting the date or time of one record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("date window is empty")]
    EmptyDateWindow,
    #[error("'{0}' is not a day of the month")]
    InvalidDay(String),
    #[error("day {0} does not exist in the trip month")]
    DayOutOfRange(u32),
    #[error("window starts in month {0}, not the trip month")]
    OtherMonth(u32),
    #[error("'{0}' does not match the hour+am/pm pattern")]
    InvalidTime(String),
    #[error("hour {0} is outside 1-12")]
    HourOutOfRange(u32),
    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),
}

/// When an event happens, as far as the calendar is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    Timed { start: NaiveDateTime, duration: Duration },
    AllDay(NaiveDate),
}

impl EventTiming {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTiming::AllDay(_))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            EventTiming::Timed { start, .. } => start.date(),
            EventTiming::AllDay(date) => *date,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            EventTiming::Timed { duration, .. } => Some(*duration),
            EventTiming::AllDay(_) => None,
        }
    }
}

/// Interpret a record's date window and typical time.
///
/// Only the start of a range or list is kept. A typical time carrying an
/// am/pm marker yields a timed event of `duration`; anything else is all-day.
pub fn interpret_timing(
    date_window: &str,
    typical_time: &str,
    year: i32,
    month: u32,
    duration: Duration,
) -> Result<EventTiming, ParseError> {
    let date = date_window::start_date(date_window, year, month)?;

    if time_of_day::has_meridiem(typical_time) {
        let time = time_of_day::start_time(typical_time)?;
        debug!("'{}' / '{}' -> {} {}", date_window, typical_time, date, time);
        Ok(EventTiming::Timed { start: date.and_time(time), duration })
    } else {
        debug!("'{}' / '{}' -> all day {}", date_window, typical_time, date);
        Ok(EventTiming::AllDay(date))
    }
}
