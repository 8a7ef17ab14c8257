//! Date window interpretation.
//!
//! A date window is one of three shapes, tested in this order: a list
//! ("17, 19, 21"), a range ("17-19") or a single day ("17"). Only the first
//! member matters. Month names may sit before or after the day, with or
//! without a space ("Aug 18", "18Aug"), and are removed before the day is read.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Match, Regex};

use super::ParseError;

pub const LIST_SEPARATOR: char = ',';
pub const RANGE_SEPARATORS: [char; 2] = ['-', '–'];

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Maximal runs of letters, so "Aug18" yields "Aug" and "Mayor" stays whole.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+\.?").unwrap());

/// Month number for a name or an abbreviation of at least three letters.
fn month_number(word: &str) -> Option<u32> {
    let word = word.trim_end_matches('.').to_ascii_lowercase();
    if word.len() < 3 {
        return None;
    }
    MONTHS.iter().position(|m| m.starts_with(&word)).map(|i| i as u32 + 1)
}

fn month_matches(text: &str) -> impl Iterator<Item = (Match<'_>, u32)> + '_ {
    WORD.find_iter(text).filter_map(|m| month_number(m.as_str()).map(|n| (m, n)))
}

/// Month numbers (1-12) named in `window`, in order of appearance.
pub fn mentioned_months(window: &str) -> Vec<u32> {
    month_matches(window).map(|(_, n)| n).collect()
}

/// Remove month names, leaving the day expression.
pub fn strip_months(window: &str) -> String {
    let mut days = String::with_capacity(window.len());
    let mut last = 0;
    for (m, _) in month_matches(window) {
        days.push_str(&window[last..m.start()]);
        last = m.end();
    }
    days.push_str(&window[last..]);
    days
}

/// The list head, the range start, or the whole window.
fn start_segment(window: &str) -> &str {
    let head = if window.contains(LIST_SEPARATOR) {
        window.split(LIST_SEPARATOR).next()
    } else if window.contains(RANGE_SEPARATORS) {
        window.split(RANGE_SEPARATORS).next()
    } else {
        Some(window)
    };
    head.unwrap_or_default()
}

/// The month the window starts in, if it names one.
///
/// A month in the start segment wins ("Jul 31 - Aug 2" starts in July).
/// Otherwise a trailing month applies to the whole window ("17-19 Aug").
pub fn start_month(window: &str) -> Option<u32> {
    month_matches(start_segment(window))
        .map(|(_, n)| n)
        .next()
        .or_else(|| month_matches(window).map(|(_, n)| n).next())
}

/// Whether the window starts in `month`.
///
/// Bare day numbers count as the trip month. An empty window has no date to
/// place.
pub fn references_month(window: &str, month: u32) -> bool {
    if window.trim().is_empty() {
        return false;
    }
    start_month(window).map_or(true, |m| m == month)
}

/// The first day named by the window. Ends of ranges and later list members
/// are dropped.
pub fn start_day(window: &str) -> Result<u32, ParseError> {
    if window.trim().is_empty() {
        return Err(ParseError::EmptyDateWindow);
    }

    let day = strip_months(start_segment(window));
    let day = day.trim();
    day.parse::<u32>().map_err(|_| ParseError::InvalidDay(day.to_string()))
}

/// The first date named by the window, in the given year and month. A window
/// starting in another month is rejected rather than moved into `month`.
pub fn start_date(window: &str, year: i32, month: u32) -> Result<NaiveDate, ParseError> {
    if let Some(named) = start_month(window).filter(|m| *m != month) {
        return Err(ParseError::OtherMonth(named));
    }
    let day = start_day(window)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::DayOutOfRange(day))
}
