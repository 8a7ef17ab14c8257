use crate::activity::ActivityRecord;
use crate::config::{TRIP_MONTH, TRIP_YEAR};
use crate::parser::{self, date_window, EventTiming, ParseError};
use chrono::Duration;
use log::{debug, warn};

mod calendar_ics;

pub use calendar_ics::*;

/// A calendar entry derived from exactly one activity record
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvent {
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub timing: EventTiming,
}

/// Why a record produced no event
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    OutsideTripMonth,
    Unparseable(ParseError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub name: String,
    pub reason: SkipReason,
}

/// Events built from a table, plus the records that were left out
#[derive(Debug, Default)]
pub struct Itinerary {
    pub events: Vec<ParsedEvent>,
    pub skipped: Vec<SkippedRecord>,
}

impl Itinerary {
    pub fn failures(&self) -> impl Iterator<Item = &SkippedRecord> {
        self.skipped.iter().filter(|s| matches!(s.reason, SkipReason::Unparseable(_)))
    }
}

/// Interpret one record. `Ok(None)` means the record is not in the trip month.
pub fn event_from_record(
    record: &ActivityRecord,
    duration: Duration,
) -> Result<Option<ParsedEvent>, ParseError> {
    if !date_window::references_month(record.date_window(), TRIP_MONTH) {
        return Ok(None);
    }

    let timing = parser::interpret_timing(
        record.date_window(),
        record.typical_time(),
        TRIP_YEAR,
        TRIP_MONTH,
        duration,
    )?;

    Ok(Some(ParsedEvent {
        title: record.name.clone(),
        location: non_empty(record.address.as_deref()),
        description: describe(record),
        url: non_empty(record.booking_url.as_deref()),
        timing,
    }))
}

/// Interpret every record independently. A record that fails to parse is
/// logged and left out; the rest still produce events.
pub fn build_events(records: &[ActivityRecord], duration: Duration) -> Itinerary {
    let mut itinerary = Itinerary::default();

    for record in records {
        match event_from_record(record, duration) {
            Ok(Some(event)) => itinerary.events.push(event),
            Ok(None) => {
                debug!("Skipping '{}': '{}' is outside the trip month", record.name, record.date_window());
                itinerary.skipped.push(SkippedRecord {
                    name: record.name.clone(),
                    reason: SkipReason::OutsideTripMonth,
                });
            }
            Err(e) => {
                warn!("Could not parse date for '{}': {}", record.name, e);
                itinerary.skipped.push(SkippedRecord {
                    name: record.name.clone(),
                    reason: SkipReason::Unparseable(e),
                });
            }
        }
    }

    itinerary
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn describe(record: &ActivityRecord) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(category) = non_empty(record.category.as_deref()) {
        lines.push(format!("Category: {}", category));
    }
    if let Some(notes) = non_empty(record.notes.as_deref()) {
        lines.push(notes);
    }
    if let Some(phone) = non_empty(record.phone.as_deref()) {
        lines.push(format!("Phone: {}", phone));
    }
    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(name: &str, window: &str, time: &str) -> ActivityRecord {
        ActivityRecord {
            date_window: Some(window.to_string()),
            typical_time: Some(time.to_string()),
            ..ActivityRecord::new(name)
        }
    }

    #[test]
    fn test_beach_day_is_timed() {
        let mut beach = record("Beach Day", "Aug 18", "10am-12pm");
        beach.address = Some("Beach Ave".to_string());
        beach.cost_estimate = Some("$20".to_string());

        let event = event_from_record(&beach, Duration::hours(2)).unwrap().unwrap();

        assert_eq!(event.title, "Beach Day");
        assert_eq!(event.location.as_deref(), Some("Beach Ave"));
        assert_eq!(
            event.timing,
            EventTiming::Timed {
                start: NaiveDate::from_ymd_opt(2025, 8, 18).unwrap().and_hms_opt(10, 0, 0).unwrap(),
                duration: Duration::hours(2),
            }
        );
    }

    #[test]
    fn test_museum_range_is_all_day() {
        let museum = record("Museum", "20-22", "");

        let event = event_from_record(&museum, Duration::hours(2)).unwrap().unwrap();

        assert_eq!(event.timing, EventTiming::AllDay(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()));
        assert_eq!(event.location, None);
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_other_month_is_not_an_event() {
        let later = record("Apple Picking", "Sep 6", "9am-11am");
        assert_eq!(event_from_record(&later, Duration::hours(2)), Ok(None));
    }

    #[test]
    fn test_window_starting_in_previous_month_is_skipped() {
        let records = vec![
            record("Regatta", "Jul 31 - Aug 2", "11am-1pm"),
            record("Kite Festival", "Aug18", ""),
        ];

        let itinerary = build_events(&records, Duration::hours(2));

        assert_eq!(itinerary.events.len(), 1);
        assert_eq!(itinerary.events[0].title, "Kite Festival");
        assert_eq!(itinerary.events[0].timing, EventTiming::AllDay(NaiveDate::from_ymd_opt(2025, 8, 18).unwrap()));
        assert_eq!(
            itinerary.skipped,
            vec![SkippedRecord { name: "Regatta".to_string(), reason: SkipReason::OutsideTripMonth }]
        );
    }

    #[test]
    fn test_description_and_url_come_from_extra_columns() {
        let mut tour = record("Trolley Tour", "Aug 19", "1pm-2pm");
        tour.category = Some("sightseeing".to_string());
        tour.notes = Some("Bring sunscreen".to_string());
        tour.phone = Some("609-555-0100".to_string());
        tour.booking_url = Some("https://example.com/trolley".to_string());
        tour.address = Some("  ".to_string());

        let event = event_from_record(&tour, Duration::hours(2)).unwrap().unwrap();

        assert_eq!(
            event.description.as_deref(),
            Some("Category: sightseeing\nBring sunscreen\nPhone: 609-555-0100")
        );
        assert_eq!(event.url.as_deref(), Some("https://example.com/trolley"));
        assert_eq!(event.location, None);
    }

    #[test]
    fn test_bad_record_does_not_stop_the_rest() {
        let records = vec![
            record("Kayaking", "Aug 17", "9am-11am"),
            record("Mystery", "Aug soon", "10am"),
            record("Fall Trip", "Oct 2", ""),
            record("Fireworks", "17, 19, 21", "9pm-10pm"),
        ];

        let itinerary = build_events(&records, Duration::hours(2));

        let titles: Vec<&str> = itinerary.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Kayaking", "Fireworks"]);
        assert_eq!(itinerary.skipped.len(), 2);

        let failures: Vec<&SkippedRecord> = itinerary.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "Mystery");
        assert_eq!(
            failures[0].reason,
            SkipReason::Unparseable(ParseError::InvalidDay("soon".to_string()))
        );
    }
}
