//! iCalendar output for the itinerary.
//!
//! Timed events carry a floating local DTSTART and a DURATION; all-day events
//! carry a DATE-valued DTSTART.

use super::ParsedEvent;
use crate::parser::EventTiming;
use anyhow::{Context, Result};
use chrono::Duration;
use icalendar::{Calendar, Component, Event, EventLike};
use log::info;
use std::fs;
use std::path::Path;

/// Format a duration as an ISO-8601 duration value.
pub fn format_iso_duration(duration: Duration) -> String {
    let mins = duration.num_minutes();
    if mins > 0 && mins % (24 * 60) == 0 {
        format!("P{}D", mins / (24 * 60))
    } else if mins % 60 == 0 {
        format!("PT{}H", mins / 60)
    } else if mins > 60 {
        format!("PT{}H{}M", mins / 60, mins % 60)
    } else {
        format!("PT{}M", mins)
    }
}

pub fn to_ical_event(parsed: &ParsedEvent) -> Event {
    let mut event = Event::new();
    event.summary(&parsed.title);

    if let Some(location) = &parsed.location {
        event.location(location);
    }
    if let Some(description) = &parsed.description {
        event.description(description);
    }
    if let Some(url) = &parsed.url {
        event.add_property("URL", url);
    }

    match parsed.timing {
        EventTiming::Timed { start, duration } => {
            event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
            event.add_property("DURATION", format_iso_duration(duration));
        }
        EventTiming::AllDay(date) => {
            event.all_day(date);
        }
    }

    event.done()
}

/// Render all events as one VCALENDAR document.
pub fn render_ics(events: &[ParsedEvent]) -> String {
    let mut calendar = Calendar::new();
    for parsed in events {
        calendar.push(to_ical_event(parsed));
    }
    calendar.done().to_string()
}

/// Write the itinerary to `path`, creating parent directories as needed.
pub fn write_calendar(path: &Path, events: &[ParsedEvent]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, render_ics(events))
        .with_context(|| format!("Failed to write calendar file {}", path.display()))?;

    info!("Wrote {} events to {}", events.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn aug(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, day).unwrap()
    }

    #[test_case(120, "PT2H" ; "two hours")]
    #[test_case(45, "PT45M" ; "minutes")]
    #[test_case(90, "PT1H30M" ; "hours and minutes")]
    #[test_case(1440, "P1D" ; "one day")]
    fn test_format_iso_duration(minutes: i64, expected: &str) {
        assert_eq!(format_iso_duration(Duration::minutes(minutes)), expected);
    }

    #[test]
    fn test_render_timed_and_all_day_events() {
        let events = vec![
            ParsedEvent {
                title: "Beach Day".to_string(),
                location: Some("Beach Ave".to_string()),
                description: None,
                url: None,
                timing: EventTiming::Timed {
                    start: aug(18).and_hms_opt(10, 0, 0).unwrap(),
                    duration: Duration::hours(2),
                },
            },
            ParsedEvent {
                title: "Museum".to_string(),
                location: None,
                description: None,
                url: Some("https://example.com/museum".to_string()),
                timing: EventTiming::AllDay(aug(20)),
            },
        ];

        let ics = render_ics(&events);

        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.contains("SUMMARY:Beach Day"));
        assert!(ics.contains("LOCATION:Beach Ave"));
        assert!(ics.contains("DTSTART:20250818T100000"));
        assert!(ics.contains("DURATION:PT2H"));
        assert!(ics.contains("SUMMARY:Museum"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20250820"));
        assert!(ics.contains("URL:https://example.com/museum"));
        assert_eq!(ics.matches("DURATION").count(), 1);
    }

    #[test]
    fn test_render_empty_calendar() {
        let ics = render_ics(&[]);
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_write_creates_parent_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("calendar").join("itinerary.ics");

        write_calendar(&path, &[])?;

        assert!(fs::read_to_string(&path)?.contains("BEGIN:VCALENDAR"));
        Ok(())
    }
}
