pub mod activity;
pub mod budget;
pub mod calendar;
pub mod config;
pub mod parser;

use anyhow::Result;
use chrono::Duration;
use log::*;
use std::io::Write;

/// Counts reported after the calendar pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarReport {
    pub events: usize,
    pub outside_month: usize,
    pub failed: usize,
}

/// Counts reported after the budget pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetReport {
    pub activities: usize,
    pub unpriced: usize,
}

/// Load the activities, build one event per parseable record and write the
/// itinerary. A missing input file fails before any output is touched.
pub fn run_calendar(config: &Config) -> Result<CalendarReport> {
    info!("Building itinerary from {}", config.paths.input.display());
    let records = activity::load_activities(&config.paths.input)?;

    let duration = Duration::minutes(i64::from(config.calendar.default_duration_minutes));
    let itinerary = calendar::build_events(&records, duration);
    calendar::write_calendar(&config.paths.calendar, &itinerary.events)?;

    let failed = itinerary.failures().count();
    let report = CalendarReport {
        events: itinerary.events.len(),
        outside_month: itinerary.skipped.len() - failed,
        failed,
    };
    info!(
        "Itinerary: {} events, {} outside the trip month, {} unparseable",
        report.events, report.outside_month, report.failed
    );
    Ok(report)
}

/// Load the activities and write the budget tracker workbook. A missing input
/// file fails before any output is touched.
pub fn run_budget(config: &Config) -> Result<BudgetReport> {
    info!("Building budget tracker from {}", config.paths.input.display());
    let records = activity::load_activities(&config.paths.input)?;

    let book = budget::build_budget(&records, &config.party);
    budget::write_budget(&config.paths.budget, &book)?;

    let report = BudgetReport {
        activities: book.activities.len(),
        unpriced: book.activities.iter().filter(|a| a.est_cost.is_none()).count(),
    };
    info!("Budget: {} activities, {} without an amount", report.activities, report.unpriced);
    Ok(report)
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use activity::{ActivityRecord, LoadError};
pub use calendar::ParsedEvent;
pub use budget::ParsedCost;
pub use config::Config;
pub use parser::{EventTiming, ParseError};
