use anyhow::Result;
use log::error;
use vacation_planner::{init_logger, run_calendar, Config};

/// Write the itinerary calendar from the activities table.
fn main() -> Result<()> {
    init_logger();

    let config = Config::load()?;
    let report = run_calendar(&config).inspect_err(|e| error!("{:#}", e))?;

    if report.failed > 0 {
        println!("{} activities could not be placed on the calendar.", report.failed);
    }
    println!("Calendar file created successfully.");
    Ok(())
}
