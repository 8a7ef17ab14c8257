use anyhow::Result;
use log::{error, info};
use vacation_planner::{init_logger, run_budget, run_calendar, Config};

fn main() -> Result<()> {
    init_logger();
    info!("Starting vacation planner");

    let config = Config::load()?;

    run_calendar(&config).inspect_err(|e| error!("{:#}", e))?;
    println!("Calendar file created successfully.");

    run_budget(&config).inspect_err(|e| error!("{:#}", e))?;
    println!("Budget tracker created successfully.");

    Ok(())
}
