use anyhow::Result;
use log::error;
use vacation_planner::{init_logger, run_budget, Config};

/// Write the budget tracker workbook from the activities table.
fn main() -> Result<()> {
    init_logger();

    let config = Config::load()?;
    run_budget(&config).inspect_err(|e| error!("{:#}", e))?;

    println!("Budget tracker created successfully.");
    Ok(())
}
