use crate::activity::ActivityRecord;
use crate::config::{PartyConfig, TRIP_DAYS, TRIP_MONTH, TRIP_START_DAY, TRIP_YEAR};
use crate::parser::interpret_cost;
use chrono::{Duration, NaiveDate};
use log::debug;

mod budget_workbook;

pub use budget_workbook::*;

pub const ACTIVITIES_SHEET: &str = "activities";
pub const DAILY_SHEET: &str = "daily";
pub const SUMMARY_SHEET: &str = "summary";

pub const ACTIVITIES_HEADER: [&str; 4] = ["name", "est_cost", "count", "notes"];
pub const DAILY_HEADER: [&str; 4] = ["date", "subtotal_activities", "meals", "misc"];
pub const SUMMARY_HEADER: [&str; 2] = ["category", "total"];

/// Last worksheet row summed for activity costs.
const ACTIVITIES_SUM_LAST_ROW: u32 = 100;

/// Cost of one budget-relevant activity. `amount` is `None` when the estimate
/// names a currency but no readable number.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCost {
    pub name: String,
    pub amount: Option<f64>,
}

/// A row of the editable activity cost list
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetActivity {
    pub name: String,
    pub est_cost: Option<f64>,
    pub count: u32,
    pub notes: String,
}

impl From<ParsedCost> for BudgetActivity {
    fn from(cost: ParsedCost) -> Self {
        Self { name: cost.name, est_cost: cost.amount, count: 1, notes: String::new() }
    }
}

/// A placeholder row of the per-day table
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub subtotal_activities: f64,
    pub meals: f64,
    pub misc: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub category: String,
    pub formula: String,
}

/// The three tables of the budget tracker
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetBook {
    pub activities: Vec<BudgetActivity>,
    pub daily: Vec<DailyRow>,
    pub summary: Vec<SummaryLine>,
}

/// Collect the costs of every record carrying a currency marker, in input order.
pub fn collect_costs(records: &[ActivityRecord]) -> Vec<ParsedCost> {
    records
        .iter()
        .filter_map(|record| {
            let cost = interpret_cost(record.cost_estimate());
            if !cost.is_budgeted() {
                debug!("'{}' has no budgeted cost ('{}')", record.name, record.cost_estimate());
                return None;
            }
            Some(ParsedCost { name: record.name.clone(), amount: cost.amount() })
        })
        .collect()
}

/// Zeroed rows for each day of the trip.
pub fn daily_skeleton() -> Vec<DailyRow> {
    let Some(start) = NaiveDate::from_ymd_opt(TRIP_YEAR, TRIP_MONTH, TRIP_START_DAY) else {
        return Vec::new();
    };

    (0..TRIP_DAYS)
        .map(|offset| DailyRow {
            date: start + Duration::days(i64::from(offset)),
            subtotal_activities: 0.0,
            meals: 0.0,
            misc: 0.0,
        })
        .collect()
}

/// Totals over the other two sheets, split per adult and per kid.
///
/// Rows are numbered the way the worksheet numbers them: header on row 1,
/// data from row 2, so the grand total lands in `B5`.
pub fn summary_lines(daily_rows: usize, party: &PartyConfig) -> Vec<SummaryLine> {
    let last_daily = daily_rows + 1;
    let line = |category: String, formula: String| SummaryLine { category, formula };

    vec![
        line(
            "Total Activities".to_string(),
            format!("=SUM({}!B2:B{})", ACTIVITIES_SHEET, ACTIVITIES_SUM_LAST_ROW),
        ),
        line("Total Meals".to_string(), format!("=SUM({}!C2:C{})", DAILY_SHEET, last_daily)),
        line("Total Misc".to_string(), format!("=SUM({}!D2:D{})", DAILY_SHEET, last_daily)),
        line("Grand Total".to_string(), "=SUM(B2:B4)".to_string()),
        line(format!("Per Adult ({})", party.adults), format!("=B5/{}", party.adults)),
        line(format!("Per Kid ({})", party.kids), format!("=B5/{}", party.kids)),
    ]
}

pub fn build_budget(records: &[ActivityRecord], party: &PartyConfig) -> BudgetBook {
    let activities: Vec<BudgetActivity> =
        collect_costs(records).into_iter().map(BudgetActivity::from).collect();
    let daily = daily_skeleton();
    let summary = summary_lines(daily.len(), party);

    BudgetBook { activities, daily, summary }
}
