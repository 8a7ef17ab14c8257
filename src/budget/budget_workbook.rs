//! XLSX output for the budget tracker.

use super::{
    BudgetActivity, BudgetBook, DailyRow, SummaryLine, ACTIVITIES_HEADER, ACTIVITIES_SHEET,
    DAILY_HEADER, DAILY_SHEET, SUMMARY_HEADER, SUMMARY_SHEET,
};
use anyhow::{Context, Result};
use log::info;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::Path;

fn write_header(sheet: &mut Worksheet, header: &[&str]) -> Result<(), XlsxError> {
    for (col, title) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }
    Ok(())
}

fn activities_sheet(rows: &[BudgetActivity]) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(ACTIVITIES_SHEET)?;
    write_header(&mut sheet, &ACTIVITIES_HEADER)?;

    for (i, activity) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, activity.name.as_str())?;
        // An unreadable amount stays a blank cell so the total still sums.
        if let Some(cost) = activity.est_cost {
            sheet.write_number(row, 1, cost)?;
        }
        sheet.write_number(row, 2, activity.count)?;
        sheet.write_string(row, 3, activity.notes.as_str())?;
    }

    Ok(sheet)
}

fn daily_sheet(rows: &[DailyRow]) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(DAILY_SHEET)?;
    write_header(&mut sheet, &DAILY_HEADER)?;

    for (i, day) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, day.date.format("%Y-%m-%d").to_string())?;
        sheet.write_number(row, 1, day.subtotal_activities)?;
        sheet.write_number(row, 2, day.meals)?;
        sheet.write_number(row, 3, day.misc)?;
    }

    Ok(sheet)
}

fn summary_sheet(lines: &[SummaryLine]) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;
    write_header(&mut sheet, &SUMMARY_HEADER)?;

    for (i, line) in lines.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, line.category.as_str())?;
        sheet.write_formula(row, 1, line.formula.as_str())?;
    }

    Ok(sheet)
}

/// Lay the three tables out as worksheets, in the order activities, daily,
/// summary.
pub fn to_workbook(book: &BudgetBook) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(activities_sheet(&book.activities)?);
    workbook.push_worksheet(daily_sheet(&book.daily)?);
    workbook.push_worksheet(summary_sheet(&book.summary)?);
    Ok(workbook)
}

/// Write the budget tracker to `path`, creating parent directories as needed.
pub fn write_budget(path: &Path, book: &BudgetBook) -> Result<()> {
    let mut workbook = to_workbook(book).context("Failed to lay out budget workbook")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write budget file {}", path.display()))?;

    info!("Wrote {} budget activities to {}", book.activities.len(), path.display());
    Ok(())
}
