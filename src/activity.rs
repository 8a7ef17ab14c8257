//! Loading of the activities table.
//!
//! One `ActivityRecord` per CSV row. Rows are read once per run and never
//! mutated afterwards.

use log::{debug, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["name", "address", "date_window", "typical_time", "cost_estimate"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{} not found.", .0.display())]
    MissingInput(PathBuf),
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Failed to read activities table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to open activities table: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivityRecord {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_window: Option<String>,
    #[serde(default)]
    pub typical_time: Option<String>,
    #[serde(default)]
    pub cost_estimate: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub booking_url: Option<String>,
    #[serde(default)]
    pub kid_friendly: Option<String>,
    #[serde(default)]
    pub rain_safe: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ActivityRecord {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    pub fn date_window(&self) -> &str {
        self.date_window.as_deref().unwrap_or("")
    }

    pub fn typical_time(&self) -> &str {
        self.typical_time.as_deref().unwrap_or("")
    }

    pub fn cost_estimate(&self) -> &str {
        self.cost_estimate.as_deref().unwrap_or("")
    }
}

/// Load every activity from the CSV file at `path`.
///
/// A missing file or header is fatal. A single undecodable row is logged and
/// skipped so the remaining rows still load.
pub fn load_activities(path: &Path) -> Result<Vec<ActivityRecord>, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::MissingInput(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let records = read_activities(file)?;
    debug!("Loaded {} activities from {}", records.len(), path.display());
    Ok(records)
}

/// Read activities from any CSV source with a header row.
pub fn read_activities<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<ActivityRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            // Header is line 1, so data row `index` sits on line index + 2.
            Err(e) => warn!("Skipping activities row {}: {}", index + 2, e),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "name,category,date_window,typical_time,address,cost_estimate\n";

    #[test]
    fn test_reads_rows_with_empty_fields_as_none() {
        let csv = format!(
            "{HEADER}Beach Day,beach,Aug 18,10am-12pm,Beach Ave,$20\nMuseum,culture,20-22,,,\n"
        );
        let records = read_activities(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Beach Day");
        assert_eq!(records[0].address.as_deref(), Some("Beach Ave"));
        assert_eq!(records[0].cost_estimate(), "$20");
        assert_eq!(records[0].category.as_deref(), Some("beach"));
        assert_eq!(records[1].typical_time, None);
        assert_eq!(records[1].typical_time(), "");
        assert_eq!(records[1].cost_estimate, None);
        assert_eq!(records[1].phone, None);
    }

    #[test]
    fn test_quoted_lists_stay_in_one_field() {
        let csv = format!("{HEADER}Fireworks,show,\"Aug 17, 19, 21\",9pm-10pm,\"Boardwalk, Cape May\",Free\n");
        let records = read_activities(csv.as_bytes()).unwrap();

        assert_eq!(records[0].date_window(), "Aug 17, 19, 21");
        assert_eq!(records[0].address.as_deref(), Some("Boardwalk, Cape May"));
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let csv = "name,address,date_window\nBeach Day,Beach Ave,Aug 18\n";
        match read_activities(csv.as_bytes()) {
            Err(LoadError::MissingColumns(columns)) => {
                assert_eq!(columns, vec!["typical_time", "cost_estimate"]);
            }
            other => panic!("Expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_skipped_not_fatal() {
        let csv = format!("{HEADER}Broken\nLighthouse,tour,Aug 19,9am-11am,Lighthouse Rd,$12\n");
        let records = read_activities(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Lighthouse");
    }

    #[test]
    fn test_missing_file_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.csv");

        let err = load_activities(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingInput(ref p) if p == &path));
        assert!(err.to_string().ends_with("activities.csv not found."));
    }
}
