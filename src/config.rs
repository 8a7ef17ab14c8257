use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Year every activity date is resolved against.
pub const TRIP_YEAR: i32 = 2025;
/// Month every activity date is resolved against.
pub const TRIP_MONTH: u32 = 8;
/// First day of the trip, used for the daily budget skeleton.
pub const TRIP_START_DAY: u32 = 17;
/// Number of rows in the daily budget skeleton.
pub const TRIP_DAYS: u32 = 7;

/// Config file looked up in the working directory before the per-user one.
pub const LOCAL_CONFIG_FILE: &str = "vacation.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub party: PartyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub calendar: PathBuf,
    pub budget: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Length of every timed event; the end of the typical time range is ignored.
    pub default_duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyConfig {
    pub adults: u32,
    pub kids: u32,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/activities.csv"),
            calendar: PathBuf::from("calendar/itinerary.ics"),
            budget: PathBuf::from("budget/budget.xlsx"),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { default_duration_minutes: 120 }
    }
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self { adults: 6, kids: 3 }
    }
}

impl Config {
    /// Load `vacation.toml` from the working directory, then the per-user
    /// config file, falling back to the built-in defaults.
    pub fn load() -> Result<Self> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user) = get_config_path().filter(|p| p.exists()) {
            return Self::load_from(&user);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "vacation-planner", "vacation-planner")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
