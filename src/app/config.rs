// Configuration module for the leaderboard report

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::cli::Cli;
use crate::core::constants::DEFAULT_UTC_OFFSET_HOURS;
use crate::core::{DayRange, DayRangeError, ReportOptions};

// =============================================================================
// CONFIGURATION STRUCTURES
// =============================================================================

/// Event calendar settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSettings {
    /// Event year, substituted into the snapshot mask
    #[serde(default = "default_year")]
    pub year: i32,

    /// Fixed offset of the event's time zone in hours
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Inclusive day range, "first..last" or a single day
    #[serde(default = "default_days")]
    pub days: String,
}

fn default_year() -> i32 {
    2024
}
fn default_utc_offset_hours() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}
fn default_days() -> String {
    DayRange::full().to_string()
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            year: default_year(),
            utc_offset_hours: default_utc_offset_hours(),
            days: default_days(),
        }
    }
}

/// Where snapshot files are found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSettings {
    /// File mask; `{year}` is replaced, the single `*` captures the snapshot id
    #[serde(default = "default_mask")]
    pub mask: String,

    /// Snapshot ids to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_mask() -> String {
    "json/{year}/*.json".to_string()
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            mask: default_mask(),
            exclude: Vec::new(),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Emphasize fields with terminal escape sequences
    #[serde(default = "default_color")]
    pub color: bool,

    /// Report file path. Empty = stdout.
    #[serde(default)]
    pub file: String,
}

fn default_color() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: default_color(),
            file: String::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingSettings {
    /// Write logs to stderr
    #[serde(default)]
    pub console: bool,
    /// Log file path. Empty = no file logging.
    #[serde(default)]
    pub log_file: String,
    /// Log this crate at debug level
    #[serde(default)]
    pub verbose: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub event: EventSettings,
    #[serde(default)]
    pub snapshots: SnapshotSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, toml::de::Error),
    InvalidDays(DayRangeError),
    InvalidOffset(i32),
    InvalidMask(String),
    UnknownExclusion(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file {}: {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file {}: {}", path.display(), e)
            }
            ConfigError::InvalidDays(e) => write!(f, "Invalid days: {}", e),
            ConfigError::InvalidOffset(hours) => {
                write!(f, "UTC offset {} is outside -12..=14 hours", hours)
            }
            ConfigError::InvalidMask(mask) => write!(
                f,
                "Snapshot mask {:?} must have exactly one '*' in its file name",
                mask
            ),
            ConfigError::UnknownExclusion(ids) => {
                write!(f, "Excluded snapshot ids not found: {}", ids.join(", "))
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<DayRangeError> for ConfigError {
    fn from(e: DayRangeError) -> Self {
        ConfigError::InvalidDays(e)
    }
}

// =============================================================================
// CONFIG LOADING
// =============================================================================

impl Config {
    pub const CONFIG_FILENAME: &'static str = "leaderboard_report.toml";

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `leaderboard_report.toml`
    /// in the working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(Self::CONFIG_FILENAME), false),
        };

        if !required && !config_path.exists() {
            debug!("[config] No config file found, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(config_path.clone(), e))?;
        let config = Self::from_toml(&contents, &config_path)?;
        info!(path = %config_path.display(), "[config] Loaded config");
        Ok(config)
    }

    /// Apply command-line overrides on top of the file settings
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(year) = cli.year {
            self.event.year = year;
        }
        if let Some(days) = &cli.days {
            self.event.days = days.clone();
        }
        if let Some(mask) = &cli.mask {
            self.snapshots.mask = mask.clone();
        }
        self.snapshots.exclude.extend(cli.exclude.iter().cloned());
        if let Some(output) = &cli.output {
            self.output.file = output.display().to_string();
        }
        if cli.no_color {
            self.output.color = false;
        }
        if cli.verbose {
            self.logging.console = true;
            self.logging.verbose = true;
        }
    }

    /// Validated options for the report pipeline
    pub fn report_options(&self) -> Result<ReportOptions, ConfigError> {
        let days: DayRange = self.event.days.parse()?;
        let offset = self.event.utc_offset_hours;
        if !(-12..=14).contains(&offset) {
            return Err(ConfigError::InvalidOffset(offset));
        }
        Ok(ReportOptions {
            days,
            year: self.event.year,
            utc_offset_hours: offset,
            // Escape sequences only make sense on a terminal
            color: self.output.color && self.output_path().is_none(),
        })
    }

    /// Snapshot mask with the event year filled in
    pub fn snapshot_mask(&self) -> String {
        self.snapshots
            .mask
            .replace("{year}", &self.event.year.to_string())
    }

    /// Report file, or `None` for stdout
    pub fn output_path(&self) -> Option<PathBuf> {
        (!self.output.file.is_empty()).then(|| PathBuf::from(&self.output.file))
    }

    /// Log file, or `None` when file logging is off
    pub fn log_file_path(&self) -> Option<PathBuf> {
        (!self.logging.log_file.is_empty()).then(|| PathBuf::from(&self.logging.log_file))
    }
}
