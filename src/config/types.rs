use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use crate::managers::logging::LoggingConfig;

/// Retention policy applied to a backup folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetentionPolicy {
    /// Keep every backup from the most recent N calendar days (today included)
    pub daily_count: u32,

    /// Keep backups on `weekly_weekday` within the trailing `7 * weekly_count` days
    pub weekly_count: u32,

    /// Weekday for weekly backups (0 = Monday ... 6 = Sunday)
    pub weekly_weekday: u32,

    /// Accepted for compatibility; month-end backups are kept regardless of age
    pub monthly_count: u32,

    /// Keep Dec 31 backups of completed years
    pub yearly_enabled: bool,

    /// Report instead of deleting
    pub dry_run: bool,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            daily_count: default_daily_count(),
            weekly_count: default_weekly_count(),
            weekly_weekday: default_weekly_weekday(),
            monthly_count: default_monthly_count(),
            yearly_enabled: false,
            dry_run: false,
        }
    }
}

/// Fully validated settings for a single rotation run
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Folder holding the backup files
    pub backup_folder: PathBuf,

    pub policy: RetentionPolicy,

    /// Where the dry-run report is written
    pub report_path: PathBuf,

    /// Reference date for age calculations
    pub today: NaiveDate,

    /// File logging, if requested
    pub logging: Option<LoggingConfig>,
}

// Default value functions

pub fn default_daily_count() -> u32 { 7 }
pub fn default_weekly_count() -> u32 { 4 }
pub fn default_weekly_weekday() -> u32 { 5 }
pub fn default_monthly_count() -> u32 { 12 }
pub fn default_report_path() -> PathBuf { PathBuf::from("dry_run_output.txt") }
