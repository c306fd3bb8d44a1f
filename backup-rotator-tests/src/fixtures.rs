//! Test fixtures and sample data
//!
//! Backup names, dates and histories shared by the test suites.

use backup_rotator::rotation::{BackupEntry, BackupSet};
use chrono::{Duration, NaiveDate};

/// Reference date used throughout the suites (a Saturday)
pub fn reference_today() -> NaiveDate {
    date(2024, 6, 15)
}

/// Build a calendar date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Standard backup filename for a date (`YYYYMMDD-030000-UTC-BACKUP.tar`)
pub fn backup_name(date: NaiveDate) -> String {
    backup_name_with(date, "030000", "tar")
}

/// Backup filename with a specific time and extension
pub fn backup_name_with(date: NaiveDate, time: &str, ext: &str) -> String {
    format!("{}-{}-UTC-BACKUP.{}", date.format("%Y%m%d"), time, ext)
}

/// Entry for a date with the standard filename
pub fn entry(date: NaiveDate) -> BackupEntry {
    BackupEntry::new(backup_name(date), date)
}

/// One backup per day for `days` days, ending at `end` (inclusive)
pub fn daily_history(end: NaiveDate, days: i64) -> Vec<NaiveDate> {
    (0..days).rev().map(|offset| end - Duration::days(offset)).collect()
}

/// Backup set with one standard backup per date
pub fn backup_set(dates: &[NaiveDate]) -> BackupSet {
    dates.iter().copied().map(entry).collect()
}

/// Names that must never be treated as backups
pub fn non_backup_names() -> Vec<&'static str> {
    vec![
        "notes.txt",
        "20240101-BACKUP.tar",
        "20240101-000000-BACKUP.tar",
        "20240101-000000-UTC-BACKUP",
        "backup-20240101-000000-UTC-BACKUP.tar",
        "20241332-000000-UTC-BACKUP.tar",
    ]
}
