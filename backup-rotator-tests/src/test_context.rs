//! Test context and harness for rotation tests
//!
//! Owns a temporary directory holding a `backups/` folder and the dry-run report location.

use crate::fixtures;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BACKUP_DIR: &str = "backups";
const REPORT_FILE: &str = "dry_run_output.txt";

/// Test context that manages a temporary backup folder
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with an empty backup folder
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join(BACKUP_DIR))
            .expect("Failed to create backup folder");
        Self { temp_dir }
    }

    /// Get the temporary directory path
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Folder holding the backups
    pub fn backup_dir(&self) -> PathBuf {
        self.temp_dir.path().join(BACKUP_DIR)
    }

    /// Where dry-run reports are written
    pub fn report_path(&self) -> PathBuf {
        self.temp_dir.path().join(REPORT_FILE)
    }

    /// Create a backup for a date with `size` bytes of content, returning its filename
    pub fn create_backup(&self, date: NaiveDate, size: usize) -> String {
        let name = fixtures::backup_name(date);
        self.create_named_backup(&name, size);
        name
    }

    /// Create one backup per date, each `size` bytes
    pub fn create_backups(&self, dates: &[NaiveDate], size: usize) -> Vec<String> {
        dates.iter().map(|&d| self.create_backup(d, size)).collect()
    }

    /// Create a file in the backup folder with `size` bytes of content
    pub fn create_named_backup(&self, name: &str, size: usize) -> PathBuf {
        let path = self.backup_dir().join(name);
        std::fs::write(&path, vec![b'x'; size]).expect("Failed to write backup file");
        path
    }

    /// Create a file relative to the temp dir
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Check if a file exists in the backup folder
    pub fn backup_exists(&self, name: &str) -> bool {
        self.backup_dir().join(name).exists()
    }

    /// Names in the backup folder, sorted
    pub fn backup_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.backup_dir())
            .expect("Failed to list backup folder")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Remove a backup file
    pub fn remove_backup(&self, name: &str) {
        std::fs::remove_file(self.backup_dir().join(name)).expect("Failed to remove backup");
    }

    /// Read the dry-run report
    pub fn read_report(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.report_path())?)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait for assertion helpers
pub trait ResultAssertions<T> {
    /// Assert that the result is Ok and return the value
    fn assert_ok(self) -> T;

    /// Assert that the result is Err and the error message contains the given string
    fn assert_err_contains(self, needle: &str);
}

impl<T: std::fmt::Debug, E: std::fmt::Debug> ResultAssertions<T> for std::result::Result<T, E> {
    fn assert_ok(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    }

    fn assert_err_contains(self, needle: &str) {
        match self {
            Ok(v) => panic!("Expected Err containing '{}', got Ok: {:?}", needle, v),
            Err(e) => {
                let err_msg = format!("{:?}", e);
                assert!(
                    err_msg.contains(needle),
                    "Error '{}' does not contain '{}'",
                    err_msg,
                    needle
                );
            }
        }
    }
}
