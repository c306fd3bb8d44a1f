//! Backup folder access abstraction for testability
//!
//! This module provides a trait-based abstraction over the filesystem calls rotation
//! needs (listing, size lookup, removal), enabling mocking for tests.

use crate::rotation::error::{Result, RotationError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstraction over a backup folder, enabling mocking in tests
pub trait BackupStore: Send + Sync {
    /// Names of the files in the folder (directories are skipped)
    fn list_file_names(&self) -> Result<Vec<String>>;

    /// Size of a file in bytes
    fn file_size(&self, filename: &str) -> Result<u64>;

    /// Remove a file
    fn remove_file(&self, filename: &str) -> Result<()>;
}

/// Backup store backed by a real directory
#[derive(Debug, Clone)]
pub struct RealBackupStore {
    folder: PathBuf,
}

impl RealBackupStore {
    pub fn new<P: Into<PathBuf>>(folder: P) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl BackupStore for RealBackupStore {
    fn list_file_names(&self) -> Result<Vec<String>> {
        let list_error = |source| RotationError::ListFolder {
            path: self.folder.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.folder).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!("Skipping non UTF-8 file name: {:?}", name),
            }
        }
        Ok(names)
    }

    fn file_size(&self, filename: &str) -> Result<u64> {
        fs::metadata(self.folder.join(filename))
            .map(|m| m.len())
            .map_err(|source| RotationError::FileSize {
                filename: filename.to_string(),
                source,
            })
    }

    fn remove_file(&self, filename: &str) -> Result<()> {
        fs::remove_file(self.folder.join(filename)).map_err(|source| RotationError::Delete {
            filename: filename.to_string(),
            source,
        })
    }
}

/// Mock implementation for testing
/// Available for use in external test crates
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashSet};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Recorded store call
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum StoreCall {
        List,
        Size { filename: String },
        Remove { filename: String },
    }

    /// In-memory backup folder
    #[derive(Clone, Default)]
    pub struct MockBackupStore {
        /// Files currently "on disk" (name -> size)
        pub files: Arc<Mutex<BTreeMap<String, u64>>>,
        /// Recorded calls
        pub calls: Arc<Mutex<Vec<StoreCall>>>,
        /// Whether listing should fail
        pub should_fail_list: Arc<Mutex<bool>>,
        /// Files whose size lookup should fail
        pub failing_size: Arc<Mutex<HashSet<String>>>,
        /// Files whose removal should fail
        pub failing_remove: Arc<Mutex<HashSet<String>>>,
    }

    impl MockBackupStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a file with the given size
        pub fn with_file(self, filename: &str, size: u64) -> Self {
            self.files.lock().unwrap().insert(filename.to_string(), size);
            self
        }

        /// Configure listing to fail
        pub fn with_failing_list(self) -> Self {
            *self.should_fail_list.lock().unwrap() = true;
            self
        }

        /// Configure size lookup of one file to fail
        pub fn with_failing_size(self, filename: &str) -> Self {
            self.failing_size.lock().unwrap().insert(filename.to_string());
            self
        }

        /// Configure removal of one file to fail
        pub fn with_failing_remove(self, filename: &str) -> Self {
            self.failing_remove.lock().unwrap().insert(filename.to_string());
            self
        }

        /// Names of the files still present, ascending
        pub fn file_names(&self) -> Vec<String> {
            self.files.lock().unwrap().keys().cloned().collect()
        }

        /// Get all recorded calls
        pub fn get_calls(&self) -> Vec<StoreCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Files removed so far, in call order
        pub fn removed(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter_map(|c| match c {
                    StoreCall::Remove { filename } => Some(filename.clone()),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: StoreCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl BackupStore for MockBackupStore {
        fn list_file_names(&self) -> Result<Vec<String>> {
            self.record(StoreCall::List);
            if *self.should_fail_list.lock().unwrap() {
                return Err(RotationError::ListFolder {
                    path: PathBuf::from("mock"),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "mock list failure"),
                });
            }
            Ok(self.file_names())
        }

        fn file_size(&self, filename: &str) -> Result<u64> {
            self.record(StoreCall::Size {
                filename: filename.to_string(),
            });
            let missing = || RotationError::FileSize {
                filename: filename.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock size failure"),
            };
            if self.failing_size.lock().unwrap().contains(filename) {
                return Err(missing());
            }
            self.files
                .lock()
                .unwrap()
                .get(filename)
                .copied()
                .ok_or_else(missing)
        }

        fn remove_file(&self, filename: &str) -> Result<()> {
            if self.failing_remove.lock().unwrap().contains(filename) {
                return Err(RotationError::Delete {
                    filename: filename.to_string(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "mock remove failure"),
                });
            }
            match self.files.lock().unwrap().remove(filename) {
                Some(_) => {
                    self.record(StoreCall::Remove {
                        filename: filename.to_string(),
                    });
                    Ok(())
                }
                None => Err(RotationError::Delete {
                    filename: filename.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "mock file missing"),
                }),
            }
        }
    }
}
