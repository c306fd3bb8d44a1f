//! Backup entries parsed from folder listings

use chrono::NaiveDate;
use regex::Regex;
use std::collections::btree_map::{BTreeMap, Values};
use std::sync::OnceLock;
use tracing::debug;

/// `<YYYYMMDD>-<HHMMSS>-UTC-BACKUP.<ext>`
const BACKUP_NAME_PATTERN: &str = r"^(\d{8})-\d{6}-UTC-BACKUP\.\w+$";

fn backup_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(BACKUP_NAME_PATTERN).expect("backup name pattern is valid"))
}

/// A backup file and the calendar date embedded in its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    filename: String,
    date: NaiveDate,
}

impl BackupEntry {
    pub fn new(filename: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            filename: filename.into(),
            date,
        }
    }

    /// Parse a filename into an entry.
    ///
    /// Returns `None` when the name does not follow the backup naming scheme or when
    /// its date digits are not a real calendar date.
    pub fn parse(filename: &str) -> Option<Self> {
        let captures = backup_name_regex().captures(filename)?;
        let digits = captures.get(1)?.as_str();
        let date = NaiveDate::parse_from_str(digits, "%Y%m%d").ok()?;
        Some(Self::new(filename, date))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Duplicate-free set of backups ordered by filename
///
/// Filenames start with a zero-padded date, so filename order is also date order.
#[derive(Debug, Clone, Default)]
pub struct BackupSet {
    entries: BTreeMap<String, BackupEntry>,
}

impl BackupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw folder entry names, skipping anything that is not a backup
    pub fn from_file_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            let name = name.as_ref();
            match BackupEntry::parse(name) {
                Some(entry) => set.insert(entry),
                None => debug!("Ignoring non-backup entry: {}", name),
            }
        }
        set
    }

    pub fn insert(&mut self, entry: BackupEntry) {
        self.entries.insert(entry.filename.clone(), entry);
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    pub fn get(&self, filename: &str) -> Option<&BackupEntry> {
        self.entries.get(filename)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending filename order
    pub fn iter(&self) -> Values<'_, String, BackupEntry> {
        self.entries.values()
    }
}

impl FromIterator<BackupEntry> for BackupSet {
    fn from_iter<T: IntoIterator<Item = BackupEntry>>(iter: T) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl<'a> IntoIterator for &'a BackupSet {
    type Item = &'a BackupEntry;
    type IntoIter = Values<'a, String, BackupEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
