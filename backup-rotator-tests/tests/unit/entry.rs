//! Unit tests for backup filename parsing

use backup_rotator::rotation::{BackupEntry, BackupSet};
use rstest::rstest;
use test_utils::fixtures::date;

#[rstest]
#[case("20240615-031500-UTC-BACKUP.tar", date(2024, 6, 15))]
#[case("20231231-235959-UTC-BACKUP.zip", date(2023, 12, 31))]
#[case("20240229-000000-UTC-BACKUP.sql_gz", date(2024, 2, 29))]
#[case("19991231-120000-UTC-BACKUP.7z", date(1999, 12, 31))]
fn test_parses_backup_names(#[case] name: &str, #[case] expected: chrono::NaiveDate) {
    let entry = BackupEntry::parse(name).expect("should parse");
    assert_eq!(entry.date(), expected);
    assert_eq!(entry.filename(), name);
}

#[rstest]
#[case::plain_file("notes.txt")]
#[case::missing_time("20240101-BACKUP.tar")]
#[case::missing_utc("20240101-000000-BACKUP.tar")]
#[case::missing_extension("20240101-000000-UTC-BACKUP")]
#[case::short_date("2024011-000000-UTC-BACKUP.tar")]
#[case::short_time("20240101-00000-UTC-BACKUP.tar")]
#[case::lowercase("20240101-000000-utc-backup.tar")]
#[case::prefixed("old-20240101-000000-UTC-BACKUP.tar")]
#[case::dotted_extension("20240101-000000-UTC-BACKUP.tar.gz")]
#[case::month_13("20241301-000000-UTC-BACKUP.tar")]
#[case::feb_30("20240230-000000-UTC-BACKUP.tar")]
fn test_rejects_non_backup_names(#[case] name: &str) {
    assert!(BackupEntry::parse(name).is_none());
}

#[test]
fn test_set_lookup() {
    let set = BackupSet::from_file_names([
        "20240602-000000-UTC-BACKUP.tar",
        "20240601-000000-UTC-BACKUP.tar",
        "readme.md",
    ]);

    assert_eq!(set.len(), 2);
    assert!(set.contains("20240601-000000-UTC-BACKUP.tar"));
    assert!(!set.contains("readme.md"));
    assert_eq!(
        set.get("20240602-000000-UTC-BACKUP.tar").map(|e| e.date()),
        Some(date(2024, 6, 2))
    );
}
