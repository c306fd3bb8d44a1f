//! Tests for dry-run mode
//!
//! A dry run writes the report and leaves the backup folder untouched.

use test_utils::fixtures::{backup_name, daily_history, date, reference_today};
use test_utils::{MockBackupStore, PolicyBuilder, ResultAssertions, RotationManager, TestContext, Tier};

#[test]
fn test_dry_run_writes_report_and_keeps_files() {
    let ctx = TestContext::new();
    let created = ctx.create_backups(&daily_history(reference_today(), 60), 1024);
    ctx.create_named_backup("notes.txt", 5);

    let manager = RotationManager::new(PolicyBuilder::new().dry_run().config_for(&ctx));
    let summary = manager.run().assert_ok();

    assert_eq!(summary.matched, 60);
    assert!(summary.deleted.is_empty());
    assert_eq!(summary.report_path, Some(ctx.report_path()));
    assert!(!summary.unretained.is_empty());
    for name in &created {
        assert!(ctx.backup_exists(name));
    }

    let report = ctx.read_report().unwrap();
    assert!(report.starts_with("Daily Backups:\n"));
    assert!(!report.contains("notes.txt"));
    for name in &summary.unretained {
        assert!(report.contains(name.as_str()));
    }
}

#[test]
fn test_dry_run_counts() {
    let ctx = TestContext::new();
    ctx.create_backups(&daily_history(reference_today(), 60), 10);

    let manager = RotationManager::new(PolicyBuilder::new().dry_run().config_for(&ctx));
    let summary = manager.run().assert_ok();

    // 06-09..06-15 daily; Saturdays 06-08, 06-01, 05-25 weekly; 04-30 and 05-31 monthly
    assert_eq!(summary.tier_count(Tier::Daily), 7);
    assert_eq!(summary.tier_count(Tier::Weekly), 3);
    assert_eq!(summary.tier_count(Tier::Monthly), 2);
    assert_eq!(summary.tier_count(Tier::Yearly), 0);
    assert_eq!(summary.unretained.len(), 60 - 12);

    let report = ctx.read_report().unwrap();
    assert!(report.contains("Total size for remaining files: 120.0 B"));
    assert!(report.contains("Total size for files marked for removal: 480.0 B"));
}

#[test]
fn test_dry_run_overwrites_previous_report() {
    let ctx = TestContext::new();
    ctx.create_file("dry_run_output.txt", "stale content\n");
    ctx.create_backup(reference_today(), 1);

    let manager = RotationManager::new(PolicyBuilder::new().dry_run().config_for(&ctx));
    manager.run().assert_ok();

    let report = ctx.read_report().unwrap();
    assert!(!report.contains("stale content"));
    assert!(report.contains(&backup_name(reference_today())));
}

#[test]
fn test_dry_run_on_empty_folder() {
    let ctx = TestContext::new();

    let manager = RotationManager::new(PolicyBuilder::new().dry_run().config_for(&ctx));
    let summary = manager.run().assert_ok();

    assert_eq!(summary.matched, 0);
    let report = ctx.read_report().unwrap();
    assert!(report.contains("Total size for remaining files: 0.0 B"));
}

#[test]
fn test_vanished_file_aborts_without_report() {
    let ctx = TestContext::new();
    let name = backup_name(date(2024, 6, 1));
    let store = MockBackupStore::new()
        .with_file(&backup_name(date(2024, 6, 14)), 10)
        .with_file(&name, 10)
        .with_failing_size(&name);

    let config = PolicyBuilder::new().dry_run().config_for(&ctx);
    let manager = RotationManager::with_store(config, store.clone());

    manager.run().assert_err_contains(&name);
    assert!(!ctx.report_path().exists());
    assert!(store.removed().is_empty());
}
