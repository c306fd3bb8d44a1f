//! Unit tests for tier classification
//!
//! These tests verify tier boundaries, rule ordering and the partition invariant.

use backup_rotator::rotation::{classify, is_month_end, BackupSet, Tier};
use chrono::{Datelike, Duration, Weekday};
use rstest::rstest;
use std::collections::BTreeSet;
use test_utils::fixtures::{self, backup_name, backup_set, daily_history, date, reference_today};
use test_utils::PolicyBuilder;

#[rstest]
#[case::defaults(PolicyBuilder::new())]
#[case::keep_nothing_recent(PolicyBuilder::month_ends_only())]
#[case::long_daily(PolicyBuilder::new().daily(400))]
#[case::mondays(PolicyBuilder::new().weekday(0).weekly(52))]
#[case::yearly(PolicyBuilder::new().yearly().today(date(2025, 3, 1)))]
fn test_tiers_partition_all_backups(#[case] builder: PolicyBuilder) {
    let today = builder.reference_date();
    let backups = backup_set(&daily_history(today, 800));
    let classification = classify(&backups, &builder.build(), today);

    let mut seen = BTreeSet::new();
    for tier in Tier::ALL {
        for entry in classification.tier(tier) {
            assert!(seen.insert(entry.filename().to_string()), "{} in two tiers", entry.filename());
            assert_eq!(classification.tier_of(entry.filename()), Some(tier));
        }
    }

    for entry in classification.unretained() {
        assert!(!seen.contains(entry.filename()), "{} is retained and unretained", entry.filename());
        assert_eq!(classification.tier_of(entry.filename()), None);
    }

    assert_eq!(seen.len() + classification.unretained().len(), backups.len());
    assert_eq!(classification.retained_count(), seen.len());
    assert_eq!(classification.len(), backups.len());
}

#[test]
fn test_daily_boundary() {
    let policy = PolicyBuilder::new().daily(7).build();
    let today = date(2024, 6, 15);
    let backups = backup_set(&[date(2024, 6, 9), date(2024, 6, 8)]);

    let classification = classify(&backups, &policy, today);

    assert_eq!(classification.tier_of(&backup_name(date(2024, 6, 9))), Some(Tier::Daily));
    assert_ne!(classification.tier_of(&backup_name(date(2024, 6, 8))), Some(Tier::Daily));
}

#[test]
fn test_zero_daily_count_keeps_no_dailies() {
    let policy = PolicyBuilder::new().daily(0).build();
    let today = reference_today();
    let backups = backup_set(&daily_history(today, 30));

    let classification = classify(&backups, &policy, today);
    assert!(classification.tier(Tier::Daily).is_empty());
}

#[test]
fn test_weekly_only_on_configured_weekday() {
    let policy = PolicyBuilder::new().daily(0).weekly(520).weekday(5).build();
    let today = reference_today();
    let backups = backup_set(&daily_history(today, 365));

    let classification = classify(&backups, &policy, today);

    assert!(!classification.tier(Tier::Weekly).is_empty());
    for entry in classification.tier(Tier::Weekly) {
        assert_eq!(entry.date().weekday(), Weekday::Sat);
    }
    for entry in backups.iter().filter(|e| e.date().weekday() == Weekday::Tue) {
        assert_ne!(classification.tier_of(entry.filename()), Some(Tier::Weekly));
    }
}

#[test]
fn test_weekly_window() {
    // Default policy: 7 days daily, 4 Saturdays back (28 day window)
    let policy = PolicyBuilder::new().build();
    let today = date(2024, 6, 15);
    let saturdays = [
        date(2024, 6, 8),
        date(2024, 6, 1),
        date(2024, 5, 25),
        date(2024, 5, 18),
    ];
    let backups = backup_set(&saturdays);

    let classification = classify(&backups, &policy, today);
    let weekly: Vec<_> = classification.tier(Tier::Weekly).iter().map(|e| e.date()).collect();

    assert_eq!(weekly, vec![date(2024, 5, 25), date(2024, 6, 1), date(2024, 6, 8)]);
    assert_eq!(classification.tier_of(&backup_name(date(2024, 5, 18))), None);
}

#[test]
fn test_zero_weekly_count_keeps_no_weeklies() {
    let policy = PolicyBuilder::new().weekly(0).build();
    let today = reference_today();
    let backups = backup_set(&daily_history(today, 60));

    let classification = classify(&backups, &policy, today);
    assert!(classification.tier(Tier::Weekly).is_empty());
}

#[rstest]
#[case::leap_day(date(2024, 2, 29), true)]
#[case::non_leap_feb(date(2023, 2, 28), true)]
#[case::leap_feb_28th(date(2024, 2, 28), false)]
#[case::thirty_days(date(2024, 9, 30), true)]
#[case::thirty_one_days(date(2024, 10, 31), true)]
#[case::mid_month(date(2024, 10, 15), false)]
#[case::century_non_leap(date(1900, 2, 28), true)]
#[case::four_hundred_leap(date(2000, 2, 29), true)]
fn test_month_end_detection(#[case] day: chrono::NaiveDate, #[case] expected: bool) {
    assert_eq!(is_month_end(day), expected);

    let policy = PolicyBuilder::month_ends_only().build();
    let classification = classify(&backup_set(&[day]), &policy, reference_today());
    let expected_tier = if expected { Some(Tier::Monthly) } else { None };
    assert_eq!(classification.tier_of(&backup_name(day)), expected_tier);
}

#[test]
fn test_monthly_ignores_count_and_age() {
    let policy = PolicyBuilder::month_ends_only().monthly(1).build();
    let today = reference_today();
    let month_ends = [date(2010, 1, 31), date(2015, 6, 30), date(2024, 5, 31)];

    let classification = classify(&backup_set(&month_ends), &policy, today);
    assert_eq!(classification.tier(Tier::Monthly).len(), 3);
}

#[test]
fn test_daily_claims_month_end_first() {
    let policy = PolicyBuilder::new().build();
    let today = date(2024, 6, 2);

    let classification = classify(&backup_set(&[date(2024, 5, 31)]), &policy, today);
    assert_eq!(classification.tier_of(&backup_name(date(2024, 5, 31))), Some(Tier::Daily));
}

#[test]
fn test_year_end_goes_to_monthly_before_yearly() {
    let builder = PolicyBuilder::month_ends_only().yearly().today(date(2025, 3, 1));
    let today = builder.reference_date();
    let year_ends = [date(2023, 12, 31), date(2024, 12, 31)];

    let classification = classify(&backup_set(&year_ends), &builder.build(), today);

    assert!(classification.tier(Tier::Yearly).is_empty());
    assert_eq!(classification.tier(Tier::Monthly).len(), 2);
}

#[test]
fn test_yearly_tier_never_populated() {
    let builder = PolicyBuilder::new().yearly().today(date(2025, 3, 1));
    let today = builder.reference_date();
    let backups = backup_set(&daily_history(today, 3 * 366));

    let classification = classify(&backups, &builder.build(), today);
    assert!(classification.tier(Tier::Yearly).is_empty());
}

#[test]
fn test_non_backup_names_excluded() {
    let today = reference_today();
    let mut names: Vec<String> = fixtures::non_backup_names().into_iter().map(String::from).collect();
    names.push(backup_name(today - Duration::days(100)));

    let backups = BackupSet::from_file_names(&names);
    let classification = classify(&backups, &PolicyBuilder::new().build(), today);

    assert_eq!(classification.len(), 1);
    for name in fixtures::non_backup_names() {
        assert_eq!(classification.tier_of(name), None);
        assert!(classification.unretained().iter().all(|e| e.filename() != name));
    }
}

#[test]
fn test_tier_members_keep_filename_order() {
    let policy = PolicyBuilder::new().daily(30).build();
    let today = reference_today();
    let backups = backup_set(&daily_history(today, 10));

    let classification = classify(&backups, &policy, today);
    let names: Vec<_> = classification.tier(Tier::Daily).iter().map(|e| e.filename()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
