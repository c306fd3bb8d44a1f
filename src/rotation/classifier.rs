//! Retention tier classification
//!
//! Each backup is tested against an ordered list of tier rules and assigned to the first
//! tier whose rule matches. Backups matching no rule are unretained and become deletion
//! candidates. Classification is pure: it depends only on the entries, the policy and the
//! reference date.

use super::entry::{BackupEntry, BackupSet};
use crate::config::RetentionPolicy;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Retention tier, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Daily, Tier::Weekly, Tier::Monthly, Tier::Yearly];

    fn index(self) -> usize {
        match self {
            Tier::Daily => 0,
            Tier::Weekly => 1,
            Tier::Monthly => 2,
            Tier::Yearly => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Daily => "Daily",
            Tier::Weekly => "Weekly",
            Tier::Monthly => "Monthly",
            Tier::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type TierPredicate = fn(&BackupEntry, &RetentionPolicy, NaiveDate) -> bool;

struct TierRule {
    tier: Tier,
    matches: TierPredicate,
}

/// First match wins
const TIER_RULES: [TierRule; 4] = [
    TierRule { tier: Tier::Daily, matches: is_daily },
    TierRule { tier: Tier::Weekly, matches: is_weekly },
    TierRule { tier: Tier::Monthly, matches: is_monthly },
    TierRule { tier: Tier::Yearly, matches: is_yearly },
];

/// Whole days between the backup and `today`. Future-dated backups count as age 0.
fn age_in_days(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days().max(0)
}

fn is_daily(entry: &BackupEntry, policy: &RetentionPolicy, today: NaiveDate) -> bool {
    age_in_days(entry.date(), today) < i64::from(policy.daily_count)
}

fn is_weekly(entry: &BackupEntry, policy: &RetentionPolicy, today: NaiveDate) -> bool {
    entry.date().weekday().num_days_from_monday() == policy.weekly_weekday
        && age_in_days(entry.date(), today) < 7 * i64::from(policy.weekly_count)
}

// monthly_count is not consulted: every month-end backup is kept, however old.
fn is_monthly(entry: &BackupEntry, _policy: &RetentionPolicy, _today: NaiveDate) -> bool {
    is_month_end(entry.date())
}

fn is_yearly(entry: &BackupEntry, policy: &RetentionPolicy, today: NaiveDate) -> bool {
    let date = entry.date();
    policy.yearly_enabled && date.month() == 12 && date.day() == 31 && date.year() < today.year()
}

/// Whether `date` is the last calendar day of its month
pub fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

/// Result of classifying a backup set
#[derive(Debug, Clone, Default)]
pub struct Classification {
    tiers: [Vec<BackupEntry>; 4],
    unretained: Vec<BackupEntry>,
    assignments: BTreeMap<String, Tier>,
}

impl Classification {
    /// Members of a tier, in ascending filename order
    pub fn tier(&self, tier: Tier) -> &[BackupEntry] {
        &self.tiers[tier.index()]
    }

    /// Backups outside every tier, newest first
    pub fn unretained(&self) -> &[BackupEntry] {
        &self.unretained
    }

    /// The tier a backup was assigned to, if any
    pub fn tier_of(&self, filename: &str) -> Option<Tier> {
        self.assignments.get(filename).copied()
    }

    /// Number of backups kept across all tiers
    pub fn retained_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of backups classified
    pub fn len(&self) -> usize {
        self.assignments.len() + self.unretained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assign every backup in `entries` to at most one tier
pub fn classify(entries: &BackupSet, policy: &RetentionPolicy, today: NaiveDate) -> Classification {
    let mut classification = Classification::default();

    for entry in entries {
        let Some(rule) = TIER_RULES.iter().find(|rule| (rule.matches)(entry, policy, today)) else {
            continue;
        };
        debug!("{} -> {}", entry.filename(), rule.tier);
        classification
            .assignments
            .insert(entry.filename().to_string(), rule.tier);
        classification.tiers[rule.tier.index()].push(entry.clone());
    }

    let mut unretained: Vec<BackupEntry> = entries
        .iter()
        .filter(|entry| !classification.assignments.contains_key(entry.filename()))
        .cloned()
        .collect();
    unretained.sort_by(|a, b| {
        b.date()
            .cmp(&a.date())
            .then_with(|| b.filename().cmp(a.filename()))
    });
    classification.unretained = unretained;

    classification
}
