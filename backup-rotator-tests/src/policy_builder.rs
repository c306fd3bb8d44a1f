//! Fluent API for building test policies and run configurations
//!
//! Starts from the command-line defaults and a fixed reference date.

use crate::fixtures;
use crate::test_context::TestContext;
use backup_rotator::config::{RetentionPolicy, RotationConfig};
use chrono::NaiveDate;

/// Builder for retention policies and rotation configs
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: RetentionPolicy,
    today: NaiveDate,
}

impl PolicyBuilder {
    /// Default policy, today = 2024-06-15
    pub fn new() -> Self {
        Self {
            policy: RetentionPolicy::default(),
            today: fixtures::reference_today(),
        }
    }

    /// Policy that keeps nothing except month-end backups
    pub fn month_ends_only() -> Self {
        Self::new().daily(0).weekly(0)
    }

    pub fn daily(mut self, count: u32) -> Self {
        self.policy.daily_count = count;
        self
    }

    pub fn weekly(mut self, count: u32) -> Self {
        self.policy.weekly_count = count;
        self
    }

    pub fn weekday(mut self, weekday: u32) -> Self {
        self.policy.weekly_weekday = weekday;
        self
    }

    pub fn monthly(mut self, count: u32) -> Self {
        self.policy.monthly_count = count;
        self
    }

    pub fn yearly(mut self) -> Self {
        self.policy.yearly_enabled = true;
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.policy.dry_run = true;
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Reference date for the run
    pub fn reference_date(&self) -> NaiveDate {
        self.today
    }

    /// Build the retention policy
    pub fn build(self) -> RetentionPolicy {
        self.policy
    }

    /// Build a run config pointing at the context's backup folder and report path
    pub fn config_for(self, ctx: &TestContext) -> RotationConfig {
        RotationConfig {
            backup_folder: ctx.backup_dir(),
            policy: self.policy,
            report_path: ctx.report_path(),
            today: self.today,
            logging: None,
        }
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
