//! Rotation manager - orchestrates a single rotation run

use crate::config::{RetentionPolicy, RotationConfig};
use crate::rotation::{self, BackupSet, Classification, Tier};
use crate::utils::store::{BackupStore, RealBackupStore};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a rotation run
#[derive(Debug, Clone, Serialize)]
pub struct RotationSummary {
    pub today: NaiveDate,
    pub policy: RetentionPolicy,
    /// Number of files that matched the backup naming scheme
    pub matched: usize,
    /// Retained backups per tier, ascending
    pub tiers: BTreeMap<Tier, Vec<String>>,
    /// Backups outside every tier, newest first
    pub unretained: Vec<String>,
    /// Files actually deleted (live run only)
    pub deleted: Vec<String>,
    /// Report location (dry run only)
    pub report_path: Option<PathBuf>,
}

impl RotationSummary {
    fn new(config: &RotationConfig, matched: usize, classification: &Classification) -> Self {
        let tiers: BTreeMap<Tier, Vec<String>> = Tier::ALL
            .iter()
            .map(|&tier| {
                let names: Vec<String> = classification
                    .tier(tier)
                    .iter()
                    .map(|e| e.filename().to_string())
                    .collect();
                (tier, names)
            })
            .collect();

        Self {
            today: config.today,
            policy: config.policy.clone(),
            matched,
            tiers,
            unretained: classification
                .unretained()
                .iter()
                .map(|e| e.filename().to_string())
                .collect(),
            deleted: Vec::new(),
            report_path: None,
        }
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tiers.get(&tier).map_or(0, Vec::len)
    }
}

pub struct RotationManager<S = RealBackupStore> {
    config: RotationConfig,
    store: S,
}

impl RotationManager<RealBackupStore> {
    /// Create a manager operating on the configured backup folder
    pub fn new(config: RotationConfig) -> Self {
        let store = RealBackupStore::new(&config.backup_folder);
        Self { config, store }
    }
}

impl<S: BackupStore> RotationManager<S> {
    /// Create a manager with a specific backup store
    pub fn with_store(config: RotationConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// List the folder and keep only well-formed backup names
    pub fn scan(&self) -> Result<BackupSet> {
        let names = self.store.list_file_names()?;
        let total = names.len();
        let backups = BackupSet::from_file_names(names);

        info!(
            "Found {} backup(s) among {} file(s) in {:?}",
            backups.len(),
            total,
            self.config.backup_folder
        );

        Ok(backups)
    }

    /// Scan the folder and classify what was found
    pub fn classify(&self) -> Result<(BackupSet, Classification)> {
        let backups = self.scan()?;
        let classification = rotation::classify(&backups, &self.config.policy, self.config.today);

        for tier in Tier::ALL {
            info!("{} backups retained: {}", tier, classification.tier(tier).len());
        }
        info!("Unretained backups: {}", classification.unretained().len());

        Ok((backups, classification))
    }

    /// Run the rotation: write a report in dry-run mode, delete unretained backups otherwise
    pub fn run(&self) -> Result<RotationSummary> {
        let start_time = Instant::now();
        let (backups, classification) = self.classify()?;
        let mut summary = RotationSummary::new(&self.config, backups.len(), &classification);

        if self.config.policy.dry_run {
            let path = self.write_report(&classification)?;
            summary.report_path = Some(path);
        } else {
            summary.deleted = rotation::delete_unretained(&classification, &self.store)
                .context("Rotation aborted")?;
            info!("Deleted {} backup(s)", summary.deleted.len());
        }

        debug!("Rotation finished in {:.2}s", start_time.elapsed().as_secs_f64());

        Ok(summary)
    }

    /// Render the dry-run report and write it to the configured path
    fn write_report(&self, classification: &Classification) -> Result<PathBuf> {
        let report = rotation::render_report(classification, |entry| {
            self.store.file_size(entry.filename())
        })
        .context("Failed to build dry-run report")?;

        let path = self.config.report_path.clone();
        fs::write(&path, &report.text).map_err(|source| rotation::RotationError::WriteReport {
            path: path.clone(),
            source,
        })?;

        info!(
            "Dry run report written to {:?} ({} to keep, {} to remove)",
            path,
            rotation::format_size(report.totals.retained()),
            rotation::format_size(report.totals.unretained)
        );

        Ok(path)
    }
}
