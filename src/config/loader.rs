use super::types::*;
use crate::managers::logging::LoggingConfig;
use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid weekly weekday {0} (expected 0-6, 0 = Monday)")]
    InvalidWeekday(u32),

    #[error("Backup folder does not exist: {0:?}")]
    FolderNotFound(PathBuf),

    #[error("Backup folder is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Raw rotation settings as supplied on the command line
#[derive(Debug, Clone)]
pub struct RotationArgs {
    pub backup_folder: PathBuf,
    pub daily_count: u32,
    pub weekly_count: u32,
    pub weekly_weekday: u32,
    pub monthly_count: u32,
    pub yearly_enabled: bool,
    pub dry_run: bool,
    pub report_path: PathBuf,
    pub today: Option<NaiveDate>,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl RotationArgs {
    /// Arguments with every option at its default
    pub fn new<P: Into<PathBuf>>(backup_folder: P) -> Self {
        Self {
            backup_folder: backup_folder.into(),
            daily_count: default_daily_count(),
            weekly_count: default_weekly_count(),
            weekly_weekday: default_weekly_weekday(),
            monthly_count: default_monthly_count(),
            yearly_enabled: false,
            dry_run: false,
            report_path: default_report_path(),
            today: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

/// Validate raw arguments and build the configuration for a run
pub fn resolve_config(args: RotationArgs) -> Result<RotationConfig> {
    if args.weekly_weekday > 6 {
        return Err(ConfigError::InvalidWeekday(args.weekly_weekday));
    }

    let backup_folder = super::expand_tilde(&args.backup_folder);
    if !backup_folder.exists() {
        return Err(ConfigError::FolderNotFound(backup_folder));
    }
    if !backup_folder.is_dir() {
        return Err(ConfigError::NotADirectory(backup_folder));
    }

    let policy = RetentionPolicy {
        daily_count: args.daily_count,
        weekly_count: args.weekly_count,
        weekly_weekday: args.weekly_weekday,
        monthly_count: args.monthly_count,
        yearly_enabled: args.yearly_enabled,
        dry_run: args.dry_run,
    };

    let logging = args
        .log_dir
        .as_deref()
        .map(|dir| LoggingConfig::from_config(dir, &args.log_level, 10));

    Ok(RotationConfig {
        backup_folder,
        policy,
        report_path: args.report_path,
        today: args.today.unwrap_or_else(|| chrono::Local::now().date_naive()),
        logging,
    })
}

/// Parse a `YYYY-MM-DD` reference date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(value.to_string()))
}
