use anyhow::{Context, Result};
use backup_rotator::config::{self, RotationArgs};
use backup_rotator::managers::logging;
use backup_rotator::managers::rotation::{RotationManager, RotationSummary};
use backup_rotator::rotation::Tier;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rotate-backups")]
#[command(about = "Rotate backups based on retention parameters", long_about = None)]
#[command(version)]
struct Cli {
    /// Target folder for backup rotation
    backup_folder: PathBuf,

    /// Number of most recent days whose backups are all kept
    #[arg(long, env = "ROTATE_BACKUPS_DAILY_COUNT", default_value_t = config::default_daily_count())]
    daily_count: u32,

    /// Number of weeks to keep weekly backups for
    #[arg(long, env = "ROTATE_BACKUPS_WEEKLY_COUNT", default_value_t = config::default_weekly_count())]
    weekly_count: u32,

    /// Day of the week for weekly backups (0 = Monday ... 6 = Sunday)
    #[arg(long, env = "ROTATE_BACKUPS_WEEKLY_WEEKDAY", default_value_t = config::default_weekly_weekday())]
    weekly_weekday: u32,

    /// Number of monthly backups to keep (accepted, month-end backups are always kept)
    #[arg(long, env = "ROTATE_BACKUPS_MONTHLY_COUNT", default_value_t = config::default_monthly_count())]
    monthly_count: u32,

    /// Keep Dec 31 backups of past years indefinitely
    #[arg(long, env = "ROTATE_BACKUPS_YEARLY_ENABLED")]
    yearly_enabled: bool,

    /// Write a report instead of deleting files
    #[arg(long, env = "ROTATE_BACKUPS_DRY_RUN")]
    dry_run: bool,

    /// Where the dry-run report is written
    #[arg(long, env = "ROTATE_BACKUPS_REPORT_PATH", default_value = "dry_run_output.txt")]
    report_path: PathBuf,

    /// Reference date for retention windows (YYYY-MM-DD, defaults to today)
    #[arg(long, env = "ROTATE_BACKUPS_TODAY", value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, env = "ROTATE_BACKUPS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level for the log file
    #[arg(long, env = "ROTATE_BACKUPS_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Print a JSON summary to stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn rotation_args(&self) -> RotationArgs {
        RotationArgs {
            backup_folder: self.backup_folder.clone(),
            daily_count: self.daily_count,
            weekly_count: self.weekly_count,
            weekly_weekday: self.weekly_weekday,
            monthly_count: self.monthly_count,
            yearly_enabled: self.yearly_enabled,
            dry_run: self.dry_run,
            report_path: self.report_path.clone(),
            today: self.today,
            log_dir: self.log_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn parse_today(value: &str) -> std::result::Result<NaiveDate, String> {
    config::parse_date(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Arguments are validated before anything is touched
    let rotation_config = config::resolve_config(cli.rotation_args())?;

    // Keep the guard alive until exit so file logs are flushed
    let _log_guard = match rotation_config.logging {
        Some(ref logging_config) => Some(logging::init_logging(logging_config)?),
        None => {
            logging::init_console_logging();
            None
        }
    };

    let manager = RotationManager::new(rotation_config);
    let summary = manager.run()?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize rotation summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &RotationSummary) {
    println!("Backups found: {}", summary.matched);
    for tier in Tier::ALL {
        println!("  {:<8} {}", tier.label(), summary.tier_count(tier));
    }

    match summary.report_path {
        Some(ref path) => {
            println!("  {:<8} {}", "Remove", summary.unretained.len());
            println!("✓ Dry run complete, report written to {}", path.display());
        }
        None => {
            println!("  {:<8} {}", "Deleted", summary.deleted.len());
            println!("✓ Rotation completed successfully");
        }
    }
}
