//! Configuration module for backup-rotator
//!
//! Turns command-line arguments into a validated [`RotationConfig`]. Nothing is read from
//! or written to disk here apart from checking that the backup folder exists.
//!
//! ## Example Usage
//!
//! ```no_run
//! use backup_rotator::config::{resolve_config, RotationArgs};
//!
//! let mut args = RotationArgs::new("/srv/backups");
//! args.dry_run = true;
//! let config = resolve_config(args)?;
//! println!("Daily window: {} days", config.policy.daily_count);
//! # Ok::<(), backup_rotator::config::ConfigError>(())
//! ```

mod loader;
mod types;

pub use loader::{parse_date, resolve_config, ConfigError, Result, RotationArgs};
pub use types::*;

/// Expand tilde (~) in path
pub fn expand_tilde(path: &std::path::Path) -> std::path::PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
