//! Backup Rotator Library
//!
//! Classifies timestamped backup files into daily, weekly, monthly and yearly retention
//! tiers and reports or deletes whatever falls outside them.

pub mod config;
pub mod managers;
pub mod rotation;
pub mod utils;

// Re-export commonly used types
pub use config::{resolve_config, RetentionPolicy, RotationArgs, RotationConfig};
pub use managers::logging::{init_console_logging, init_logging, LogGuard, LoggingConfig};
pub use managers::rotation::{RotationManager, RotationSummary};
pub use rotation::{classify, render_report, BackupEntry, BackupSet, Classification, Tier};
