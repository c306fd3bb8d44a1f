//! Backup rotation core
//!
//! ```text
//! folder listing -> BackupSet -> classify() -> Classification -> render_report() | delete_unretained()
//! ```

pub mod classifier;
pub mod entry;
pub mod error;
pub mod executor;
pub mod report;

pub use classifier::{classify, is_month_end, Classification, Tier};
pub use entry::{BackupEntry, BackupSet};
pub use error::RotationError;
pub use executor::delete_unretained;
pub use report::{format_size, render_report, Report, ReportTotals};
