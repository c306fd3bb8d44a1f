//! Dry-run report rendering

use super::classifier::{Classification, Tier};
use super::entry::BackupEntry;
use super::error::Result;

const SIZE_UNITS: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];

/// Format a byte count with binary prefixes and one decimal place (`1.5 MiB`)
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in SIZE_UNITS {
        if value.abs() < 1024.0 {
            return format!("{:.1} {}B", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} YiB", value)
}

/// Byte totals per tier and for the deletion list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportTotals {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
    pub yearly: u64,
    pub unretained: u64,
}

impl ReportTotals {
    pub fn tier(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Daily => self.daily,
            Tier::Weekly => self.weekly,
            Tier::Monthly => self.monthly,
            Tier::Yearly => self.yearly,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut u64 {
        match tier {
            Tier::Daily => &mut self.daily,
            Tier::Weekly => &mut self.weekly,
            Tier::Monthly => &mut self.monthly,
            Tier::Yearly => &mut self.yearly,
        }
    }

    /// Total size of everything kept
    pub fn retained(&self) -> u64 {
        self.daily + self.weekly + self.monthly + self.yearly
    }
}

/// A rendered dry-run report
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub totals: ReportTotals,
}

/// Render the dry-run report.
///
/// `size_of` is called once per listed backup. The first lookup failure aborts rendering;
/// callers never see a partial report.
pub fn render_report<F>(classification: &Classification, mut size_of: F) -> Result<Report>
where
    F: FnMut(&BackupEntry) -> Result<u64>,
{
    let mut lines = Vec::new();
    let mut totals = ReportTotals::default();

    for tier in Tier::ALL {
        lines.push(format!("{} Backups:", tier));
        let total = write_section(&mut lines, classification.tier(tier), &mut size_of)?;
        *totals.tier_mut(tier) = total;
        lines.push(String::new());
    }

    lines.push("Files to Delete (Ordered by Date Descending):".to_string());
    totals.unretained = write_section(&mut lines, classification.unretained(), &mut size_of)?;

    lines.push(String::new());
    lines.push("-".repeat(32));
    lines.push(String::new());

    for tier in Tier::ALL {
        lines.push(format!(
            "Total size for {} Backups: {}",
            tier,
            format_size(totals.tier(tier))
        ));
    }
    lines.push(format!(
        "Total size for remaining files: {}",
        format_size(totals.retained())
    ));
    lines.push(format!(
        "Total size for files marked for removal: {}",
        format_size(totals.unretained)
    ));

    let mut text = lines.join("\n");
    text.push('\n');

    Ok(Report { text, totals })
}

/// List filenames followed by their combined size
fn write_section<F>(lines: &mut Vec<String>, entries: &[BackupEntry], size_of: &mut F) -> Result<u64>
where
    F: FnMut(&BackupEntry) -> Result<u64>,
{
    let mut total = 0u64;
    for entry in entries {
        total += size_of(entry)?;
        lines.push(entry.filename().to_string());
    }
    lines.push(format!("TOTAL SIZE: {}", format_size(total)));
    Ok(total)
}
