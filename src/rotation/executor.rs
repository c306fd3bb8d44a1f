//! Live-run deletion of unretained backups

use super::classifier::Classification;
use super::error::Result;
use crate::utils::store::BackupStore;
use tracing::info;

/// Delete every unretained backup, newest first.
///
/// Stops at the first failure. Files removed before the failure stay removed.
/// Returns the names of the deleted files in deletion order.
pub fn delete_unretained<S>(classification: &Classification, store: &S) -> Result<Vec<String>>
where
    S: BackupStore + ?Sized,
{
    let mut deleted = Vec::with_capacity(classification.unretained().len());

    for entry in classification.unretained() {
        store.remove_file(entry.filename())?;
        info!("Deleted {}", entry.filename());
        deleted.push(entry.filename().to_string());
    }

    Ok(deleted)
}
