// Trait-based abstraction for testability
pub mod store;

// Re-export commonly used types and traits (used by test crate)
pub use store::{BackupStore, RealBackupStore};
