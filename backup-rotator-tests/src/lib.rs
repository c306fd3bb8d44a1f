//! Test utilities for backup-rotator
//!
//! This crate provides shared test utilities, fixtures and helper functions for testing
//! the backup-rotator application.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_utils::{fixtures, PolicyBuilder, TestContext};
//!
//! #[test]
//! fn my_test() {
//!     let ctx = TestContext::new();
//!     ctx.create_backup(fixtures::date(2024, 6, 14), 100);
//!     let config = PolicyBuilder::new().dry_run().config_for(&ctx);
//!     // ... test code
//! }
//! ```

pub mod fixtures;
pub mod policy_builder;
pub mod test_context;

// Re-export commonly used items
pub use policy_builder::PolicyBuilder;
pub use test_context::{ResultAssertions, TestContext};

// Re-export types from the main crate for convenience
pub use backup_rotator::config::{RetentionPolicy, RotationConfig};
pub use backup_rotator::managers::rotation::{RotationManager, RotationSummary};
pub use backup_rotator::rotation::{BackupEntry, BackupSet, Classification, RotationError, Tier};

// Re-export the mock store from the main crate
pub use backup_rotator::utils::store::mock::{MockBackupStore, StoreCall};
pub use backup_rotator::utils::store::BackupStore;

/// Common test result type
pub type TestResult<T = ()> = anyhow::Result<T>;
