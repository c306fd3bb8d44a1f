//! Command tests for backup-rotator
//!
//! These tests drive full rotation runs through `RotationManager`, against real temporary
//! folders or a mocked backup store.

mod dry_run;
