//! The commit primitive a table is backed by.

use crate::metadata::TableMetadata;
use strata_core::{Result, Status};

/// Atomic, conflict-detecting storage for one table's metadata.
pub trait TableOperations {
    /// Load the currently committed metadata.
    fn refresh(&mut self) -> Result<TableMetadata>;

    /// Replace `base` with `metadata` atomically.
    ///
    /// Must fail with `CommitFailed` (leaving state unchanged) when the
    /// stored metadata is no longer `base`, and with `CommitStateUnknown`
    /// when the outcome cannot be determined.
    fn commit(&mut self, base: &TableMetadata, metadata: TableMetadata) -> Status;
}
