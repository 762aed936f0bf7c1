//! Table handle with cached metadata.

use std::cell::RefCell;
use std::fmt;

use strata_core::{Result, Status};

use crate::metadata::TableMetadata;
use crate::operations::TableOperations;
use crate::transaction::Transaction;
use crate::updates::{UpdateLocation, UpdateProperties, UpdateSchema};

/// A table and its locally cached metadata.
///
/// The cache is only replaced by `refresh()`, which runs after every
/// successful commit. Not thread safe: all access goes through `RefCell`.
pub struct Table {
    ident: String,
    ops: RefCell<Box<dyn TableOperations>>,
    metadata: RefCell<TableMetadata>,
}

impl Table {
    /// Open a table backed by `ops`, loading its current metadata.
    pub fn new(ident: impl Into<String>, ops: impl TableOperations + 'static) -> Result<Self> {
        let mut ops: Box<dyn TableOperations> = Box::new(ops);
        let metadata = ops.refresh()?;
        Ok(Self {
            ident: ident.into(),
            ops: RefCell::new(ops),
            metadata: RefCell::new(metadata),
        })
    }

    /// Get the table identifier.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Get a copy of the cached metadata.
    pub fn metadata(&self) -> TableMetadata {
        self.metadata.borrow().clone()
    }

    /// Get the cached metadata version.
    pub fn version(&self) -> u64 {
        self.metadata.borrow().version
    }

    /// Reload the cached metadata from the backing operations.
    pub fn refresh(&self) -> Status {
        let metadata = self.ops.borrow_mut().refresh()?;
        *self.metadata.borrow_mut() = metadata;
        Ok(())
    }

    /// Commit `metadata` as the successor of `base`, then refresh.
    ///
    /// This is the single path every update uses to reach the backing
    /// operations, and the extension point for updates defined outside this
    /// crate. Callers are expected to have validated `metadata` through
    /// their own `apply()` first. The cache is left untouched when the
    /// commit fails; once the commit lands, a failing refresh is logged and
    /// the commit still reports success.
    pub fn commit_metadata(&self, base: &TableMetadata, metadata: TableMetadata) -> Status {
        let result = self.ops.borrow_mut().commit(base, metadata);
        if let Err(err) = result {
            tracing::warn!(
                table = %self.ident,
                base_version = base.version,
                kind = %err.kind(),
                "commit did not succeed: {}",
                err.message()
            );
            return Err(err);
        }

        // The commit has landed; a failed reload only leaves the cache stale.
        if let Err(err) = self.refresh() {
            tracing::warn!(
                table = %self.ident,
                base_version = base.version,
                "committed, but refresh failed: {}",
                err.message()
            );
            return Ok(());
        }
        tracing::info!(table = %self.ident, version = self.version(), "committed table metadata");
        Ok(())
    }

    /// Start staging property changes.
    pub fn update_properties(&self) -> UpdateProperties<'_> {
        UpdateProperties::new(self)
    }

    /// Start staging a location change.
    pub fn update_location(&self) -> UpdateLocation<'_> {
        UpdateLocation::new(self)
    }

    /// Start staging schema changes.
    pub fn update_schema(&self) -> UpdateSchema<'_> {
        UpdateSchema::new(self)
    }

    /// Start a transaction that commits several updates in order.
    pub fn new_transaction(&self) -> Transaction<'_> {
        Transaction::new(self)
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("ident", &self.ident)
            .field("metadata", &self.metadata.borrow())
            .finish()
    }
}
