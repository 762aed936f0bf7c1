//! Ordered commit of heterogeneous updates.

use std::fmt;

use strata_core::Status;
use strata_update::PendingUpdate;

use crate::table::Table;

/// A list of staged updates against one table, committed in order.
///
/// Updates are held behind `PendingUpdate`, so properties, location and
/// schema changes (or any other implementation) can be mixed. Each update
/// reads the table's metadata as refreshed by the previous commit.
pub struct Transaction<'t> {
    table: &'t Table,
    updates: Vec<Box<dyn PendingUpdate + 't>>,
}

impl<'t> Transaction<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        Self {
            table,
            updates: Vec::new(),
        }
    }

    /// Take ownership of a staged update.
    pub fn add(&mut self, update: impl PendingUpdate + 't) -> &mut Self {
        self.updates.push(Box::new(update));
        self
    }

    /// Get the number of staged updates.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Check if no updates are staged.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Commit every update in insertion order.
    ///
    /// Stops at the first failure. The error keeps its kind and its message
    /// is prefixed with the failing update's position; updates before it
    /// remain committed.
    pub fn commit_transaction(mut self) -> Status {
        let total = self.updates.len();
        for (index, update) in self.updates.iter_mut().enumerate() {
            if let Err(err) = update.commit() {
                tracing::warn!(
                    table = self.table.ident(),
                    position = index + 1,
                    total,
                    "transaction stopped"
                );
                return Err(err.with_context(format!("update {} of {}", index + 1, total)));
            }
        }

        tracing::debug!(table = self.table.ident(), total, "transaction committed");
        Ok(())
    }
}

impl fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("table", &self.table.ident())
            .field("updates", &self.updates.len())
            .finish()
    }
}
