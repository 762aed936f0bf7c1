//! In-memory catalog.
//!
//! Tables loaded from the same catalog share one store, so a commit through
//! one `Table` is visible to every other `Table` for that name after it
//! refreshes. Commits are compare-and-swap on `TableMetadata::version`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use strata_core::{Error, Result, Status};

use crate::config::CatalogConfig;
use crate::metadata::{Schema, TableMetadata};
use crate::operations::TableOperations;
use crate::table::Table;

/// A failure to inject into the next commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitFault {
    /// The catalog refuses the commit.
    Reject,
    /// The connection drops before the response arrives. The write does not
    /// land, but the caller cannot know that.
    LostResponse,
}

#[derive(Debug, Default)]
struct CatalogState {
    tables: HashMap<String, TableMetadata>,
    next_fault: Option<CommitFault>,
}

/// Shared in-memory store of table metadata.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    config: CatalogConfig,
    state: Rc<RefCell<CatalogState>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            state: Rc::default(),
        }
    }

    /// Create a table and open it.
    pub fn create_table(&self, name: &str, schema: Schema) -> Result<Table> {
        if name.is_empty() {
            return Err(Error::invalid_argument("Table name cannot be empty"));
        }
        if !matches!(self.config.format_version, 1 | 2) {
            return Err(Error::invalid_argument(format!(
                "Unsupported format version: {}",
                self.config.format_version
            )));
        }

        {
            let mut state = self.state.borrow_mut();
            if state.tables.contains_key(name) {
                return Err(Error::invalid_argument(format!("Table already exists: {}", name)));
            }
            let metadata = TableMetadata::new(
                self.config.table_location(name),
                self.config.format_version,
                schema,
                self.config.default_properties.clone(),
            );
            state.tables.insert(name.to_string(), metadata);
        }

        tracing::debug!(table = name, "created table");
        self.load_table(name)
    }

    /// Open an existing table.
    pub fn load_table(&self, name: &str) -> Result<Table> {
        if !self.table_exists(name) {
            return Err(Error::invalid_argument(format!("Table does not exist: {}", name)));
        }
        Table::new(
            name,
            MemoryTableOperations {
                catalog: self.clone(),
                name: name.to_string(),
            },
        )
    }

    /// Check if a table exists.
    pub fn table_exists(&self, name: &str) -> bool {
        self.state.borrow().tables.contains_key(name)
    }

    /// Get the stored metadata of a table, bypassing any table cache.
    pub fn current_metadata(&self, name: &str) -> Option<TableMetadata> {
        self.state.borrow().tables.get(name).cloned()
    }

    /// Make the next commit against this catalog fail with `fault`.
    pub fn fail_next_commit(&self, fault: CommitFault) {
        self.state.borrow_mut().next_fault = Some(fault);
    }
}

/// Operations for one table of a [`MemoryCatalog`].
struct MemoryTableOperations {
    catalog: MemoryCatalog,
    name: String,
}

impl TableOperations for MemoryTableOperations {
    fn refresh(&mut self) -> Result<TableMetadata> {
        self.catalog
            .current_metadata(&self.name)
            .ok_or_else(|| Error::invalid_argument(format!("Table does not exist: {}", self.name)))
    }

    fn commit(&mut self, base: &TableMetadata, mut metadata: TableMetadata) -> Status {
        let mut state = self.catalog.state.borrow_mut();

        match state.next_fault.take() {
            Some(CommitFault::Reject) => {
                return Err(Error::commit_failed(format!(
                    "Commit to {} was rejected by the catalog",
                    self.name
                )));
            }
            Some(CommitFault::LostResponse) => {
                return Err(Error::commit_state_unknown(format!(
                    "Lost connection while committing to {}",
                    self.name
                )));
            }
            None => {}
        }

        let current = state.tables.get_mut(&self.name).ok_or_else(|| {
            Error::commit_failed(format!("Table {} was dropped", self.name))
        })?;

        if current.version != base.version {
            return Err(Error::commit_failed(format!(
                "Cannot commit to {}: base version {} is stale, current version is {}",
                self.name, base.version, current.version
            )));
        }

        metadata.version = base.version + 1;
        *current = metadata;
        Ok(())
    }
}
