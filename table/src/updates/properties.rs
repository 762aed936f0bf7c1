//! Property changes.

use std::collections::{BTreeMap, BTreeSet};

use strata_core::{Error, ErrorCollector, ErrorKind, Result, Status};
use strata_update::{CollectErrors, CommitState, PendingUpdate, PendingUpdateTyped};

use crate::metadata::{TableMetadata, FORMAT_VERSION_KEY};
use crate::table::Table;

/// Sets and removes table properties.
pub struct UpdateProperties<'t> {
    table: &'t Table,
    updates: BTreeMap<String, String>,
    removals: BTreeSet<String>,
    errors: ErrorCollector,
    state: CommitState,
}

impl<'t> UpdateProperties<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        Self {
            table,
            updates: BTreeMap::new(),
            removals: BTreeSet::new(),
            errors: ErrorCollector::new(),
            state: CommitState::Pending,
        }
    }

    /// Stage `key = value`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            self.add_error(ErrorKind::InvalidArgument, "Property key cannot be empty");
            return self;
        }
        if key == FORMAT_VERSION_KEY {
            self.add_error(
                ErrorKind::InvalidArgument,
                format!("Cannot set reserved table property: {}", key),
            );
            return self;
        }
        self.updates.insert(key, value.into());
        self
    }

    /// Stage removal of `key`.
    pub fn remove(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            self.add_error(ErrorKind::InvalidArgument, "Property key cannot be empty");
            return self;
        }
        self.removals.insert(key);
        self
    }

    /// Outcome of the last commit.
    pub fn commit_state(&self) -> CommitState {
        self.state
    }

    fn apply_to(&self, base: &TableMetadata) -> Result<BTreeMap<String, String>> {
        self.check_errors()?;

        // Keys are sorted, so the report order is deterministic.
        if let Some(key) = self.removals.iter().find(|k| self.updates.contains_key(*k)) {
            return Err(Error::validation_failed(format!(
                "Cannot remove and update the same key: {}",
                key
            )));
        }

        let mut properties = base.properties.clone();
        for key in &self.removals {
            properties.remove(key);
        }
        properties.extend(self.updates.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(properties)
    }
}

impl CollectErrors for UpdateProperties<'_> {
    fn error_collector(&self) -> &ErrorCollector {
        &self.errors
    }

    fn error_collector_mut(&mut self) -> &mut ErrorCollector {
        &mut self.errors
    }
}

impl PendingUpdateTyped for UpdateProperties<'_> {
    type Output = BTreeMap<String, String>;

    fn apply(&self) -> Result<Self::Output> {
        self.apply_to(&self.table.metadata())
    }
}

impl PendingUpdate for UpdateProperties<'_> {
    fn commit(&mut self) -> Status {
        let base = self.table.metadata();
        let result = self.apply_to(&base).and_then(|properties| {
            let mut updated = base.clone();
            updated.properties = properties;
            self.table.commit_metadata(&base, updated)
        });
        self.state = CommitState::from_status(&result);
        result
    }
}
