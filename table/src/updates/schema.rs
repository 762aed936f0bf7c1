//! Schema column changes.

use strata_core::{ErrorCollector, ErrorKind, Result, Status};
use strata_update::{CollectErrors, CommitState, PendingUpdate, PendingUpdateTyped};

use crate::metadata::{NestedField, PrimitiveType, Schema, TableMetadata};
use crate::table::Table;

#[derive(Debug)]
struct AddedColumn {
    name: String,
    field_type: PrimitiveType,
    required: bool,
}

/// Adds and deletes columns.
///
/// Checks that need the current schema (name collisions, unknown columns,
/// incompatible changes) run in `apply()` and are also reported together.
pub struct UpdateSchema<'t> {
    table: &'t Table,
    adds: Vec<AddedColumn>,
    deletes: Vec<String>,
    allow_incompatible: bool,
    errors: ErrorCollector,
    state: CommitState,
}

impl<'t> UpdateSchema<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        Self {
            table,
            adds: Vec::new(),
            deletes: Vec::new(),
            allow_incompatible: false,
            errors: ErrorCollector::new(),
            state: CommitState::Pending,
        }
    }

    /// Stage a new optional column.
    pub fn add_column(self, name: impl Into<String>, field_type: PrimitiveType) -> Self {
        self.stage_add(name.into(), field_type, false)
    }

    /// Stage a new required column. Needs `allow_incompatible_changes()`.
    pub fn add_required_column(self, name: impl Into<String>, field_type: PrimitiveType) -> Self {
        self.stage_add(name.into(), field_type, true)
    }

    /// Stage removal of an existing column.
    pub fn delete_column(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            self.add_error(ErrorKind::InvalidArgument, "Column name cannot be empty");
            return self;
        }
        if self.deletes.contains(&name) {
            self.add_error(
                ErrorKind::InvalidArgument,
                format!("Column already staged for deletion: {}", name),
            );
            return self;
        }
        self.deletes.push(name);
        self
    }

    /// Permit changes that break existing readers, such as required columns.
    pub fn allow_incompatible_changes(mut self) -> Self {
        self.allow_incompatible = true;
        self
    }

    /// Outcome of the last commit.
    pub fn commit_state(&self) -> CommitState {
        self.state
    }

    fn stage_add(mut self, name: String, field_type: PrimitiveType, required: bool) -> Self {
        if name.is_empty() {
            self.add_error(ErrorKind::InvalidArgument, "Column name cannot be empty");
            return self;
        }
        if self.adds.iter().any(|c| c.name == name) {
            self.add_error(
                ErrorKind::InvalidArgument,
                format!("Column already staged for addition: {}", name),
            );
            return self;
        }
        self.adds.push(AddedColumn {
            name,
            field_type,
            required,
        });
        self
    }

    fn apply_to(&self, base: &TableMetadata) -> Result<Schema> {
        self.check_errors()?;

        let current = &base.schema;
        let mut problems = ErrorCollector::new();
        for name in &self.deletes {
            if current.field_by_name(name).is_none() {
                problems.add_error(
                    ErrorKind::ValidationFailed,
                    format!("Cannot delete missing column: {}", name),
                );
            }
        }
        for column in &self.adds {
            if current.field_by_name(&column.name).is_some() && !self.deletes.contains(&column.name) {
                problems.add_error(
                    ErrorKind::ValidationFailed,
                    format!("Cannot add column, name already exists: {}", column.name),
                );
            }
            if column.required && !self.allow_incompatible {
                problems.add_error(
                    ErrorKind::InvalidArgument,
                    format!("Incompatible change: cannot add required column: {}", column.name),
                );
            }
        }

        let last_id = base.last_column_id.max(current.highest_field_id());
        let added = i32::try_from(self.adds.len()).ok();
        if !self.adds.is_empty() && added.and_then(|n| last_id.checked_add(n)).is_none() {
            problems.add_error(
                ErrorKind::ValidationFailed,
                format!(
                    "Cannot assign field id: {} new column(s) after id {} exceeds the maximum field id",
                    self.adds.len(),
                    last_id
                ),
            );
        }
        let schema_id = current.schema_id.checked_add(1);
        if schema_id.is_none() {
            problems.add_error(
                ErrorKind::ValidationFailed,
                format!("Cannot assign schema id after {}", current.schema_id),
            );
        }
        problems.check_errors()?;

        let mut fields: Vec<NestedField> = current
            .fields
            .iter()
            .filter(|f| !self.deletes.contains(&f.name))
            .cloned()
            .collect();
        // Bounds were checked above.
        for (offset, column) in (1..).zip(&self.adds) {
            fields.push(NestedField {
                id: last_id + offset,
                name: column.name.clone(),
                field_type: column.field_type,
                required: column.required,
            });
        }

        Ok(Schema {
            schema_id: schema_id.unwrap_or(current.schema_id),
            fields,
        })
    }
}

impl CollectErrors for UpdateSchema<'_> {
    fn error_collector(&self) -> &ErrorCollector {
        &self.errors
    }

    fn error_collector_mut(&mut self) -> &mut ErrorCollector {
        &mut self.errors
    }
}

impl PendingUpdateTyped for UpdateSchema<'_> {
    type Output = Schema;

    fn apply(&self) -> Result<Schema> {
        self.apply_to(&self.table.metadata())
    }
}

impl PendingUpdate for UpdateSchema<'_> {
    fn commit(&mut self) -> Status {
        let base = self.table.metadata();
        let result = self.apply_to(&base).and_then(|schema| {
            let mut updated = base.clone();
            updated.last_column_id = base.last_column_id.max(schema.highest_field_id());
            updated.schema = schema;
            self.table.commit_metadata(&base, updated)
        });
        self.state = CommitState::from_status(&result);
        result
    }
}
