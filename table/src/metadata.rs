//! Table metadata types.

use std::collections::BTreeMap;
use std::fmt;

/// Property key that is managed by the table format, not by users.
pub const FORMAT_VERSION_KEY: &str = "format-version";

/// Primitive column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Date,
    Timestamp,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::String => "string",
            PrimitiveType::Date => "date",
            PrimitiveType::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// A column in a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedField {
    /// Field ID, unique within the table's history.
    pub id: i32,
    /// Column name.
    pub name: String,
    /// Column type.
    pub field_type: PrimitiveType,
    /// Whether values are required (non-null).
    pub required: bool,
}

impl NestedField {
    pub fn optional(id: i32, name: impl Into<String>, field_type: PrimitiveType) -> Self {
        Self {
            id,
            name: name.into(),
            field_type,
            required: false,
        }
    }

    pub fn required(id: i32, name: impl Into<String>, field_type: PrimitiveType) -> Self {
        Self {
            id,
            name: name.into(),
            field_type,
            required: true,
        }
    }
}

/// A table schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    /// Schema ID, incremented on every schema change.
    pub schema_id: i32,
    /// Columns in order.
    pub fields: Vec<NestedField>,
}

impl Schema {
    /// Create the initial schema for a table.
    pub fn new(fields: Vec<NestedField>) -> Self {
        Self {
            schema_id: 0,
            fields,
        }
    }

    /// Find a column by name.
    pub fn field_by_name(&self, name: &str) -> Option<&NestedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Highest field ID in this schema (0 when empty).
    pub fn highest_field_id(&self) -> i32 {
        self.fields.iter().map(|f| f.id).max().unwrap_or(0)
    }
}

/// Committed state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    /// Base location of the table.
    pub location: String,
    /// Table format version.
    pub format_version: u8,
    /// Commit counter; bumped by the catalog on every successful commit.
    pub version: u64,
    /// User properties.
    pub properties: BTreeMap<String, String>,
    /// Current schema.
    pub schema: Schema,
    /// Highest field ID ever assigned.
    pub last_column_id: i32,
}

impl TableMetadata {
    /// Create metadata for a new table.
    pub fn new(
        location: impl Into<String>,
        format_version: u8,
        schema: Schema,
        properties: BTreeMap<String, String>,
    ) -> Self {
        let last_column_id = schema.highest_field_id();
        Self {
            location: location.into(),
            format_version,
            version: 0,
            properties,
            schema,
            last_column_id,
        }
    }

    /// Get a property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}
