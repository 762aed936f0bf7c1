//! Configuration for the in-memory catalog.

use std::collections::BTreeMap;

/// Configuration for a [`MemoryCatalog`](crate::MemoryCatalog).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Root under which table locations are derived.
    pub warehouse: String,
    /// Format version for newly created tables (1 or 2).
    pub format_version: u8,
    /// Properties every new table starts with.
    pub default_properties: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            warehouse: "memory://warehouse".to_string(),
            format_version: 2,
            default_properties: BTreeMap::new(),
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse(mut self, warehouse: impl Into<String>) -> Self {
        self.warehouse = warehouse.into();
        self
    }

    pub fn with_format_version(mut self, format_version: u8) -> Self {
        self.format_version = format_version;
        self
    }

    pub fn with_default_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_properties.insert(key.into(), value.into());
        self
    }

    /// Location for a table with the given name.
    pub fn table_location(&self, name: &str) -> String {
        format!("{}/{}", self.warehouse.trim_end_matches('/'), name)
    }
}
