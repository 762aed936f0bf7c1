//! Strata Table
//!
//! A versioned table whose metadata is changed through staged updates.
//!
//! Responsibilities:
//! - Hold table metadata (location, properties, schema, version)
//! - Define the commit primitive (`TableOperations`) and cache the last
//!   committed metadata (`Table`)
//! - Provide an in-memory catalog with conflict detection and fault injection
//! - Implement the concrete updates: properties, location, schema
//! - Commit a mixed list of updates through a `Transaction`
//!
//! # Module Structure
//!
//! - `metadata` - Table metadata and schema types
//! - `operations` - The commit/refresh primitive
//! - `table` - Table handle with cached metadata
//! - `catalog` - In-memory catalog
//! - `config` - Catalog configuration
//! - `updates/` - Concrete staged updates
//! - `transaction` - Ordered commit of heterogeneous updates

mod catalog;
mod config;
mod metadata;
mod operations;
mod table;
mod transaction;
mod updates;

pub use catalog::{CommitFault, MemoryCatalog};
pub use config::CatalogConfig;
pub use metadata::{NestedField, PrimitiveType, Schema, TableMetadata, FORMAT_VERSION_KEY};
pub use operations::TableOperations;
pub use table::Table;
pub use transaction::Transaction;
pub use updates::{UpdateLocation, UpdateProperties, UpdateSchema};
