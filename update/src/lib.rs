//! Strata Update
//!
//! Builder-style staged updates against a versioned table.
//!
//! Responsibilities:
//! - `PendingUpdate`: the untyped commit capability, object safe so mixed
//!   updates can live in one `Vec<Box<dyn PendingUpdate>>`
//! - `PendingUpdateTyped`: adds a side-effect-free `apply()` preview with a
//!   per-update output type
//! - `CollectErrors`: fail-slow helpers for builders that own an
//!   `ErrorCollector`
//! - `CommitState`: outcome of the last commit attempt

mod pending;
mod state;

pub use pending::{CollectErrors, PendingUpdate, PendingUpdateTyped};
pub use state::CommitState;
