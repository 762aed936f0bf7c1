//! Concrete staged updates.
//!
//! Every update reads its base from the table's cached metadata when
//! `apply()` or `commit()` runs, and `commit()` is written in terms of the
//! same `apply_to(base)` step that `apply()` uses.

mod location;
mod properties;
mod schema;

pub use location::UpdateLocation;
pub use properties::UpdateProperties;
pub use schema::UpdateSchema;
