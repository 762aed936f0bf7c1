//! Strata Core
//!
//! This crate provides the foundational types shared by every Strata crate:
//! - The closed error taxonomy (`ErrorKind`) and the `Error` value
//! - `Result` / `Status` aliases
//! - `ErrorCollector`, the fail-slow accumulator used by update builders

mod collector;
mod error;

pub use collector::ErrorCollector;
pub use error::{Error, ErrorKind, Result, Status};
