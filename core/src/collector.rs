//! Fail-slow error collection for builders.
//!
//! Builder setters return the builder itself, so they cannot report failures
//! through their return value. They record errors here instead, and the
//! terminal operation (`apply` / `commit`) drains them through
//! [`ErrorCollector::check_errors`], which reports every problem at once.

use crate::error::{Error, ErrorKind, Status};

const REPORT_HEADER: &str = "Validation failed due to the following errors:\n";
const ENTRY_MARKER: &str = "  - ";

/// Ordered, append-only collection of validation errors.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<Error>,
}

impl ErrorCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new error.
    pub fn add_error(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.errors.push(Error::new(kind, message));
    }

    /// Record an error surfaced by another component.
    pub fn add_existing_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Check if any errors have been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Report all recorded errors as one `ValidationFailed` error.
    ///
    /// The aggregate kind is always `ValidationFailed`; the kinds of the
    /// individual entries stay available through [`ErrorCollector::errors`].
    pub fn check_errors(&self) -> Status {
        if self.errors.is_empty() {
            return Ok(());
        }

        let mut message = String::from(REPORT_HEADER);
        for error in &self.errors {
            message.push_str(ENTRY_MARKER);
            message.push_str(error.message());
            message.push('\n');
        }

        tracing::debug!(count = self.errors.len(), "staged changes failed validation");
        Err(Error::validation_failed(message))
    }

    /// Forget all recorded errors.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Get the recorded errors in insertion order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl Extend<Error> for ErrorCollector {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}
