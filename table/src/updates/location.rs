//! Table location change.

use std::sync::OnceLock;

use regex_lite::Regex;
use strata_core::{Error, ErrorCollector, ErrorKind, Result, Status};
use strata_update::{CollectErrors, CommitState, PendingUpdate, PendingUpdateTyped};

use crate::metadata::TableMetadata;
use crate::table::Table;

/// A scheme followed by `://` and a non-empty path.
const LOCATION_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://\S+$";

fn location_regex() -> &'static Regex {
    static LOCATION_RE: OnceLock<Regex> = OnceLock::new();
    LOCATION_RE.get_or_init(|| Regex::new(LOCATION_PATTERN).expect("location pattern is a valid regex"))
}

/// Moves a table to a new base location.
pub struct UpdateLocation<'t> {
    table: &'t Table,
    location: Option<String>,
    errors: ErrorCollector,
    state: CommitState,
}

impl<'t> UpdateLocation<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        Self {
            table,
            location: None,
            errors: ErrorCollector::new(),
            state: CommitState::Pending,
        }
    }

    /// Stage the new location. Trailing slashes are dropped.
    pub fn set_location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        if location.is_empty() {
            self.add_error(ErrorKind::InvalidArgument, "Location cannot be empty");
            return self;
        }

        if !location_regex().is_match(&location) {
            self.add_error(
                ErrorKind::InvalidArgument,
                format!("Location must be a URI with a scheme: {}", location),
            );
            return self;
        }

        self.location = Some(location.trim_end_matches('/').to_string());
        self
    }

    /// Outcome of the last commit.
    pub fn commit_state(&self) -> CommitState {
        self.state
    }

    fn apply_to(&self, _base: &TableMetadata) -> Result<String> {
        self.check_errors()?;
        self.location
            .clone()
            .ok_or_else(|| Error::validation_failed("Invalid table location: no location staged"))
    }
}

impl CollectErrors for UpdateLocation<'_> {
    fn error_collector(&self) -> &ErrorCollector {
        &self.errors
    }

    fn error_collector_mut(&mut self) -> &mut ErrorCollector {
        &mut self.errors
    }
}

impl PendingUpdateTyped for UpdateLocation<'_> {
    type Output = String;

    fn apply(&self) -> Result<String> {
        self.apply_to(&self.table.metadata())
    }
}

impl PendingUpdate for UpdateLocation<'_> {
    fn commit(&mut self) -> Status {
        let base = self.table.metadata();
        let result = self.apply_to(&base).and_then(|location| {
            let mut updated = base.clone();
            updated.location = location;
            self.table.commit_metadata(&base, updated)
        });
        self.state = CommitState::from_status(&result);
        result
    }
}
