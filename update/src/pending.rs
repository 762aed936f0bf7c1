//! Staged update traits.

use strata_core::{Error, ErrorCollector, ErrorKind, Result, Status};

/// A staged change that can be committed to a table.
///
/// This trait is object safe so that different kinds of updates can be held
/// in one collection (for example by a transaction) and committed without
/// knowing their concrete types.
///
/// Implementors must not be `Clone`: a copied builder would carry the same
/// commit intent twice.
pub trait PendingUpdate {
    /// Apply and commit the staged changes.
    ///
    /// On success the table's cached metadata is refreshed. Errors:
    /// - `ValidationFailed`: the staged changes are inconsistent and were
    ///   never sent to the table
    /// - `CommitFailed`: the table rejected the change (for example a
    ///   concurrent commit won); table state is unchanged
    /// - `CommitStateUnknown`: the outcome could not be determined; callers
    ///   must re-check table state before retrying
    fn commit(&mut self) -> Status;
}

impl<U: PendingUpdate + ?Sized> PendingUpdate for Box<U> {
    fn commit(&mut self) -> Status {
        (**self).commit()
    }
}

/// Fail-slow error helpers for builders that own an [`ErrorCollector`].
///
/// Setters record problems with `add_error` and keep returning the builder;
/// `apply()` and `commit()` surface them all through `check_errors`.
pub trait CollectErrors {
    /// The collector owned by this builder.
    fn error_collector(&self) -> &ErrorCollector;

    /// Mutable access to the collector owned by this builder.
    fn error_collector_mut(&mut self) -> &mut ErrorCollector;

    /// Record a validation error to be returned later.
    fn add_error(&mut self, kind: ErrorKind, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.error_collector_mut().add_error(kind, message);
    }

    /// Record an error surfaced by another component.
    fn add_existing_error(&mut self, error: Error) {
        self.error_collector_mut().add_existing_error(error);
    }

    fn has_errors(&self) -> bool {
        self.error_collector().has_errors()
    }

    /// Report every recorded error as one `ValidationFailed` error.
    fn check_errors(&self) -> Status {
        self.error_collector().check_errors()
    }

    fn clear_errors(&mut self) {
        self.error_collector_mut().clear_errors();
    }
}

/// A staged update with a typed, uncommitted preview.
///
/// Implementations call [`CollectErrors::check_errors`] first in `apply()`,
/// then run their own consistency checks. `commit()` should be written in
/// terms of `apply()` so that both paths validate identically:
///
/// ```ignore
/// fn commit(&mut self) -> Status {
///     let updated = self.apply()?;
///     self.table.commit_metadata(&self.base, updated)
/// }
/// ```
pub trait PendingUpdateTyped: PendingUpdate + CollectErrors {
    /// The value this update would produce once committed.
    type Output;

    /// Validate the staged changes and return the result without committing.
    ///
    /// Errors:
    /// - `ValidationFailed`: recorded errors, or staged changes that cannot
    ///   be applied
    /// - `InvalidArgument`: staged changes conflict with each other
    fn apply(&self) -> Result<Self::Output>;
}
