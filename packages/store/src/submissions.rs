//! # Submission store: the insert-or-update contract over an abstract row store
//!
//! [`SubmissionStore`] is the seam between the contact/admin flows and whatever
//! actually keeps the rows: [`crate::MemoryStore`] in tests and `PgSubmissionStore`
//! in the `api` crate.
//!
//! ## Insert-or-update
//!
//! Email is the deduplication key. [`upsert`](SubmissionStore::upsert) first tries
//! [`insert`](SubmissionStore::insert); only when that fails with
//! [`StoreError::DuplicateEmail`] does it fall back to
//! [`update_by_email`](SubmissionStore::update_by_email), which overwrites the
//! name, phone, message and timestamp fields of the existing row. Any other error
//! from either step is returned unchanged.
//!
//! Backends with a native conditional upsert should override `upsert` with a
//! single atomic statement instead of relying on the fallback.

use std::future::Future;

use thiserror::Error;

use crate::models::{ContactForm, ContactSubmission, Stamp, UpsertOutcome};

/// Errors reported by a [`SubmissionStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The insert hit the unique constraint on `email`.
    #[error("a submission with this email already exists")]
    DuplicateEmail,
    /// No row matched the key of an update.
    #[error("no submission found for {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Backend(String),
}

/// Async access to the `submissions` table.
pub trait SubmissionStore: Send + Sync {
    /// Insert a new row and return its id.
    ///
    /// Must return [`StoreError::DuplicateEmail`] for an email uniqueness
    /// violation and nothing else.
    fn insert(
        &self,
        form: &ContactForm,
        stamp: Stamp,
    ) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// Overwrite the row holding `form.email` and return its id.
    fn update_by_email(
        &self,
        form: &ContactForm,
        stamp: Stamp,
    ) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// Every row, highest id first.
    fn list_recent(&self) -> impl Future<Output = Result<Vec<ContactSubmission>, StoreError>> + Send;

    /// Insert `form`, or overwrite the existing row when its email is taken.
    fn upsert(
        &self,
        form: &ContactForm,
        stamp: Stamp,
    ) -> impl Future<Output = Result<UpsertOutcome, StoreError>> + Send {
        async move {
            match self.insert(form, stamp).await {
                Ok(id) => Ok(UpsertOutcome::Created(id)),
                Err(StoreError::DuplicateEmail) => self
                    .update_by_email(form, stamp)
                    .await
                    .map(UpsertOutcome::Updated),
                Err(e) => Err(e),
            }
        }
    }
}
