use std::sync::{Arc, Mutex};

use crate::models::{ContactForm, ContactSubmission, Stamp};
use crate::submissions::{StoreError, SubmissionStore};

/// In-memory SubmissionStore for testing and local previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<ContactSubmission>,
    last_id: i64,
    fail_next: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        self.inner.lock().unwrap().fail_next = Some(error);
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows holding `email`.
    pub fn count_email(&self, email: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|row| row.email == email)
            .count()
    }
}

impl Inner {
    fn take_failure(&mut self) -> Result<(), StoreError> {
        match self.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl SubmissionStore for MemoryStore {
    async fn insert(&self, form: &ContactForm, stamp: Stamp) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.take_failure()?;

        if inner.rows.iter().any(|row| row.email == form.email) {
            return Err(StoreError::DuplicateEmail);
        }

        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.push(ContactSubmission::from_form(id, form, stamp));
        Ok(id)
    }

    async fn update_by_email(&self, form: &ContactForm, stamp: Stamp) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.take_failure()?;

        let row = inner
            .rows
            .iter_mut()
            .find(|row| row.email == form.email)
            .ok_or_else(|| StoreError::NotFound(form.email.clone()))?;
        row.overwrite(form, stamp);
        Ok(row.id)
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.take_failure()?;

        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UpsertOutcome;
    use chrono::{NaiveDate, NaiveTime};

    fn form(email: &str, message: &str) -> ContactForm {
        ContactForm {
            first_name: "Jane".to_string(),
            last_name: "Moyo".to_string(),
            email: email.to_string(),
            phone_number: "+263713014547".to_string(),
            message: message.to_string(),
        }
    }

    fn stamp(day: u32, hour: u32) -> Stamp {
        Stamp::new(
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 15, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_fresh_email_creates_row() {
        let store = MemoryStore::new();

        let outcome = store
            .upsert(&form("jane@x.com", "Hello"), stamp(1, 9))
            .await
            .unwrap();
        assert!(matches!(outcome, UpsertOutcome::Created(_)));

        let rows = store.list_recent().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, outcome.id());
        assert_eq!(rows[0].email, "jane@x.com");
        assert_eq!(rows[0].message, "Hello");
        assert_eq!(rows[0].created_date, stamp(1, 9).date);
    }

    #[tokio::test]
    async fn test_resubmission_overwrites_existing_row() {
        let store = MemoryStore::new();

        let first = store
            .upsert(&form("jane@x.com", "First message"), stamp(1, 9))
            .await
            .unwrap();

        let mut again = form("jane@x.com", "Second message");
        again.first_name = "Janet".to_string();
        again.phone_number = "0772000000".to_string();
        let second = store.upsert(&again, stamp(2, 14)).await.unwrap();

        assert_eq!(second, UpsertOutcome::Updated(first.id()));
        assert_eq!(store.count_email("jane@x.com"), 1);

        let rows = store.list_recent().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, first.id());
        assert_eq!(rows[0].first_name, "Janet");
        assert_eq!(rows[0].phone_number, "0772000000");
        assert_eq!(rows[0].message, "Second message");
        assert_eq!(rows[0].created_date, stamp(2, 14).date);
        assert_eq!(rows[0].created_time, stamp(2, 14).time);
    }

    #[tokio::test]
    async fn test_backend_error_is_not_recovered() {
        let store = MemoryStore::new();
        store.fail_next(StoreError::Backend("connection reset".to_string()));

        let err = store
            .upsert(&form("jane@x.com", "Hello"), stamp(1, 9))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Backend("connection reset".to_string()));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_fallback_update_leaves_row_untouched() {
        let store = MemoryStore::new();
        store
            .upsert(&form("jane@x.com", "Original"), stamp(1, 9))
            .await
            .unwrap();

        // Insert reports the duplicate, then the update itself fails.
        let duplicate = form("jane@x.com", "Replacement");
        assert_eq!(
            store.insert(&duplicate, stamp(2, 9)).await,
            Err(StoreError::DuplicateEmail)
        );
        store.fail_next(StoreError::Backend("timeout".to_string()));
        assert!(store.update_by_email(&duplicate, stamp(2, 9)).await.is_err());

        let rows = store.list_recent().await.unwrap();
        assert_eq!(rows[0].message, "Original");
    }

    #[tokio::test]
    async fn test_list_recent_orders_by_id_descending() {
        let store = MemoryStore::new();
        for (i, email) in ["a@x.com", "b@x.com", "c@x.com"].iter().enumerate() {
            store
                .upsert(&form(email, "hi"), stamp(1 + i as u32, 8))
                .await
                .unwrap();
        }
        // Updating the oldest row must not move it to the top.
        store
            .upsert(&form("a@x.com", "updated"), stamp(9, 8))
            .await
            .unwrap();

        let ids: Vec<i64> = store
            .list_recent()
            .await
            .unwrap()
            .iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
