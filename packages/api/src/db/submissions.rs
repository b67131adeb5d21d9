//! `submissions` table access.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, PgPool};
use store::{ContactForm, ContactSubmission, Stamp, StoreError, SubmissionStore, UpsertOutcome};

/// Name of the unique constraint on `submissions.email`.
pub const EMAIL_CONSTRAINT: &str = "submissions_email_key";

/// Row shape returned by `SELECT ... FROM submissions`.
#[derive(Debug, FromRow)]
struct SubmissionRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    message: String,
    created_date: NaiveDate,
    created_time: NaiveTime,
}

impl From<SubmissionRow> for ContactSubmission {
    fn from(row: SubmissionRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
            message: row.message,
            created_date: row.created_date,
            created_time: row.created_time,
        }
    }
}

/// [`SubmissionStore`] backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map an insert failure, singling out the email uniqueness violation.
fn insert_error(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db)
            if db.is_unique_violation() && db.constraint() == Some(EMAIL_CONSTRAINT) =>
        {
            StoreError::DuplicateEmail
        }
        _ => backend_error(e),
    }
}

fn backend_error(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, form: &ContactForm, stamp: Stamp) -> Result<i64, StoreError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO submissions (first_name, last_name, email, phone_number, message, created_date, created_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.email)
        .bind(&form.phone_number)
        .bind(&form.message)
        .bind(stamp.date)
        .bind(stamp.time)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(id)
    }

    async fn update_by_email(&self, form: &ContactForm, stamp: Stamp) -> Result<i64, StoreError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "UPDATE submissions SET
                first_name = $1,
                last_name = $2,
                phone_number = $3,
                message = $4,
                created_date = $5,
                created_time = $6
             WHERE email = $7
             RETURNING id",
        )
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.phone_number)
        .bind(&form.message)
        .bind(stamp.date)
        .bind(stamp.time)
        .bind(&form.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_error)?;

        row.map(|(id,)| id)
            .ok_or_else(|| StoreError::NotFound(form.email.clone()))
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let rows: Vec<SubmissionRow> = sqlx::query_as(
            "SELECT id, first_name, last_name, email, phone_number, message, created_date, created_time
             FROM submissions
             ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend_error)?;

        Ok(rows.into_iter().map(ContactSubmission::from).collect())
    }

    /// Single-statement upsert; `xmax = 0` only holds for a freshly inserted row.
    async fn upsert(&self, form: &ContactForm, stamp: Stamp) -> Result<UpsertOutcome, StoreError> {
        let (id, inserted): (i64, bool) = sqlx::query_as(
            "INSERT INTO submissions (first_name, last_name, email, phone_number, message, created_date, created_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT submissions_email_key DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                phone_number = EXCLUDED.phone_number,
                message = EXCLUDED.message,
                created_date = EXCLUDED.created_date,
                created_time = EXCLUDED.created_time
             RETURNING id, (xmax = 0) AS inserted",
        )
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.email)
        .bind(&form.phone_number)
        .bind(&form.message)
        .bind(stamp.date)
        .bind(stamp.time)
        .fetch_one(&self.pool)
        .await
        .map_err(backend_error)?;

        Ok(if inserted {
            UpsertOutcome::Created(id)
        } else {
            UpsertOutcome::Updated(id)
        })
    }
}
