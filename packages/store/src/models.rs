//! # Domain models for contact submissions
//!
//! Defines the data structures that flow between the public contact form, the
//! [`crate::SubmissionStore`] implementations and the admin dashboard. These types
//! are `Serialize + Deserialize` so they can cross the server/client boundary via
//! Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ContactForm`] | What a visitor typed into the contact form. No id, no timestamps. |
//! | [`ContactSubmission`] | A stored row. Carries the server-assigned `id` plus the date and time it was last written. |
//! | [`Stamp`] | The date/time pair recorded on insert and refreshed on every update. |
//! | [`UpsertOutcome`] | Whether a submission created a new row or overwrote the row already holding that email. |

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visitor-supplied contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    /// Natural key: one stored row per email.
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

/// A contact submission as stored in the `submissions` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub created_date: NaiveDate,
    pub created_time: NaiveTime,
}

/// Date and time components written alongside a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Result of [`crate::SubmissionStore::upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertOutcome {
    /// A fresh row was inserted with this id.
    Created(i64),
    /// The row already holding the email was overwritten; its id is unchanged.
    Updated(i64),
}

/// Rejected input, reported before any store call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Invalid website content: {0}")]
    InvalidContent(String),
}

impl ContactForm {
    /// Trim the identity fields and check every required field is present.
    ///
    /// The message body is kept verbatim apart from the blank check.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let form = Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            message: self.message,
        };

        if form.first_name.is_empty() {
            return Err(ValidationError::MissingField("First name"));
        }
        if form.last_name.is_empty() {
            return Err(ValidationError::MissingField("Last name"));
        }
        if form.email.is_empty() {
            return Err(ValidationError::MissingField("Email"));
        }
        if !form.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if form.phone_number.is_empty() {
            return Err(ValidationError::MissingField("Phone number"));
        }
        if form.message.trim().is_empty() {
            return Err(ValidationError::MissingField("Message"));
        }
        Ok(form)
    }
}

impl ContactSubmission {
    /// "First Last", as shown in the message list.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Build the stored row for `form` written at `stamp`.
    pub fn from_form(id: i64, form: &ContactForm, stamp: Stamp) -> Self {
        Self {
            id,
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone_number: form.phone_number.clone(),
            message: form.message.clone(),
            created_date: stamp.date,
            created_time: stamp.time,
        }
    }

    /// Overwrite everything except `id` and `email`.
    pub fn overwrite(&mut self, form: &ContactForm, stamp: Stamp) {
        self.first_name = form.first_name.clone();
        self.last_name = form.last_name.clone();
        self.phone_number = form.phone_number.clone();
        self.message = form.message.clone();
        self.created_date = stamp.date;
        self.created_time = stamp.time;
    }
}

impl Stamp {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Current local date and time, truncated to whole seconds.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        let time = now.time();
        Self {
            date: now.date(),
            time: time.with_nanosecond(0).unwrap_or(time),
        }
    }
}

impl UpsertOutcome {
    pub fn id(&self) -> i64 {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            first_name: "  Jane ".to_string(),
            last_name: "Moyo".to_string(),
            email: " jane@x.com ".to_string(),
            phone_number: "+263 77 000 0000".to_string(),
            message: "I'd like a solar loan.\n".to_string(),
        }
    }

    #[test]
    fn test_validated_trims_identity_fields() {
        let form = form().validated().unwrap();
        assert_eq!(form.first_name, "Jane");
        assert_eq!(form.email, "jane@x.com");
        assert_eq!(form.message, "I'd like a solar loan.\n");
    }

    #[test]
    fn test_validated_rejects_blank_fields() {
        let mut blank_name = form();
        blank_name.first_name = "   ".to_string();
        assert_eq!(
            blank_name.validated(),
            Err(ValidationError::MissingField("First name"))
        );

        let mut blank_message = form();
        blank_message.message = "\n\t".to_string();
        assert_eq!(
            blank_message.validated(),
            Err(ValidationError::MissingField("Message"))
        );

        let mut bad_email = form();
        bad_email.email = "jane.x.com".to_string();
        assert_eq!(bad_email.validated(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_stamp_now_has_whole_seconds() {
        assert_eq!(Stamp::now().time.nanosecond(), 0);
    }
}
