pub mod content;
pub mod inbox;
pub mod models;
pub mod submissions;

mod memory;
pub use memory::MemoryStore;

pub use content::{ContentEditor, ContentField, LoanField, LoanProduct, SiteContent};
pub use inbox::{Inbox, OutgoingEmail, ReplyReport, REPLY_SUBJECT};
pub use models::{ContactForm, ContactSubmission, Stamp, UpsertOutcome, ValidationError};
pub use submissions::{StoreError, SubmissionStore};
