//! Dashboard message list with a single selection and a reply draft.

use serde::{Deserialize, Serialize};

use crate::models::ContactSubmission;

/// Subject line used for every operator reply.
pub const REPLY_SUBJECT: &str = "Reply from Goal Getters Financial Services";

/// An email handed to the dispatch endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What the operator is told once a send finishes.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyReport {
    Delivered { to: String },
    /// Dispatch failed or is unavailable; the email is shown instead.
    NotDelivered(OutgoingEmail),
}

/// Messages loaded into the dashboard plus the reply being composed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inbox {
    messages: Vec<ContactSubmission>,
    selected: Option<ContactSubmission>,
    reply: String,
    /// The email handed to dispatch and not yet finished.
    pending: Option<OutgoingEmail>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ContactSubmission] {
        &self.messages
    }

    pub fn selected(&self) -> Option<&ContactSubmission> {
        self.selected.as_ref()
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the list with a fresh fetch.
    ///
    /// A selected row that is still present is swapped for its fresh copy; one
    /// that disappeared is dropped along with the draft.
    pub fn load(&mut self, messages: Vec<ContactSubmission>) {
        if let Some(selected) = &self.selected {
            match messages.iter().find(|m| m.id == selected.id) {
                Some(fresh) => self.selected = Some(fresh.clone()),
                None => {
                    self.selected = None;
                    self.reply.clear();
                }
            }
        }
        self.messages = messages;
    }

    /// Select the message with `id`, replacing any previous selection and draft.
    ///
    /// Refused while a send is outstanding.
    pub fn select(&mut self, id: i64) -> bool {
        if self.is_sending() {
            return false;
        }
        match self.messages.iter().find(|m| m.id == id) {
            Some(message) => {
                self.selected = Some(message.clone());
                self.reply.clear();
                true
            }
            None => false,
        }
    }

    pub fn set_reply(&mut self, text: String) {
        self.reply = text;
    }

    pub fn can_send(&self) -> bool {
        self.selected.is_some() && !self.reply.trim().is_empty() && !self.is_sending()
    }

    /// Mark a send as outstanding and return the email to dispatch.
    pub fn begin_send(&mut self) -> Option<OutgoingEmail> {
        if !self.can_send() {
            return None;
        }
        let selected = self.selected.as_ref()?;
        let email = OutgoingEmail {
            to: selected.email.clone(),
            subject: REPLY_SUBJECT.to_string(),
            body: self.reply.clone(),
        };
        self.pending = Some(email.clone());
        Some(email)
    }

    /// Finish the outstanding send and report on the email that was dispatched.
    ///
    /// The selection and draft are cleared when they still belong to that
    /// email's recipient.
    pub fn finish_send(&mut self, delivered: bool) -> Option<ReplyReport> {
        let email = self.pending.take()?;
        if self.selected.as_ref().is_some_and(|m| m.email == email.to) {
            self.selected = None;
            self.reply.clear();
        }

        Some(if delivered {
            ReplyReport::Delivered { to: email.to }
        } else {
            ReplyReport::NotDelivered(email)
        })
    }
}

impl ReplyReport {
    /// Text shown to the operator.
    pub fn message(&self) -> String {
        match self {
            ReplyReport::Delivered { to } => format!("Reply sent successfully to {to}"),
            ReplyReport::NotDelivered(email) => format!(
                "Email service not configured. Here's what would be sent to {}:\n\nSubject: {}\n\nMessage:\n{}",
                email.to, email.subject, email.body
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactForm, Stamp};
    use chrono::{NaiveDate, NaiveTime};

    fn submission(id: i64, email: &str) -> ContactSubmission {
        let form = ContactForm {
            first_name: format!("First{id}"),
            last_name: "Last".to_string(),
            email: email.to_string(),
            phone_number: "0772".to_string(),
            message: format!("Message {id}"),
        };
        let stamp = Stamp::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        );
        ContactSubmission::from_form(id, &form, stamp)
    }

    fn inbox() -> Inbox {
        let mut inbox = Inbox::new();
        inbox.load(vec![submission(2, "b@x.com"), submission(1, "a@x.com")]);
        inbox
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut inbox = inbox();
        assert!(inbox.select(1));
        inbox.set_reply("Thanks for reaching out".to_string());

        assert!(inbox.select(2));
        assert_eq!(inbox.selected().unwrap().email, "b@x.com");
        assert_eq!(inbox.reply(), "");

        assert!(!inbox.select(42));
        assert_eq!(inbox.selected().unwrap().id, 2);
    }

    #[test]
    fn test_can_send_requires_selection_and_text() {
        let mut inbox = inbox();
        inbox.set_reply("Hello".to_string());
        assert!(!inbox.can_send());

        inbox.select(1);
        assert!(!inbox.can_send());

        inbox.set_reply("  \n\t ".to_string());
        assert!(!inbox.can_send());

        inbox.set_reply("We can help".to_string());
        assert!(inbox.can_send());
    }

    #[test]
    fn test_send_is_blocked_while_outstanding() {
        let mut inbox = inbox();
        inbox.select(1);
        inbox.set_reply("We can help".to_string());

        let email = inbox.begin_send().unwrap();
        assert_eq!(email.to, "a@x.com");
        assert_eq!(email.subject, REPLY_SUBJECT);
        assert_eq!(email.body, "We can help");

        assert!(inbox.is_sending());
        assert!(!inbox.can_send());
        assert!(inbox.begin_send().is_none());
    }

    #[test]
    fn test_finish_send_reports_and_clears() {
        let mut inbox = inbox();
        inbox.select(2);
        inbox.set_reply("Approved".to_string());
        inbox.begin_send();

        let report = inbox.finish_send(true).unwrap();
        assert_eq!(report, ReplyReport::Delivered { to: "b@x.com".to_string() });
        assert_eq!(report.message(), "Reply sent successfully to b@x.com");
        assert!(inbox.selected().is_none());
        assert_eq!(inbox.reply(), "");
        assert!(!inbox.is_sending());

        assert!(inbox.finish_send(true).is_none());
    }

    #[test]
    fn test_failed_send_keeps_the_email_visible() {
        let mut inbox = inbox();
        inbox.select(1);
        inbox.set_reply("Please visit our branch".to_string());
        inbox.begin_send();

        let report = inbox.finish_send(false).unwrap();
        let ReplyReport::NotDelivered(ref email) = report else {
            panic!("expected NotDelivered, got {report:?}");
        };
        assert_eq!(email.to, "a@x.com");
        assert_eq!(email.body, "Please visit our branch");
        assert!(report.message().contains("Subject: Reply from Goal Getters"));
        assert!(inbox.selected().is_none());
    }

    #[test]
    fn test_selection_is_locked_while_sending() {
        let mut inbox = inbox();
        inbox.select(1);
        inbox.set_reply("Approved".to_string());
        inbox.begin_send().unwrap();

        assert!(!inbox.select(2));
        assert_eq!(inbox.selected().unwrap().email, "a@x.com");

        let report = inbox.finish_send(false).unwrap();
        assert_eq!(
            report,
            ReplyReport::NotDelivered(OutgoingEmail {
                to: "a@x.com".to_string(),
                subject: REPLY_SUBJECT.to_string(),
                body: "Approved".to_string(),
            })
        );
        assert!(inbox.selected().is_none());
        assert!(inbox.select(2));
    }

    #[test]
    fn test_reload_during_send_keeps_the_report() {
        let mut inbox = inbox();
        inbox.select(1);
        inbox.set_reply("Approved".to_string());
        inbox.begin_send().unwrap();

        inbox.load(Vec::new());
        assert!(inbox.selected().is_none());
        assert!(inbox.is_sending());

        let report = inbox.finish_send(false).unwrap();
        let ReplyReport::NotDelivered(email) = report else {
            panic!("expected NotDelivered, got {report:?}");
        };
        assert_eq!(email.to, "a@x.com");
        assert_eq!(email.body, "Approved");
        assert!(!inbox.is_sending());
    }

    #[test]
    fn test_delivered_report_names_the_recipient_not_the_new_selection() {
        let mut inbox = inbox();
        inbox.select(2);
        inbox.set_reply("Approved".to_string());
        inbox.begin_send().unwrap();

        // A reload that brings the row back keeps it selected until the send ends.
        inbox.load(vec![submission(2, "b@x.com"), submission(1, "a@x.com")]);
        let report = inbox.finish_send(true).unwrap();
        assert_eq!(report, ReplyReport::Delivered { to: "b@x.com".to_string() });
        assert!(inbox.selected().is_none());
        assert_eq!(inbox.reply(), "");
    }

    #[test]
    fn test_reload_refreshes_or_drops_selection() {
        let mut inbox = inbox();
        inbox.select(1);
        inbox.set_reply("Draft".to_string());

        let mut updated = submission(1, "a@x.com");
        updated.message = "Edited".to_string();
        inbox.load(vec![submission(3, "c@x.com"), updated]);
        assert_eq!(inbox.selected().unwrap().message, "Edited");
        assert_eq!(inbox.reply(), "Draft");

        inbox.load(vec![submission(3, "c@x.com")]);
        assert!(inbox.selected().is_none());
        assert_eq!(inbox.reply(), "");
    }
}
