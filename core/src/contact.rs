//! Contact form with a simulated submission
//!
//! Nothing is sent anywhere: submitting shows "sending" for a moment,
//! then "sent", then the form resets. The timer runs as a tokio task tied
//! to the form through a cancellation token, so leaving the page (or
//! dropping the form) stops it, and late events are discarded by
//! generation.

use crate::content::page_source;
use crate::error::{DevfolioError, Result};
use crate::router::Route;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::{CancellationToken, DropGuard};

pub const SENDING_DURATION: Duration = Duration::from_millis(1500);
pub const SENT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
            Self::Error => "Failed to send. Try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Timer milestones reported by the submission task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    Delivered { generation: u64 },
    Settled { generation: u64 },
}

/// Values captured when the form was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    name: String,
    email: String,
    message: String,
}

#[derive(Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    focused: ContactField,
    status: SubmissionStatus,
    generation: u64,
    snapshot: Option<Snapshot>,
    last_error: Option<&'static str>,
    task: Option<DropGuard>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn focused(&self) -> ContactField {
        self.focused
    }

    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = field;
    }

    pub fn enter_char(&mut self, c: char) {
        let field = self.focused;
        self.field_mut(field).push(c);
        self.last_error = None;
    }

    pub fn delete_char(&mut self) {
        let field = self.focused;
        self.field_mut(field).pop();
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if self.name.trim().is_empty() {
            Some("Name is required")
        } else if self.email.trim().is_empty() {
            Some("Email address is required")
        } else if !self.email.contains('@') {
            Some("Please enter a valid email address")
        } else if self.message.trim().is_empty() {
            Some("Message is required")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(DevfolioError::InvalidContactForm { reason }),
            None => Ok(()),
        }
    }

    /// Start the simulated submission. Must be called inside a tokio runtime.
    ///
    /// Ignored while a submission is already in flight.
    pub fn submit(&mut self, events: UnboundedSender<ContactEvent>) -> Result<()> {
        if matches!(self.status, SubmissionStatus::Sending | SubmissionStatus::Sent) {
            return Ok(());
        }
        if let Err(e) = self.validate() {
            if let DevfolioError::InvalidContactForm { reason } = e {
                self.last_error = Some(reason);
            }
            return Err(e);
        }

        self.last_error = None;
        self.generation += 1;
        self.snapshot = Some(Snapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        });

        if events.is_closed() {
            self.status = SubmissionStatus::Error;
            return Ok(());
        }

        self.status = SubmissionStatus::Sending;
        crate::info_log!("contact form submitted by {}", self.email);

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => return,
                _ = tokio::time::sleep(SENDING_DURATION) => {}
            }
            if events.send(ContactEvent::Delivered { generation }).is_err() {
                return;
            }
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(SENT_DURATION) => {
                    let _ = events.send(ContactEvent::Settled { generation });
                }
            }
        });
        self.task = Some(token.drop_guard());
        Ok(())
    }

    /// Apply a timer event; false when it belongs to an abandoned submission
    pub fn apply(&mut self, event: ContactEvent) -> bool {
        match event {
            ContactEvent::Delivered { generation } if generation == self.generation => {
                if self.status != SubmissionStatus::Sending {
                    return false;
                }
                self.status = SubmissionStatus::Sent;
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focused = ContactField::Name;
                true
            }
            ContactEvent::Settled { generation } if generation == self.generation => {
                if self.status != SubmissionStatus::Sent {
                    return false;
                }
                self.status = SubmissionStatus::Idle;
                self.snapshot = None;
                self.task = None;
                true
            }
            _ => {
                crate::debug_log!("discarding stale contact event {:?}", event);
                false
            }
        }
    }

    /// The owning page went away: cancel any in-flight submission
    pub fn teardown(&mut self) {
        if self.task.take().is_some() {
            crate::debug_log!("contact submission cancelled");
        }
        self.generation += 1;
        if matches!(self.status, SubmissionStatus::Sending | SubmissionStatus::Sent) {
            self.status = SubmissionStatus::Idle;
            self.snapshot = None;
        }
    }

    /// Contact page source, with submitted values spliced in while in flight
    pub fn code_preview(&self) -> String {
        let source = page_source(Route::Contact);
        match &self.snapshot {
            Some(snapshot) => source.replacen(
                "formData: ContactForm = {",
                &format!(
                    "formData: ContactForm = {{\n  name: \"{}\",\n  email: \"{}\",\n  message: \"{}\",",
                    snapshot.name, snapshot.email, snapshot.message
                ),
                1,
            ),
            None => source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Hello!".to_string();
        form
    }

    #[test]
    fn test_validation() {
        let mut form = ContactForm::new();
        assert!(form.validate().is_err());

        form.name = "Ada".to_string();
        form.email = "not-an-email".to_string();
        form.message = "hi".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid email address");

        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_field_editing() {
        let mut form = ContactForm::new();
        for c in "Ada".chars() {
            form.enter_char(c);
        }
        form.focus_next();
        form.enter_char('x');
        form.delete_char();
        form.enter_char('a');
        assert_eq!(form.field(ContactField::Name), "Ada");
        assert_eq!(form.field(ContactField::Email), "a");
        assert_eq!(form.focused(), ContactField::Email);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submission_does_not_start() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut form = ContactForm::new();
        assert!(form.submit(tx).is_err());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.last_error(), Some("Name is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_lifecycle() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut form = filled();
        form.submit(tx).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert!(form.code_preview().contains("email: \"ada@example.com\","));

        let delivered = rx.recv().await.unwrap();
        assert!(form.apply(delivered));
        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());

        let settled = rx.recv().await.unwrap();
        assert!(form.apply(settled));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.code_preview(), page_source(Route::Contact));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_while_sending_is_ignored() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut form = filled();
        form.submit(tx.clone()).unwrap();
        form.submit(tx).unwrap();

        assert_eq!(rx.recv().await, Some(ContactEvent::Delivered { generation: 1 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_and_discards() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut form = filled();
        form.submit(tx).unwrap();

        form.teardown();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        // Task exits without reporting; its sender goes away
        assert_eq!(rx.recv().await, None);

        // An event that raced the teardown is ignored
        assert!(!form.apply(ContactEvent::Delivered { generation: 1 }));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_form_cancels_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut form = filled();
        form.submit(tx).unwrap();
        drop(form);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_reports_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut form = filled();
        form.submit(tx).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Error);

        // Error is not terminal; a new attempt may start
        let (tx, _rx) = mpsc::unbounded_channel();
        form.submit(tx).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }
}
