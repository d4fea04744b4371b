//! Contact form state. Submission is simulated; nothing is sent.

use std::time::Duration;

use crate::common::FormError;

/// How long the simulated send takes.
pub const SEND_DELAY: Duration = Duration::from_secs(2);
/// How long the success banner stays before the form clears.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [
            ("name", "Name", &self.name),
            ("email", "Email", &self.email),
            ("subject", "Subject", &self.subject),
            ("message", "Message", &self.message),
        ];
        for (field, label, value) in fields {
            if value.trim().is_empty() {
                return Err(FormError::Required { field, label });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Editing,
    Sending,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub message: ContactMessage,
    phase: ContactPhase,
}

impl ContactForm {
    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Starts sending. Returns `Ok(false)` when a send is already under way.
    pub fn submit(&mut self) -> Result<bool, FormError> {
        if self.phase != ContactPhase::Editing {
            return Ok(false);
        }
        self.message.validate()?;
        self.phase = ContactPhase::Sending;
        Ok(true)
    }

    pub fn delivered(&mut self) {
        if self.phase == ContactPhase::Sending {
            tracing::info!(subject = %self.message.subject, "contact message accepted");
            self.phase = ContactPhase::Sent;
        }
    }

    /// Clears the form after the success banner.
    pub fn reset(&mut self) {
        if self.phase == ContactPhase::Sent {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FormFeedback;

    fn filled() -> ContactForm {
        ContactForm {
            message: ContactMessage {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: "Hello".into(),
                message: "Nice site".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(true));
        assert_eq!(form.phase(), ContactPhase::Sending);
        assert_eq!(form.submit(), Ok(false));

        form.delivered();
        assert_eq!(form.phase(), ContactPhase::Sent);

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_blank_field_blocks_submit() {
        let mut form = filled();
        form.message.subject = "   ".into();
        assert_eq!(
            form.submit(),
            Err(FormError::Required {
                field: "subject",
                label: "Subject"
            })
        );
        assert_eq!(form.phase(), ContactPhase::Editing);
    }

    #[test]
    fn test_blank_field_is_reported_under_that_field() {
        let mut form = filled();
        form.message.email.clear();
        let Err(err) = form.submit() else {
            panic!("blank email was accepted");
        };

        let feedback = FormFeedback::from_error(&err);
        assert_eq!(feedback.for_field("email"), Some("Email is required"));
        assert_eq!(feedback.for_field("name"), None);
        assert_eq!(feedback.panel(), None);
    }
}
