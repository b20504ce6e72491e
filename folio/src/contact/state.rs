use std::str::FromStr;

use super::payload::EmailPayload;
use super::submit::DeliveryOutcome;
use crate::config::RelayConfig;

const SUBMIT_LABEL: &str = "Send Message";
const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Value of the `name` attribute of the matching form input.
    pub fn input_name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            _ => Err(()),
        }
    }
}

/// In-memory state of the contact form for one page visit.
///
/// Idle -> Submitting -> Idle. A successful delivery clears the fields, a
/// failed one leaves them as typed so the visitor can resubmit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    name: String,
    email: String,
    message: String,
    submitting: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Moves to Submitting and returns the message to send. Returns `None`
    /// without touching the state if a submission is already in flight.
    pub fn begin_submit(&mut self, relay: &RelayConfig) -> Option<EmailPayload> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(EmailPayload::new(
            &self.name,
            &self.email,
            &self.message,
            relay,
        ))
    }

    pub fn complete(&mut self, outcome: &DeliveryOutcome) {
        self.submitting = false;
        if outcome.is_ok() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;

    fn relay_config() -> RelayConfig {
        RelayConfig {
            endpoint: "https://relay.example.com/send".to_string(),
            service_id: "service_a".to_string(),
            template_id: "template_a".to_string(),
            public_key: "key_a".to_string(),
            to_name: "Timothy".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_field(ContactField::Name, "Ada".to_string());
        state.set_field(ContactField::Email, "ada@example.com".to_string());
        state.set_field(ContactField::Message, "Hi".to_string());
        state
    }

    #[test]
    fn test_new_is_empty() {
        let state = ContactFormState::new();
        for field in ContactField::ALL {
            assert_eq!(state.field(field), "");
        }
        assert!(!state.is_submitting());
        assert!(state.can_submit());
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let mut state = ContactFormState::new();
        let edits = [
            (ContactField::Name, "A"),
            (ContactField::Message, "first"),
            (ContactField::Name, "Ad"),
            (ContactField::Email, "ada@"),
            (ContactField::Name, "Ada"),
            (ContactField::Message, "second"),
        ];
        for (field, value) in edits {
            state.set_field(field, value.to_string());
        }
        assert_eq!(state.field(ContactField::Name), "Ada");
        assert_eq!(state.field(ContactField::Email), "ada@");
        assert_eq!(state.field(ContactField::Message), "second");
    }

    #[test]
    fn test_field_names() {
        for field in ContactField::ALL {
            assert_eq!(field.input_name().parse::<ContactField>(), Ok(field));
        }
        assert!("phone".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_begin_submit_builds_payload() {
        let mut state = filled();
        let payload = state.begin_submit(&relay_config()).unwrap();

        assert!(state.is_submitting());
        assert!(!state.can_submit());
        assert_eq!(state.submit_label(), "Sending...");
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.message, "Hi");
        assert_eq!(payload.to_name, "Timothy");
        assert_eq!(payload.to_email, "owner@example.com");
    }

    #[test]
    fn test_begin_submit_while_submitting() {
        let mut state = filled();
        assert!(state.begin_submit(&relay_config()).is_some());
        let snapshot = state.clone();
        assert!(state.begin_submit(&relay_config()).is_none());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_complete_success_clears() {
        let mut state = filled();
        state.begin_submit(&relay_config());
        state.complete(&Ok(()));
        assert_eq!(state, ContactFormState::new());
        assert_eq!(state.submit_label(), "Send Message");
    }

    #[test]
    fn test_complete_failure_keeps_fields() {
        let mut state = filled();
        state.begin_submit(&relay_config());
        state.complete(&Err(RelayError::Transport("offline".to_string())));
        assert!(!state.is_submitting());
        assert_eq!(state, filled());
    }
}
