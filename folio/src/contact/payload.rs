use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;

/// Template parameters of one contact message, named as the relay's email
/// template expects them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

impl EmailPayload {
    pub fn new(
        name: &str,
        email: &str,
        message: &str,
        relay: &RelayConfig,
    ) -> Self {
        Self {
            from_name: name.to_string(),
            to_name: relay.to_name.clone(),
            from_email: email.to_string(),
            to_email: relay.to_email.clone(),
            message: message.to_string(),
        }
    }
}
