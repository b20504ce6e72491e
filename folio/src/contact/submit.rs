use log::{error, info};

use super::payload::EmailPayload;
use crate::error::RelayError;
use crate::relay::Relay;

pub type DeliveryOutcome = Result<(), RelayError>;

const DELIVERED_TEXT: &str = "Thank you! I'll respond within 24 hours.";
const FAILED_TEXT: &str = "Message failed to send. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Delivered,
    Failed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Delivered => DELIVERED_TEXT,
            Notice::Failed => FAILED_TEXT,
        }
    }
}

impl From<&DeliveryOutcome> for Notice {
    fn from(outcome: &DeliveryOutcome) -> Self {
        match outcome {
            Ok(()) => Notice::Delivered,
            Err(_) => Notice::Failed,
        }
    }
}

/// Shows the visitor the result of a submission.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Sends one message through the relay, exactly once, and tells the visitor
/// how it went. Failures are logged here and returned, never raised.
pub async fn deliver<R, N>(
    relay: &R,
    notifier: &N,
    payload: &EmailPayload,
) -> DeliveryOutcome
where
    R: Relay + ?Sized,
    N: Notifier + ?Sized,
{
    let outcome = relay.send(payload).await;
    match &outcome {
        Ok(()) => info!("Contact message delivered"),
        Err(e) => error!("Failed to deliver contact message: {}", e),
    }
    notifier.notify(Notice::from(&outcome));
    outcome
}
