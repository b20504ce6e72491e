mod payload;
mod state;
mod submit;

pub use payload::EmailPayload;
pub use state::{ContactField, ContactFormState};
pub use submit::{deliver, DeliveryOutcome, Notice, Notifier};
