use std::future::Future;
use std::pin::Pin;

use crate::contact::EmailPayload;
use crate::error::RelayError;

mod emailjs;
mod http;

pub use emailjs::EmailJsRelay;

pub type RelayFuture<'a> =
    Pin<Box<dyn Future<Output = Result<(), RelayError>> + 'a>>;

/// A hosted service that turns a payload into an email. One call is one
/// delivery attempt; implementations do not retry.
pub trait Relay {
    fn send<'a>(&'a self, payload: &'a EmailPayload) -> RelayFuture<'a>;
}
