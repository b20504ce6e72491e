pub(crate) mod config;
pub(crate) mod contact;
pub(crate) mod error;
pub(crate) mod relay;
pub(crate) mod tilt;

pub use config::{
    ChannelKind, ContactChannel, Owner, RelayConfig, SceneConfig, Service,
    SiteConfig,
};
pub use contact::{
    deliver, ContactField, ContactFormState, DeliveryOutcome, EmailPayload,
    Notice, Notifier,
};
pub use error::{ConfigError, RelayError};
pub use relay::{EmailJsRelay, Relay, RelayFuture};
pub use tilt::TiltOptions;
