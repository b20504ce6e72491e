use std::collections::HashMap;

use serde::Serialize;

use super::http::http_post_json;
use super::{Relay, RelayFuture};
use crate::config::RelayConfig;
use crate::contact::EmailPayload;
use crate::error::RelayError;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// Relay client for the EmailJS REST API (`/api/v1.0/email/send`).
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn request_body(
        &self,
        payload: &EmailPayload,
    ) -> Result<String, RelayError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };
        Ok(serde_json::to_string(&request)?)
    }

    async fn post(&self, payload: &EmailPayload) -> Result<(), RelayError> {
        let body = self.request_body(payload)?;
        let (status, text) =
            http_post_json(&self.config.endpoint, &HashMap::new(), &body)
                .await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(RelayError::Rejected { status, body: text })
        }
    }
}

impl Relay for EmailJsRelay {
    fn send<'a>(&'a self, payload: &'a EmailPayload) -> RelayFuture<'a> {
        Box::pin(self.post(payload))
    }
}
