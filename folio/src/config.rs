use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const SITE_YAML: &str = include_str!("../site.yaml");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub owner: Owner,
    pub overview: String,
    pub services: Vec<Service>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
    pub scene: SceneConfig,
    pub relay: RelayConfig,
}

impl SiteConfig {
    /// Parses the site configuration embedded at compile time and applies
    /// the build-time relay overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(
            SITE_YAML,
            option_env!("FOLIO_RELAY_SERVICE_ID"),
            option_env!("FOLIO_RELAY_TEMPLATE_ID"),
            option_env!("FOLIO_RELAY_PUBLIC_KEY"),
        )
    }

    /// Parses only; the relay is validated once overrides are applied.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    fn resolve(
        contents: &str,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_yaml(contents)?;
        config.relay =
            config.relay.with_overrides(service_id, template_id, public_key);
        config.relay.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Service {
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Whatsapp,
    Linkedin,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
    // open in a new tab
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    pub model_url: String,
    pub alt: String,
    #[serde(default)]
    pub auto_rotate: bool,
}

/// Routing and recipient constants for the email relay. These are fixed
/// per build, only the sender fields of a message come from the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_name: String,
    pub to_email: String,
}

impl RelayConfig {
    pub fn with_overrides(
        mut self,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        if let Some(service_id) = service_id {
            self.service_id = service_id.to_string();
        }
        if let Some(template_id) = template_id {
            self.template_id = template_id.to_string();
        }
        if let Some(public_key) = public_key {
            self.public_key = public_key.to_string();
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("relay.endpoint", &self.endpoint),
            ("relay.service_id", &self.service_id),
            ("relay.template_id", &self.template_id),
            ("relay.public_key", &self.public_key),
            ("relay.to_email", &self.to_email),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::Missing(key.to_string())),
            None => Ok(()),
        }
    }
}
