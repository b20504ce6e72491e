use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_yaml::Error),
    Missing(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid site config: {}", e),
            ConfigError::Missing(key) => {
                write!(f, "Missing site config value: {}", key)
            }
        }
    }
}

impl Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        ConfigError::Parse(error)
    }
}

/// Any way a message can fail to reach the relay. The form treats every
/// variant the same: one failure notice, fields kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    Transport(String),
    Rejected { status: u16, body: String },
    Encode(String),
    Unavailable(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RelayError::Transport(e) => write!(f, "Transport error: {}", e),
            RelayError::Rejected { status, body } => {
                write!(f, "Relay rejected message: {} - {}", status, body)
            }
            RelayError::Encode(e) => write!(f, "Encode error: {}", e),
            RelayError::Unavailable(e) => {
                write!(f, "Relay unavailable: {}", e)
            }
        }
    }
}

impl Error for RelayError {}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Encode(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RelayError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        RelayError::Transport(
            error
                .as_string()
                .unwrap_or_else(|| format!("{:?}", error)),
        )
    }
}
