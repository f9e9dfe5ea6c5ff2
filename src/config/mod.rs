use crate::components::ui::SpinnerSize;
use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub(crate) const DEFAULT_PLACEHOLDER: &str = "Type something…";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSpinnerSize(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSpinnerSize(raw) => {
                write!(f, "invalid spinner size {raw:?} (expected sm, md or lg)")
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings for the showcase page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub spinner_size: SpinnerSize,
    pub placeholder: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            spinner_size: SpinnerSize::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

pub fn parse_spinner_size(raw: &str) -> Result<SpinnerSize, ConfigError> {
    SpinnerSize::from_str(raw.trim())
        .map_err(|_| ConfigError::InvalidSpinnerSize(raw.to_string()))
}

impl ShowcaseConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reads `window.ENV`, falling back to defaults for anything missing or
    /// invalid.
    pub fn from_window() -> Self {
        let mut config = Self::default();

        if let Some(raw) = env_string(&["SPINNER_SIZE", "spinner_size"]) {
            match parse_spinner_size(&raw) {
                Ok(size) => config.spinner_size = size,
                Err(e) => warn!("{e}; using {}", config.spinner_size),
            }
        }

        if let Some(placeholder) = env_string(&["PLACEHOLDER", "placeholder"]) {
            config.placeholder = placeholder;
        }

        config
    }
}

/// First string value found on `window.ENV` among `keys`.
fn env_string(keys: &[&str]) -> Option<String> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&env, &(*key).into())
            .ok()
            .and_then(|v| v.as_string())
    })
}
