//! Application Config
//!
//! Read from the `data-config` JSON attribute of the mount element and
//! shared with components via the Leptos Context API.

use leptos::prelude::*;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::AppError;

/// Attribute on the mount element holding the JSON config
pub const CONFIG_ATTRIBUTE: &str = "data-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading text
    pub title: String,
    /// Placeholder of the new-item input
    pub placeholder: String,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            placeholder: "Add a new todo".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the config attribute value; a missing or blank value means defaults.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    /// Like `from_attribute`, but a malformed value falls back to defaults.
    /// The parse error is handed back so it can be logged once logging is up.
    pub fn from_attribute_or_default(value: Option<&str>) -> (Self, Option<AppError>) {
        match Self::from_attribute(value) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Load config from the mount element
    pub fn from_element(element: &web_sys::Element) -> (Self, Option<AppError>) {
        Self::from_attribute_or_default(element.get_attribute(CONFIG_ATTRIBUTE).as_deref())
    }
}

/// Get the app config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
