//! Configuration loading — TOML document with per-section defaults.
//!
//! Every field has a sensible default, so an empty document (or no document at
//! all) yields the stock dashboard: `/status` polled every two seconds and the
//! standard page layout.

use std::time::Duration;

use serde::Deserialize;
use terrarium_domain::layout::{ButtonBinding, DashboardLayout, TextBinding};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Server endpoints.
    pub api: ApiConfig,
    /// Polling schedule.
    pub polling: PollingConfig,
    /// Page bindings and styling.
    pub display: DisplayConfig,
}

/// Server endpoint configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL of the status snapshot (`GET`).
    pub status_url: String,
    /// URL accepting control commands (`POST`).
    pub control_url: String,
}

/// Polling schedule configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Delay between two polls, in milliseconds.
    pub interval_ms: u32,
}

/// Page bindings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// CSS class marking a button whose actuator is `ON`.
    pub active_class: String,
    /// Text bindings; the stock layout when omitted.
    pub text: Option<Vec<TextBinding>>,
    /// Button bindings; the stock layout when omitted.
    pub buttons: Option<Vec<ButtonBinding>>,
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling interval must be non-zero".to_string(),
            ));
        }
        if self.api.status_url.is_empty() || self.api.control_url.is_empty() {
            return Err(ConfigError::Validation(
                "api urls must not be empty".to_string(),
            ));
        }
        if self.display.active_class.trim().is_empty() {
            return Err(ConfigError::Validation(
                "active class must not be empty".to_string(),
            ));
        }
        let layout = self.layout();
        let text_ids = layout.text.iter().map(|b| b.element_id.as_str());
        let button_ids = layout.buttons.iter().map(|b| b.element_id.as_str());
        if text_ids.chain(button_ids).any(str::is_empty) {
            return Err(ConfigError::Validation(
                "element ids must not be empty".to_string(),
            ));
        }
        if layout.buttons.iter().any(|b| b.actuator.is_empty()) {
            return Err(ConfigError::Validation(
                "button actuators must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Delay between two polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.polling.interval_ms))
    }

    /// Effective page layout, falling back to the stock bindings per list.
    #[must_use]
    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout {
            text: self
                .display
                .text
                .clone()
                .unwrap_or_else(DashboardLayout::default_text),
            buttons: self
                .display
                .buttons
                .clone()
                .unwrap_or_else(DashboardLayout::default_buttons),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            status_url: "/status".to_string(),
            control_url: "/update_control".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 2000 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            active_class: "button-active".to_string(),
            text: None,
            buttons: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse dashboard config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
