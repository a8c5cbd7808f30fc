//! Page configuration.
//!
//! Read once at start-up from an optional
//! `<script type="application/json" id="site-config">` element. Every field has
//! a default, so the element may be absent or list only what it overrides.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SiteError;

/// Id of the element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Relative path the inquiry is POSTed to.
    pub endpoint: String,
    /// Section shown on page load.
    pub default_section: String,
    /// Section the product shortcut navigates to.
    pub contact_section: String,
    pub success_display_ms: u64,
    pub shortcut_delay_ms: u64,
    pub navbar_threshold_px: f64,
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
    pub fade_in: bool,
    pub fade_in_threshold: f64,
    /// `tracing` filter for the browser console.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: "php/contact_handler.php".to_string(),
            default_section: "home".to_string(),
            contact_section: "contact".to_string(),
            success_display_ms: 5000,
            shortcut_delay_ms: 300,
            navbar_threshold_px: 50.0,
            counter_steps: 50,
            counter_interval_ms: 30,
            fade_in: true,
            fade_in_threshold: 0.1,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn shortcut_delay(&self) -> Duration {
        Duration::from_millis(self.shortcut_delay_ms)
    }

    pub fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.counter_interval_ms)
    }
}
