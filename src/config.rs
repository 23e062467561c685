//! Page-level configuration.
//!
//! Every selector, class name and timing constant the behaviors use is read
//! from [`EnhanceConfig`]. A page can override any subset of fields with a
//! JSON block:
//!
//! ```html
//! <script type="application/json" id="site-enhance-config">
//!   { "header_clearance_px": 64, "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults; a malformed block is logged and
//! ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use web_sys::Document;

use crate::consts;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    pub storage_key: String,
    pub light_class: String,
    pub theme_toggle_id: String,
    pub year_selector: String,
    pub anchor_selector: String,
    pub header_clearance_px: f64,
    pub collapsible_toggle_selector: String,
    pub collapsible_group_selector: String,
    pub collapsible_content_selector: String,
    pub open_class: String,
    pub tooltip_selector: String,
    pub tooltip_class: String,
    pub tooltip_offset_px: f64,
    pub tooltip_hide_shift_px: f64,
    pub counter_selector: String,
    pub counter_duration_ms: f64,
    pub counter_threshold: f64,
    pub log_level: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            light_class: consts::LIGHT_CLASS.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            year_selector: consts::YEAR_SELECTOR.to_owned(),
            anchor_selector: consts::ANCHOR_SELECTOR.to_owned(),
            header_clearance_px: consts::HEADER_CLEARANCE_PX,
            collapsible_toggle_selector: consts::COLLAPSIBLE_TOGGLE_SELECTOR.to_owned(),
            collapsible_group_selector: consts::COLLAPSIBLE_GROUP_SELECTOR.to_owned(),
            collapsible_content_selector: consts::COLLAPSIBLE_CONTENT_SELECTOR.to_owned(),
            open_class: consts::OPEN_CLASS.to_owned(),
            tooltip_selector: consts::TOOLTIP_SELECTOR.to_owned(),
            tooltip_class: consts::TOOLTIP_CLASS.to_owned(),
            tooltip_offset_px: consts::TOOLTIP_OFFSET_PX,
            tooltip_hide_shift_px: consts::TOOLTIP_HIDE_SHIFT_PX,
            counter_selector: consts::COUNTER_SELECTOR.to_owned(),
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            counter_threshold: consts::COUNTER_THRESHOLD,
            log_level: "warn".to_owned(),
        }
    }
}

impl EnhanceConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the behaviors cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.counter_duration_ms.is_finite() && self.counter_duration_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "counter_duration_ms must be positive, got {}",
                self.counter_duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.counter_threshold) {
            return Err(ConfigError::Invalid(format!(
                "counter_threshold must be within [0, 1], got {}",
                self.counter_threshold
            )));
        }
        if !self.header_clearance_px.is_finite() {
            return Err(ConfigError::Invalid("header_clearance_px must be finite".to_owned()));
        }
        Ok(())
    }

    /// Log filter for this page; unknown names fall back to `warn`.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }

    /// Load the config embedded in `document`, or the defaults when there is none.
    #[must_use]
    pub fn from_page(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(consts::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("site-enhance: ignoring #{}: {err}", consts::CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }
}
