//! Page configuration.
//!
//! `index.html` may embed a JSON block
//! `<script id="landing-config" type="application/json">`; any field left out
//! keeps its default. A broken block never takes the page down: the caller
//! logs the error and renders with defaults.

use std::str::FromStr;

use scroll_capture::{CaptureConfig, ConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use crate::content::{LandingCopy, PlanCard};

/// Id of the inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Everything the page reads at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Max log level forwarded to the browser console
    pub log_level: String,
    /// Carousel gesture capture tunables
    pub capture: CaptureConfig,
    /// Section copy
    pub copy: LandingCopy,
    /// Carousel cards; empty means the built-in set
    pub plan_cards: Vec<PlanCard>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            capture: CaptureConfig::default(),
            copy: LandingCopy::default(),
            plan_cards: Vec::new(),
        }
    }
}

/// Why the embedded config was rejected.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Not JSON, or the wrong shape
    #[error("landing config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed, but the capture thresholds are inconsistent
    #[error("invalid capture settings: {0}")]
    Capture(#[from] ConfigError),
}

impl LandingConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigLoadError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.capture.validate()?;
        Ok(config)
    }

    /// Configured level, `INFO` when the string is not a level name.
    pub fn level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or(Level::INFO)
    }
}

/// Read the config block from the current document.
///
/// A missing block (or no document at all) yields the defaults.
pub fn load_from_document() -> Result<LandingConfig, ConfigLoadError> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) => LandingConfig::from_json(&raw),
        None => Ok(LandingConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_block_means_defaults() {
        let config = LandingConfig::from_json("  \n").expect("blank is fine");
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn partial_block_overrides_only_what_it_names() {
        let config = LandingConfig::from_json(
            r#"{
                "log_level": "debug",
                "capture": { "free_scroll_idle_ms": 250 },
                "copy": { "plans_title": "Planes" }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.capture.free_scroll_idle_ms, 250);
        assert_eq!(config.capture.activate_ratio, 0.7);
        assert_eq!(config.copy.plans_title, "Planes");
        assert!(config.plan_cards.is_empty());
    }

    #[test]
    fn custom_cards_are_read() {
        let config = LandingConfig::from_json(
            r#"{ "plan_cards": [
                { "label": "A", "title": "Uno", "description": "d", "width": 500 },
                { "label": "B", "title": "Dos", "description": "d",
                  "overlay": { "stat": "3", "text": "países" } }
            ] }"#,
        )
        .expect("valid cards");

        assert_eq!(config.plan_cards.len(), 2);
        assert_eq!(config.plan_cards[0].width, Some(500));
        assert_eq!(
            config.plan_cards[1].overlay.as_ref().map(|o| o.stat.as_str()),
            Some("3")
        );
    }

    #[test]
    fn broken_json_is_reported() {
        let err = LandingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn inconsistent_thresholds_are_reported() {
        let err = LandingConfig::from_json(
            r#"{ "capture": { "activate_ratio": 0.4, "deactivate_ratio": 0.6 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Capture(_)));
        assert!(err.to_string().starts_with("invalid capture settings"));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = LandingConfig {
            log_level: "loud".into(),
            ..LandingConfig::default()
        };
        assert_eq!(config.level(), Level::INFO);
    }
}
