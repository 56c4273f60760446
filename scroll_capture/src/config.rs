//! Capture thresholds and scroll distances.
//!
//! Every field has a default, so a partial JSON object is a valid override:
//!
//! ```rust
//! use scroll_capture::CaptureConfig;
//!
//! let config: CaptureConfig = serde_json::from_str(r#"{ "free_scroll_idle_ms": 200 }"#).unwrap();
//! assert_eq!(config.free_scroll_idle_ms, 200);
//! assert_eq!(config.activate_ratio, 0.7);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables for the capture controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Visibility ratio at or above which capture turns on
    pub activate_ratio: f64,
    /// Visibility ratio at or below which capture turns off
    pub deactivate_ratio: f64,
    /// Idle window after a direct scroll before snapping is restored
    pub free_scroll_idle_ms: u32,
    /// Arrow-key step as a fraction of the track's visible width
    pub step_fraction: f64,
    /// Lower bound for the arrow-key step
    pub min_step_px: f64,
    /// Page step as a fraction of the track's visible width
    pub page_fraction: f64,
    /// Slack when deciding whether the track sits at either end
    pub edge_tolerance_px: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            activate_ratio: 0.7,
            deactivate_ratio: 0.6,
            free_scroll_idle_ms: 140,
            step_fraction: 0.2,
            min_step_px: 40.0,
            page_fraction: 0.9,
            edge_tolerance_px: 1.0,
        }
    }
}

/// Reasons a [`CaptureConfig`] is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A ratio threshold is outside `0.0..=1.0`
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    RatioOutOfRange {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// No hysteresis band between the two thresholds
    #[error("deactivate_ratio ({deactivate}) must be below activate_ratio ({activate})")]
    EmptyHysteresisBand {
        /// Configured activation threshold
        activate: f64,
        /// Configured deactivation threshold
        deactivate: f64,
    },
    /// A distance or fraction that must be positive is not
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

impl CaptureConfig {
    /// Check the invariants the controller relies on.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("activate_ratio", self.activate_ratio),
            ("deactivate_ratio", self.deactivate_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { name, value });
            }
        }

        if self.deactivate_ratio >= self.activate_ratio {
            return Err(ConfigError::EmptyHysteresisBand {
                activate: self.activate_ratio,
                deactivate: self.deactivate_ratio,
            });
        }

        for (name, value) in [
            ("free_scroll_idle_ms", f64::from(self.free_scroll_idle_ms)),
            ("step_fraction", self.step_fraction),
            ("page_fraction", self.page_fraction),
        ] {
            // Written as a negated comparison so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if !(self.min_step_px >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "min_step_px",
                value: self.min_step_px,
            });
        }
        if !(self.edge_tolerance_px >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "edge_tolerance_px",
                value: self.edge_tolerance_px,
            });
        }

        Ok(())
    }

    /// Arrow-key distance for a track `client_width` pixels wide.
    pub fn step_distance(&self, client_width: f64) -> f64 {
        (client_width * self.step_fraction).round().max(self.min_step_px)
    }

    /// PageUp/PageDown/Space distance for a track `client_width` pixels wide.
    pub fn page_distance(&self, client_width: f64) -> f64 {
        client_width * self.page_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CaptureConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: CaptureConfig =
            serde_json::from_str(r#"{"activate_ratio": 0.8}"#).expect("valid json");
        assert_eq!(
            config,
            CaptureConfig {
                activate_ratio: 0.8,
                ..CaptureConfig::default()
            }
        );
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let config = CaptureConfig {
            activate_ratio: 0.5,
            deactivate_ratio: 0.6,
            ..CaptureConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyHysteresisBand {
                activate: 0.5,
                deactivate: 0.6,
            })
        );
    }

    #[test]
    fn rejects_ratio_above_one() {
        let config = CaptureConfig {
            activate_ratio: 1.5,
            ..CaptureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RatioOutOfRange {
                name: "activate_ratio",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_idle_window() {
        let config = CaptureConfig {
            free_scroll_idle_ms: 0,
            ..CaptureConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "free_scroll_idle_ms must be positive, got 0");
    }

    #[test]
    fn rejects_nan_fraction() {
        let config = CaptureConfig {
            page_fraction: f64::NAN,
            ..CaptureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn step_distance_has_floor() {
        let config = CaptureConfig::default();
        assert_eq!(config.step_distance(100.0), 40.0);
        assert_eq!(config.step_distance(960.0), 192.0);
        assert_eq!(config.step_distance(1001.0), 200.0);
    }

    #[test]
    fn page_distance_is_ninety_percent() {
        let config = CaptureConfig::default();
        assert!((config.page_distance(960.0) - 864.0).abs() < 1e-9);
    }
}
