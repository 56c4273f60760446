//! # scroll-capture
//!
//! Gesture capture for horizontally scrolling card carousels.
//!
//! While a carousel container is mostly inside the viewport, vertical input
//! (mouse wheel, arrow/page keys, vertical touch drags) is redirected into
//! horizontal movement of the card track. At either end of the track the
//! input is released again so the page keeps scrolling normally.
//!
//! The crate is DOM-free. The browser side implements [`CaptureHost`] on top
//! of real elements, listeners and timers; tests implement it in memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use scroll_capture::{CaptureConfig, Controller, ViewportRect, WheelInput, visibility_ratio};
//! # use scroll_capture::{CaptureHost, TrackMetrics, TrackSurface};
//! # #[derive(Default)]
//! # struct Track { left: f64, listening: bool }
//! # impl TrackSurface for Track {
//! #     fn metrics(&self) -> TrackMetrics { TrackMetrics::new(self.left, 960.0, 2000.0) }
//! #     fn scroll_by_immediate(&mut self, delta: f64) { self.left += delta; }
//! #     fn scroll_by_smooth(&mut self, delta: f64) { self.left += delta; }
//! #     fn scroll_to_smooth(&mut self, left: f64) { self.left = left; }
//! #     fn set_snap_suppressed(&mut self, _: bool) {}
//! #     fn set_live_region(&mut self, _: bool) {}
//! # }
//! # impl CaptureHost for Track {
//! #     fn attach_gesture_listeners(&mut self) { self.listening = true; }
//! #     fn detach_gesture_listeners(&mut self) { self.listening = false; }
//! #     fn arm_free_scroll_timer(&mut self, _: u32) {}
//! #     fn cancel_free_scroll_timer(&mut self) {}
//! # }
//! let mut host = Track::default();
//! let mut controller = Controller::new(CaptureConfig::default());
//!
//! let rect = ViewportRect::new(0.0, 770.0);
//! controller.observe_ratio(&mut host, visibility_ratio(rect, 770.0));
//! assert!(controller.is_active());
//!
//! let outcome = controller.on_wheel(&mut host, WheelInput::vertical(100.0));
//! assert!(outcome.prevent_default);
//! ```
//!
//! ## Architecture
//!
//! - [`visibility`] - the single ratio function shared by every trigger
//! - [`config`] - thresholds and distances, with validation
//! - [`track`] - track metrics and the host traits
//! - [`gesture`] - wheel / key / touch input and what the host must do with the event
//! - [`controller`] - the two-state capture machine

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod gesture;
pub mod track;
pub mod visibility;

pub use config::{CaptureConfig, ConfigError};
pub use controller::{CaptureState, Controller, Transition};
pub use gesture::{Disposition, KeyCommand, KeyInput, WheelInput, dominant_delta};
pub use track::{CaptureHost, TrackMetrics, TrackSurface};
pub use visibility::{ViewportRect, visibility_ratio};
