//! Viewport visibility of the carousel container.
//!
//! Every trigger (intersection observer, window scroll/resize, pointer leave)
//! goes through [`visibility_ratio`], so the hysteresis thresholds always see
//! the same number for the same geometry.

use serde::{Deserialize, Serialize};

/// Vertical extent of an element in viewport coordinates.
///
/// Only the vertical axis matters for capture; horizontal overlap is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    /// Distance from the viewport top to the element's top edge
    pub top: f64,
    /// Distance from the viewport top to the element's bottom edge
    pub bottom: f64,
    /// Element height
    pub height: f64,
}

impl ViewportRect {
    /// Rect spanning `top..bottom`, height derived from the two edges.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom,
            height: (bottom - top).max(0.0),
        }
    }
}

/// Fraction of `rect` that lies inside a viewport of `viewport_height`.
///
/// The result is always within `[0.0, 1.0]`. A zero-height rect is treated
/// as 1px tall so the division never blows up.
pub fn visibility_ratio(rect: ViewportRect, viewport_height: f64) -> f64 {
    let visible_bottom = rect.bottom.min(viewport_height);
    let visible_top = rect.top.max(0.0);
    let intersection = (visible_bottom - visible_top).max(0.0);
    (intersection / rect.height.max(1.0)).clamp(0.0, 1.0)
}
