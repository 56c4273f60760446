//! The card track as seen by the controller.

/// Snapshot of the track's horizontal scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackMetrics {
    /// Current horizontal offset (`scrollLeft`)
    pub scroll_left: f64,
    /// Visible width (`clientWidth`)
    pub client_width: f64,
    /// Total scrollable width (`scrollWidth`)
    pub scroll_width: f64,
}

impl TrackMetrics {
    /// Metrics from the three raw DOM values.
    pub fn new(scroll_left: f64, client_width: f64, scroll_width: f64) -> Self {
        Self {
            scroll_left,
            client_width,
            scroll_width,
        }
    }

    /// Largest reachable offset, never negative.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Whether the track is at its left edge.
    pub fn at_start(&self, tolerance: f64) -> bool {
        self.scroll_left <= tolerance
    }

    /// Whether the track is at its right edge.
    ///
    /// Browsers report fractional offsets on zoomed pages, hence the `ceil`.
    pub fn at_end(&self, tolerance: f64) -> bool {
        (self.scroll_left + self.client_width).ceil() >= self.scroll_width - tolerance
    }

    /// Whether a move in the given direction would push past an edge.
    pub fn blocks(&self, forward: bool, tolerance: f64) -> bool {
        if forward {
            self.at_end(tolerance)
        } else {
            self.at_start(tolerance)
        }
    }
}

/// Reads and moves the scrollable track element.
pub trait TrackSurface {
    /// Current scroll geometry.
    fn metrics(&self) -> TrackMetrics;

    /// `scrollLeft += delta`, without animation.
    fn scroll_by_immediate(&mut self, delta: f64);

    /// Animated relative scroll.
    fn scroll_by_smooth(&mut self, delta: f64);

    /// Animated absolute scroll.
    fn scroll_to_smooth(&mut self, left: f64);

    /// Toggle the class that disables CSS scroll snapping.
    fn set_snap_suppressed(&mut self, suppressed: bool);

    /// Toggle `aria-live="polite"` while input is captured.
    fn set_live_region(&mut self, live: bool);
}

/// Everything the controller needs from its environment.
///
/// Listener attachment and the free-scroll timer are side effects of state
/// transitions; the host decides how they are realised.
pub trait CaptureHost: TrackSurface {
    /// Start listening for window wheel/keydown and track touchstart/touchmove.
    fn attach_gesture_listeners(&mut self);

    /// Stop listening for everything [`CaptureHost::attach_gesture_listeners`] added.
    fn detach_gesture_listeners(&mut self);

    /// (Re)start the single-shot idle timer, cancelling any pending one.
    fn arm_free_scroll_timer(&mut self, idle_ms: u32);

    /// Cancel the idle timer if pending.
    fn cancel_free_scroll_timer(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_on_a_2000px_track() {
        let start = TrackMetrics::new(0.0, 960.0, 2000.0);
        assert!(start.at_start(1.0));
        assert!(!start.at_end(1.0));
        assert_eq!(start.max_scroll(), 1040.0);

        let end = TrackMetrics::new(1040.0, 960.0, 2000.0);
        assert!(end.at_end(1.0));
        assert!(!end.at_start(1.0));
    }

    #[test]
    fn sub_pixel_offsets_count_as_edges() {
        assert!(TrackMetrics::new(0.6, 960.0, 2000.0).at_start(1.0));
        assert!(TrackMetrics::new(1038.4, 960.0, 2000.0).at_end(1.0));
        assert!(!TrackMetrics::new(1030.0, 960.0, 2000.0).at_end(1.0));
    }

    #[test]
    fn blocks_picks_the_edge_for_the_direction() {
        let start = TrackMetrics::new(0.0, 960.0, 2000.0);
        assert!(start.blocks(false, 1.0));
        assert!(!start.blocks(true, 1.0));
    }

    #[test]
    fn track_without_overflow_is_at_both_edges() {
        let metrics = TrackMetrics::new(0.0, 960.0, 900.0);
        assert!(metrics.at_start(1.0));
        assert!(metrics.at_end(1.0));
        assert_eq!(metrics.max_scroll(), 0.0);
    }
}
