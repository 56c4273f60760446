//! The capture state machine.
//!
//! ```text
//!            ratio >= activate | pointer/focus enter | touch bootstrap
//!  Inactive ─────────────────────────────────────────────────────────▶ Active
//!           ◀─────────────────────────────────────────────────────────
//!            ratio <= deactivate | pointer/focus leave while hidden | teardown
//! ```
//!
//! Entering `Active` attaches the gesture listeners and marks the track as a
//! live region. Leaving it detaches them, cancels the free-scroll timer and
//! restores snapping. Both transitions are no-ops when already in the target
//! state, so overlapping triggers never register listeners twice.

use tracing::{debug, trace};

use crate::config::CaptureConfig;
use crate::gesture::{Disposition, KeyCommand, KeyInput, WheelInput, dominant_delta};
use crate::track::CaptureHost;

/// Whether vertical input is currently redirected into the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    /// Input flows to the page
    #[default]
    Inactive,
    /// Input drives the track
    Active,
}

/// A state change and the side effects that came with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Listeners attached
    Activated,
    /// Listeners detached, timer cancelled, snapping restored
    Deactivated,
}

/// Gesture capture controller for one carousel.
#[derive(Debug, Default)]
pub struct Controller {
    config: CaptureConfig,
    state: CaptureState,
    touch_y: f64,
    free_scrolling: bool,
}

impl Controller {
    /// Fresh, inactive controller.
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Tunables in use.
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Shorthand for `state() == Active`.
    pub fn is_active(&self) -> bool {
        self.state == CaptureState::Active
    }

    /// Whether snapping is currently suppressed by a direct scroll.
    pub fn is_free_scrolling(&self) -> bool {
        self.free_scrolling
    }

    /// Start capturing. Returns `None` if already active.
    pub fn activate<H: CaptureHost>(&mut self, host: &mut H) -> Option<Transition> {
        if self.is_active() {
            return None;
        }
        self.state = CaptureState::Active;
        host.attach_gesture_listeners();
        host.set_live_region(true);
        debug!("scroll capture activated");
        Some(Transition::Activated)
    }

    /// Stop capturing. Returns `None` if already inactive.
    pub fn deactivate<H: CaptureHost>(&mut self, host: &mut H) -> Option<Transition> {
        if !self.is_active() {
            return None;
        }
        self.state = CaptureState::Inactive;
        self.release(host);
        debug!("scroll capture deactivated");
        Some(Transition::Deactivated)
    }

    /// Unconditional cleanup for unmount; safe in either state.
    pub fn teardown<H: CaptureHost>(&mut self, host: &mut H) {
        self.state = CaptureState::Inactive;
        self.release(host);
        debug!("scroll capture torn down");
    }

    fn release<H: CaptureHost>(&mut self, host: &mut H) {
        host.detach_gesture_listeners();
        host.cancel_free_scroll_timer();
        host.set_snap_suppressed(false);
        host.set_live_region(false);
        self.free_scrolling = false;
    }

    /// Apply the hysteresis thresholds to a freshly measured ratio.
    pub fn observe_ratio<H: CaptureHost>(
        &mut self,
        host: &mut H,
        ratio: f64,
    ) -> Option<Transition> {
        trace!(ratio, "visibility");
        if ratio >= self.config.activate_ratio {
            self.activate(host)
        } else if ratio <= self.config.deactivate_ratio {
            self.deactivate(host)
        } else {
            None
        }
    }

    /// Pointer, mouse or keyboard focus entered the track.
    pub fn on_pointer_enter<H: CaptureHost>(&mut self, host: &mut H) -> Option<Transition> {
        self.activate(host)
    }

    /// Pointer, mouse or keyboard focus left the track; `ratio` is re-measured.
    pub fn on_pointer_leave<H: CaptureHost>(
        &mut self,
        host: &mut H,
        ratio: f64,
    ) -> Option<Transition> {
        if ratio <= self.config.deactivate_ratio {
            self.deactivate(host)
        } else {
            None
        }
    }

    /// Wheel event on the window.
    pub fn on_wheel<H: CaptureHost>(&mut self, host: &mut H, input: WheelInput) -> Disposition {
        if !self.is_active() {
            return Disposition::PASS;
        }
        let delta = dominant_delta(input);
        if self.apply_direct_delta(host, delta) {
            Disposition::CONSUME
        } else {
            Disposition::PASS
        }
    }

    /// Keydown event on the window.
    pub fn on_key<H: CaptureHost>(&mut self, host: &mut H, input: &KeyInput) -> Disposition {
        if !self.is_active() {
            return Disposition::PASS;
        }
        let Some(command) = KeyCommand::from_input(input) else {
            return Disposition::PASS;
        };

        let metrics = host.metrics();
        let tolerance = self.config.edge_tolerance_px;
        let step = self.config.step_distance(metrics.client_width);
        let page = self.config.page_distance(metrics.client_width);

        match command {
            KeyCommand::StepForward | KeyCommand::PageForward => {
                if !metrics.at_end(tolerance) {
                    let amount = if command == KeyCommand::StepForward { step } else { page };
                    host.scroll_by_smooth(amount);
                }
            }
            KeyCommand::StepBackward | KeyCommand::PageBackward => {
                if !metrics.at_start(tolerance) {
                    let amount = if command == KeyCommand::StepBackward { step } else { page };
                    host.scroll_by_smooth(-amount);
                }
            }
            KeyCommand::Start => host.scroll_to_smooth(0.0),
            KeyCommand::End => host.scroll_to_smooth(metrics.scroll_width),
        }
        trace!(?command, "key navigation");
        Disposition::PREVENT
    }

    /// Touchstart while capture is active: remember where the finger is.
    pub fn on_touch_start(&mut self, client_y: Option<f64>) {
        if let Some(y) = client_y {
            self.touch_y = y;
        }
    }

    /// Touchstart that may arrive before capture is on.
    ///
    /// A touch on the track is a strong signal of intent, so it turns capture
    /// on regardless of how much of the container is visible.
    pub fn on_touch_bootstrap<H: CaptureHost>(
        &mut self,
        host: &mut H,
        client_y: Option<f64>,
    ) -> Option<Transition> {
        if self.is_active() {
            return None;
        }
        self.on_touch_start(client_y);
        self.activate(host)
    }

    /// Touchmove on the track.
    pub fn on_touch_move<H: CaptureHost>(
        &mut self,
        host: &mut H,
        client_y: Option<f64>,
    ) -> Disposition {
        if !self.is_active() {
            return Disposition::PASS;
        }
        let Some(y) = client_y else {
            return Disposition::PASS;
        };
        let delta = self.touch_y - y;
        if self.apply_direct_delta(host, delta) {
            self.touch_y = y;
            Disposition::PREVENT
        } else {
            Disposition::PASS
        }
    }

    /// The free-scroll idle timer fired.
    pub fn on_free_scroll_idle<H: CaptureHost>(&mut self, host: &mut H) {
        self.free_scrolling = false;
        host.set_snap_suppressed(false);
    }

    /// Move the track by `delta` right now. Returns `false` when the move is
    /// rejected (zero delta, or pushing past an edge) and the event should be
    /// left to the page.
    fn apply_direct_delta<H: CaptureHost>(&mut self, host: &mut H, delta: f64) -> bool {
        if delta == 0.0 || delta.is_nan() {
            return false;
        }
        let forward = delta > 0.0;
        if host.metrics().blocks(forward, self.config.edge_tolerance_px) {
            trace!(delta, "edge reached, releasing gesture");
            return false;
        }
        self.begin_free_scroll(host);
        host.scroll_by_immediate(delta);
        true
    }

    fn begin_free_scroll<H: CaptureHost>(&mut self, host: &mut H) {
        self.free_scrolling = true;
        host.set_snap_suppressed(true);
        host.arm_free_scroll_timer(self.config.free_scroll_idle_ms);
    }
}
