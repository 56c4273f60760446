//! Browser binding for the plans carousel's scroll capture.
//!
//! [`mount`] wires a [`Controller`] to a container/track pair:
//!
//! - for the whole mounted lifetime: window scroll/resize, an
//!   IntersectionObserver on the container, pointer/mouse/focus enter and
//!   leave on the track, and a touchstart that can switch capture on;
//! - only while capture is active: window wheel/keydown and track
//!   touchstart/touchmove.
//!
//! Every listener is a `gloo` [`EventListener`] and the free-scroll timer a
//! `gloo` [`Timeout`]; dropping them detaches/cancels, so dropping the
//! returned [`CaptureBinding`] leaves nothing attached to the page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use scroll_capture::{
    CaptureConfig, CaptureHost, ConfigError, Controller, Disposition, KeyInput, TrackMetrics,
    TrackSurface, ViewportRect, WheelInput, visibility_ratio,
};
use thiserror::Error;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, Node, ScrollBehavior, ScrollToOptions, TouchEvent, WheelEvent, Window,
};

/// Class that turns CSS scroll snapping off on the track.
pub const NO_SNAP_CLASS: &str = "scroller-no-snap";

/// Why capture could not be set up. The carousel still scrolls natively.
#[derive(Debug, Error)]
pub enum MountError {
    /// Not running in a browser window
    #[error("no browser window available")]
    NoWindow,
    /// Tunables rejected
    #[error("capture config rejected: {0}")]
    Config(#[from] ConfigError),
}

/// Controller plus the DOM it drives, shared by every listener.
struct Shared {
    controller: Controller,
    host: DomHost,
}

type SharedCell = Rc<RefCell<Shared>>;
type WeakShared = Weak<RefCell<Shared>>;

/// Run `f` against the shared state if it is still alive and not already
/// borrowed by an outer handler.
fn with_shared<R>(
    weak: &WeakShared,
    f: impl FnOnce(&mut Controller, &mut DomHost) -> R,
) -> Option<R> {
    let shared = weak.upgrade()?;
    let mut guard = shared.try_borrow_mut().ok()?;
    let Shared { controller, host } = &mut *guard;
    Some(f(controller, host))
}

fn apply(event: &Event, outcome: Disposition) {
    if outcome.prevent_default {
        event.prevent_default();
    }
    if outcome.stop_propagation {
        event.stop_propagation();
    }
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .filter(|height| *height > 0.0)
        .or_else(|| {
            window
                .document()
                .and_then(|document| document.document_element())
                .map(|root| f64::from(root.client_height()))
        })
        .unwrap_or(0.0)
}

fn first_touch_y(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch_event| touch_event.touches().get(0))
        .map(|touch| f64::from(touch.client_y()))
}

fn is_editable_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .is_some_and(|element| {
            element.is_content_editable()
                || matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        })
}

fn key_input(event: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: event.key(),
        shift: event.shift_key(),
        command_modifier: event.ctrl_key() || event.alt_key() || event.meta_key(),
        editable_target: is_editable_target(event),
    }
}

/// The real DOM behind [`CaptureHost`].
struct DomHost {
    window: Window,
    container: HtmlElement,
    track: HtmlElement,
    shared: WeakShared,
    gesture_listeners: Vec<EventListener>,
    free_scroll_timer: Option<Timeout>,
}

impl DomHost {
    fn visibility(&self) -> f64 {
        let rect = self.container.get_bounding_client_rect();
        let rect = ViewportRect {
            top: rect.top(),
            bottom: rect.bottom(),
            height: rect.height(),
        };
        visibility_ratio(rect, viewport_height(&self.window))
    }

    fn scroll_by(&self, left: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(behavior);
        self.track.scroll_by_with_scroll_to_options(&options);
    }
}

impl TrackSurface for DomHost {
    fn metrics(&self) -> TrackMetrics {
        TrackMetrics::new(
            f64::from(self.track.scroll_left()),
            f64::from(self.track.client_width()),
            f64::from(self.track.scroll_width()),
        )
    }

    fn scroll_by_immediate(&mut self, delta: f64) {
        self.scroll_by(delta, ScrollBehavior::Instant);
    }

    fn scroll_by_smooth(&mut self, delta: f64) {
        self.scroll_by(delta, ScrollBehavior::Smooth);
    }

    fn scroll_to_smooth(&mut self, left: f64) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        self.track.scroll_to_with_scroll_to_options(&options);
    }

    fn set_snap_suppressed(&mut self, suppressed: bool) {
        let classes = self.track.class_list();
        let _ = if suppressed {
            classes.add_1(NO_SNAP_CLASS)
        } else {
            classes.remove_1(NO_SNAP_CLASS)
        };
    }

    fn set_live_region(&mut self, live: bool) {
        let _ = if live {
            self.track.set_attribute("aria-live", "polite")
        } else {
            self.track.remove_attribute("aria-live")
        };
    }
}

impl CaptureHost for DomHost {
    fn attach_gesture_listeners(&mut self) {
        if !self.gesture_listeners.is_empty() {
            return;
        }

        let weak = self.shared.clone();
        let wheel = EventListener::new_with_options(
            &self.window,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let input = WheelInput::new(wheel.delta_x(), wheel.delta_y());
                if let Some(outcome) = with_shared(&weak, |c, host| c.on_wheel(host, input)) {
                    apply(event, outcome);
                }
            },
        );

        let weak = self.shared.clone();
        let keydown = EventListener::new_with_options(
            &self.window,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let input = key_input(key);
                if let Some(outcome) = with_shared(&weak, |c, host| c.on_key(host, &input)) {
                    apply(event, outcome);
                }
            },
        );

        let weak = self.shared.clone();
        let touchstart = EventListener::new(&self.track, "touchstart", move |event| {
            let y = first_touch_y(event);
            with_shared(&weak, |c, _| c.on_touch_start(y));
        });

        let weak = self.shared.clone();
        let touchmove = EventListener::new_with_options(
            &self.track,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let y = first_touch_y(event);
                if let Some(outcome) = with_shared(&weak, |c, host| c.on_touch_move(host, y)) {
                    apply(event, outcome);
                }
            },
        );

        self.gesture_listeners = vec![wheel, keydown, touchstart, touchmove];
    }

    fn detach_gesture_listeners(&mut self) {
        self.gesture_listeners.clear();
    }

    fn arm_free_scroll_timer(&mut self, idle_ms: u32) {
        let weak = self.shared.clone();
        // Replacing the handle cancels the previous timer
        self.free_scroll_timer = Some(Timeout::new(idle_ms, move || {
            with_shared(&weak, |c, host| c.on_free_scroll_idle(host));
        }));
    }

    fn cancel_free_scroll_timer(&mut self) {
        self.free_scroll_timer = None;
    }
}

/// Live scroll capture for one carousel. Drop it to tear everything down.
pub struct CaptureBinding {
    shared: SharedCell,
    observer: Option<IntersectionObserver>,
    _observer_callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    _page_listeners: Vec<EventListener>,
}

impl CaptureBinding {
    /// Whether vertical input is currently redirected into the track.
    pub fn is_active(&self) -> bool {
        self.shared
            .try_borrow()
            .map(|shared| shared.controller.is_active())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for CaptureBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBinding")
            .field("active", &self.is_active())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Drop for CaptureBinding {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Ok(mut guard) = self.shared.try_borrow_mut() {
            let Shared { controller, host } = &mut *guard;
            controller.teardown(host);
        }
    }
}

fn observe_visibility(
    container: &HtmlElement,
    weak: &WeakShared,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>), JsValue> {
    let container_node: Node = container.clone().into();
    let weak = weak.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.target().is_same_node(Some(&container_node)) {
                continue;
            }
            let rect = entry.bounding_client_rect();
            let rect = ViewportRect {
                top: rect.top(),
                bottom: rect.bottom(),
                height: rect.height(),
            };
            with_shared(&weak, |c, host| {
                let ratio = visibility_ratio(rect, viewport_height(&host.window));
                c.observe_ratio(host, ratio);
            });
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    // Dense thresholds so both 0.6 and 0.7 are crossed with a callback
    let thresholds = Array::new();
    for step in 0..=100_u32 {
        thresholds.push(&JsValue::from_f64(f64::from(step) / 100.0));
    }
    let init = IntersectionObserverInit::new();
    init.set_threshold(&thresholds);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(container);
    Ok((observer, callback))
}

/// Attach scroll capture to `container` (the visibility reference) and
/// `track` (the horizontally scrolling element).
pub fn mount(
    container: HtmlElement,
    track: HtmlElement,
    config: CaptureConfig,
) -> Result<CaptureBinding, MountError> {
    config.validate()?;
    let window = web_sys::window().ok_or(MountError::NoWindow)?;

    let shared: SharedCell = Rc::new_cyclic(|weak| {
        RefCell::new(Shared {
            controller: Controller::new(config),
            host: DomHost {
                window: window.clone(),
                container: container.clone(),
                track: track.clone(),
                shared: weak.clone(),
                gesture_listeners: Vec::new(),
                free_scroll_timer: None,
            },
        })
    });
    let weak = Rc::downgrade(&shared);

    let (observer, observer_callback) = match observe_visibility(&container, &weak) {
        Ok((observer, callback)) => (Some(observer), Some(callback)),
        Err(err) => {
            warn!(?err, "IntersectionObserver unavailable, relying on scroll/resize");
            (None, None)
        }
    };

    let mut page_listeners = Vec::with_capacity(9);

    for event_type in ["scroll", "resize"] {
        let weak = weak.clone();
        page_listeners.push(EventListener::new(&window, event_type, move |_| {
            with_shared(&weak, |c, host| {
                let ratio = host.visibility();
                c.observe_ratio(host, ratio);
            });
        }));
    }

    for event_type in ["pointerenter", "mouseenter", "focusin"] {
        let weak = weak.clone();
        page_listeners.push(EventListener::new(&track, event_type, move |_| {
            with_shared(&weak, |c, host| c.on_pointer_enter(host));
        }));
    }

    for event_type in ["pointerleave", "mouseleave", "focusout"] {
        let weak = weak.clone();
        page_listeners.push(EventListener::new(&track, event_type, move |_| {
            with_shared(&weak, |c, host| {
                let ratio = host.visibility();
                c.on_pointer_leave(host, ratio)
            });
        }));
    }

    {
        let weak = weak.clone();
        page_listeners.push(EventListener::new(&track, "touchstart", move |event| {
            let y = first_touch_y(event);
            with_shared(&weak, |c, host| c.on_touch_bootstrap(host, y));
        }));
    }

    // Initial measurement, so a carousel that is already in view captures
    // before the first scroll event.
    with_shared(&weak, |c, host| {
        let ratio = host.visibility();
        c.observe_ratio(host, ratio);
    });
    debug!("scroll capture mounted");

    Ok(CaptureBinding {
        shared,
        observer,
        _observer_callback: observer_callback,
        _page_listeners: page_listeners,
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::WheelEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    /// A 960px window over a 2000px strip, pinned to the top of the viewport.
    fn fixture() -> (HtmlElement, HtmlElement) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let container: HtmlElement = document
            .create_element("section")
            .expect("section")
            .unchecked_into();
        container
            .set_attribute("style", "position:fixed;top:0;left:0;height:200px;width:960px")
            .expect("style");
        let track: HtmlElement = document.create_element("div").expect("div").unchecked_into();
        track
            .set_attribute("style", "overflow-x:auto;width:960px;height:200px")
            .expect("style");
        let strip = document.create_element("div").expect("div");
        strip
            .set_attribute("style", "width:2000px;height:10px")
            .expect("style");
        track.append_child(&strip).expect("append");
        container.append_child(&track).expect("append");
        document.body().expect("body").append_child(&container).expect("append");
        (container, track)
    }

    fn wheel(delta_y: f64) -> WheelEvent {
        let init = WheelEventInit::new();
        init.set_delta_y(delta_y);
        init.set_cancelable(true);
        WheelEvent::new_with_event_init_dict("wheel", &init).expect("wheel event")
    }

    #[wasm_bindgen_test]
    fn wheel_is_captured_when_in_view() {
        let (container, track) = fixture();
        let binding = mount(container.clone(), track.clone(), CaptureConfig::default())
            .expect("mounted");
        assert!(binding.is_active());

        let event = wheel(100.0);
        web_sys::window()
            .expect("window")
            .dispatch_event(&event)
            .expect("dispatch");

        assert!(event.default_prevented());
        assert!(track.scroll_left() > 0);
        drop(binding);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn dropping_the_binding_releases_the_wheel() {
        let (container, track) = fixture();
        let binding = mount(container.clone(), track.clone(), CaptureConfig::default())
            .expect("mounted");
        drop(binding);

        let event = wheel(100.0);
        web_sys::window()
            .expect("window")
            .dispatch_event(&event)
            .expect("dispatch");

        assert!(!event.default_prevented());
        assert_eq!(track.scroll_left(), 0);
        assert!(track.get_attribute("aria-live").is_none());
        container.remove();
    }
}
