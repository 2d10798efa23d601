//! Smooth scroll controller
//!
//! Holds the scroll position, interpolates it towards requested targets as
//! frames are advanced, turns wheel and touch input into scrolling, and
//! notifies scroll listeners. Shared through [`ScrollHandle`]; listeners are
//! invoked after the controller borrow is released, so they may call back
//! into the handle.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::animation::ActiveAnimation;
use crate::config::{ControllerOptions, GestureAxis, ScrollAxis};
use crate::easing::EasingType;
use crate::request::{ScrollTarget, ScrollToRequest};
use crate::timing::frame_delta;

/// Pixels per line for line-mode wheel deltas
const LINE_HEIGHT: f64 = 100.0 / 6.0;
/// Largest wheel delta accepted when normalizing
const MAX_NORMALIZED_DELTA: f64 = 100.0;
/// Distance glided per unit of touch release velocity
const TOUCH_INERTIA_MULTIPLIER: f64 = 35.0;
/// Release velocities below this do not glide
const MIN_INERTIA_VELOCITY: f64 = 0.5;

thread_local! {
    static LIVE_CONTROLLERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of controllers on this thread that have not been destroyed
pub fn live_controllers() -> usize {
    LIVE_CONTROLLERS.with(Cell::get)
}

/// Callback invoked on every scroll event
pub type ScrollCallback = Rc<dyn Fn(&ScrollState)>;

/// Identity of one listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Identity of a controller instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(Uuid);

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Nothing has scrolled yet
    Idle,
    /// Towards the end of the page
    Forward,
    /// Towards the start of the page
    Backward,
}

/// Snapshot passed to scroll listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll: f64,
    /// Where the current animation ends
    pub target: f64,
    /// Maximum scroll offset (infinite before dimensions are known)
    pub limit: f64,
    /// Position change of the last update
    pub velocity: f64,
    pub direction: ScrollDirection,
    /// scroll / limit, 0 when the limit is unknown
    pub progress: f64,
    pub is_scrolling: bool,
    /// Axis `scroll` applies to
    pub axis: ScrollAxis,
}

impl ScrollState {
    /// Window scroll position `(x, y)` for this state
    pub fn window_position(&self) -> (f64, f64) {
        match self.axis {
            ScrollAxis::Vertical => (0.0, self.scroll),
            ScrollAxis::Horizontal => (self.scroll, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelSource {
    #[default]
    Mouse,
    Trackpad,
}

/// One wheel event from the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
    pub source: WheelSource,
}

impl WheelInput {
    pub fn vertical(delta_y: f64) -> Self {
        Self {
            delta_y,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy)]
struct Dimensions {
    viewport: f64,
    content: f64,
}

struct TouchTracker {
    last: TouchPoint,
    velocity: f64,
}

struct Listener {
    id: SubscriptionId,
    callback: ScrollCallback,
}

struct ScrollController {
    id: ControllerId,
    options: ControllerOptions,
    scroll: f64,
    target: f64,
    velocity: f64,
    direction: ScrollDirection,
    dimensions: Option<Dimensions>,
    anchors: HashMap<String, f64>,
    animation: Option<ActiveAnimation>,
    touch: Option<TouchTracker>,
    last_frame: Option<Duration>,
    frames: u64,
    listeners: Vec<Listener>,
    destroyed: bool,
}

impl ScrollController {
    fn new(options: ControllerOptions) -> Self {
        LIVE_CONTROLLERS.with(|live| live.set(live.get() + 1));
        let id = ControllerId(Uuid::new_v4());
        debug!(controller = %id, "Scroll controller created");

        Self {
            id,
            options,
            scroll: 0.0,
            target: 0.0,
            velocity: 0.0,
            direction: ScrollDirection::Idle,
            dimensions: None,
            anchors: HashMap::new(),
            animation: None,
            touch: None,
            last_frame: None,
            frames: 0,
            listeners: Vec::new(),
            destroyed: false,
        }
    }

    fn limit(&self) -> f64 {
        match self.dimensions {
            Some(dims) => (dims.content - dims.viewport).max(0.0),
            None => f64::INFINITY,
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        if self.options.infinite {
            value
        } else {
            value.clamp(0.0, self.limit())
        }
    }

    fn state(&self) -> ScrollState {
        let limit = self.limit();
        let progress = if limit.is_finite() && limit > 0.0 {
            (self.scroll / limit).clamp(0.0, 1.0)
        } else {
            0.0
        };

        ScrollState {
            scroll: self.scroll,
            target: self.target,
            limit,
            velocity: self.velocity,
            direction: self.direction,
            progress,
            is_scrolling: self.animation.is_some() || self.touch.is_some(),
            axis: self.options.direction,
        }
    }

    /// Target of the running animation, or the current position
    fn base(&self) -> f64 {
        self.animation
            .as_ref()
            .map_or(self.scroll, ActiveAnimation::target)
    }

    fn set_position(&mut self, value: f64) {
        let value = self.clamp(value);
        self.velocity = value - self.scroll;
        if self.velocity > 0.0 {
            self.direction = ScrollDirection::Forward;
        } else if self.velocity < 0.0 {
            self.direction = ScrollDirection::Backward;
        }
        self.scroll = value;
    }

    /// Jump (zero duration) or start an animation towards `target`
    fn animate_to(
        &mut self,
        target: f64,
        duration: Duration,
        easing: EasingType,
    ) -> Option<ScrollState> {
        let target = self.clamp(target);
        self.target = target;

        if duration.is_zero() {
            self.animation = None;
            self.set_position(target);
            self.velocity = 0.0;
            return Some(self.state());
        }

        if (target - self.scroll).abs() < f64::EPSILON {
            self.animation = None;
            return None;
        }

        self.animation = Some(ActiveAnimation::new(self.scroll, target, duration, easing));
        None
    }

    fn advance(&mut self, timestamp: Duration) -> Option<ScrollState> {
        if self.destroyed {
            warn!(controller = %self.id, "Ignoring frame for destroyed scroll controller");
            return None;
        }

        let delta = frame_delta(self.last_frame, timestamp);
        self.last_frame = Some(timestamp);
        self.frames += 1;

        let animation = self.animation.as_mut()?;
        let value = animation.advance(delta);
        let done = animation.is_complete();

        self.set_position(value);
        if done {
            self.animation = None;
            self.velocity = 0.0;
        }
        Some(self.state())
    }

    fn scroll_to(&mut self, target: &ScrollTarget, request: &ScrollToRequest) -> Option<ScrollState> {
        if self.destroyed {
            warn!(controller = %self.id, "Ignoring scroll request for destroyed scroll controller");
            return None;
        }

        let position = match target {
            ScrollTarget::Offset(offset) => *offset,
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => {
                let limit = self.limit();
                if !limit.is_finite() {
                    warn!("Cannot scroll to bottom before page dimensions are known");
                    return None;
                }
                limit
            }
            ScrollTarget::Anchor(name) => match self.anchors.get(name) {
                Some(position) => *position,
                None => {
                    warn!(anchor = %name, "Unknown scroll anchor");
                    return None;
                }
            },
        };

        self.touch = None;
        let duration = if self.options.smooth {
            request.duration
        } else {
            Duration::ZERO
        };
        self.animate_to(position + request.offset, duration, request.easing)
    }

    fn wheel_delta(&self, input: &WheelInput) -> f64 {
        let unit = match input.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => LINE_HEIGHT,
            // A page is one viewport, unknown until dimensions are set
            DeltaMode::Page => self.dimensions.map_or(0.0, |dims| dims.viewport),
        };

        let mut dx = input.delta_x * unit;
        let mut dy = input.delta_y * unit;
        if self.options.normalize_wheel {
            dx = dx.clamp(-MAX_NORMALIZED_DELTA, MAX_NORMALIZED_DELTA);
            dy = dy.clamp(-MAX_NORMALIZED_DELTA, MAX_NORMALIZED_DELTA);
        }

        let multiplier = self.options.wheel_multiplier
            * match input.source {
                WheelSource::Mouse => self.options.mouse_multiplier,
                WheelSource::Trackpad => 1.0,
            };

        self.gesture_delta(dx, dy) * multiplier
    }

    fn gesture_delta(&self, dx: f64, dy: f64) -> f64 {
        match self.options.gesture_direction {
            GestureAxis::Vertical => dy,
            GestureAxis::Horizontal => dx,
            GestureAxis::Both => {
                if dx.abs() > dy.abs() {
                    dx
                } else {
                    dy
                }
            }
        }
    }

    fn wheel(&mut self, input: WheelInput) -> Option<ScrollState> {
        if self.destroyed {
            return None;
        }

        let delta = self.wheel_delta(&input);
        if delta == 0.0 {
            return None;
        }

        let target = self.base() + delta;
        let duration = if self.options.smooth {
            self.options.duration
        } else {
            Duration::ZERO
        };
        self.animate_to(target, duration, self.options.easing)
    }

    fn touch_start(&mut self, point: TouchPoint) {
        if self.destroyed {
            return;
        }
        // The finger takes over from any running animation
        self.animation = None;
        self.target = self.scroll;
        self.touch = Some(TouchTracker {
            last: point,
            velocity: 0.0,
        });
    }

    fn touch_move(&mut self, point: TouchPoint) -> Option<ScrollState> {
        if self.destroyed {
            return None;
        }

        let tracker = self.touch.as_mut()?;
        let dx = tracker.last.x - point.x;
        let dy = tracker.last.y - point.y;
        tracker.last = point;

        let delta = self.gesture_delta(dx, dy) * self.options.touch_multiplier;
        if let Some(tracker) = self.touch.as_mut() {
            tracker.velocity = delta;
        }
        if delta == 0.0 {
            return None;
        }

        if self.options.smooth_touch {
            let target = self.base() + delta;
            self.animate_to(target, self.options.duration, self.options.easing)
        } else {
            let target = self.scroll + delta;
            self.animate_to(target, Duration::ZERO, self.options.easing)
        }
    }

    fn touch_end(&mut self) -> Option<ScrollState> {
        let tracker = self.touch.take()?;
        if self.destroyed {
            return None;
        }

        if self.options.touch_inertia && tracker.velocity.abs() >= MIN_INERTIA_VELOCITY {
            let target = self.base() + tracker.velocity * TOUCH_INERTIA_MULTIPLIER;
            return self.animate_to(target, self.options.duration, self.options.easing);
        }
        None
    }

    fn set_dimensions(&mut self, viewport: f64, content: f64) -> Option<ScrollState> {
        self.dimensions = Some(Dimensions {
            viewport: viewport.max(0.0),
            content: content.max(0.0),
        });

        let clamped = self.clamp(self.scroll);
        if (clamped - self.scroll).abs() < f64::EPSILON {
            return None;
        }
        self.animation = None;
        self.target = clamped;
        self.set_position(clamped);
        Some(self.state())
    }

    fn on_scroll(&mut self, callback: ScrollCallback) -> SubscriptionId {
        let id = SubscriptionId::new();
        if self.destroyed {
            warn!(controller = %self.id, "Scroll listener added to destroyed controller is never called");
            return id;
        }
        self.listeners.push(Listener { id, callback });
        debug!(controller = %self.id, subscription = ?id, "Scroll listener added");
        id
    }

    fn off_scroll(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(controller = %self.id, subscription = ?id, "Scroll listener removed");
        }
        removed
    }

    fn listeners(&self) -> Vec<ScrollCallback> {
        self.listeners
            .iter()
            .map(|listener| Rc::clone(&listener.callback))
            .collect()
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.listeners.clear();
        self.animation = None;
        self.touch = None;
        LIVE_CONTROLLERS.with(|live| live.set(live.get().saturating_sub(1)));
        info!(controller = %self.id, frames = self.frames, "Scroll controller destroyed");
    }
}

impl Drop for ScrollController {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Shared handle to the scroll controller
///
/// Consumers may read state, subscribe, request scrolls and forward input.
/// Advancing frames and destruction are reserved to the engine.
#[derive(Clone)]
pub struct ScrollHandle {
    inner: Rc<RefCell<ScrollController>>,
}

impl fmt::Debug for ScrollHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller = self.inner.borrow();
        f.debug_struct("ScrollHandle")
            .field("id", &controller.id)
            .field("scroll", &controller.scroll)
            .field("destroyed", &controller.destroyed)
            .finish()
    }
}

impl ScrollHandle {
    pub(crate) fn new(options: ControllerOptions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScrollController::new(options))),
        }
    }

    fn dispatch(&self, state: Option<ScrollState>) {
        let Some(state) = state else {
            return;
        };
        let listeners = self.inner.borrow().listeners();
        for listener in listeners {
            listener(&state);
        }
    }

    pub fn id(&self) -> ControllerId {
        self.inner.borrow().id
    }

    /// Whether both handles point at the same controller
    pub fn ptr_eq(&self, other: &ScrollHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn state(&self) -> ScrollState {
        self.inner.borrow().state()
    }

    pub fn scroll(&self) -> f64 {
        self.inner.borrow().scroll
    }

    pub fn options(&self) -> ControllerOptions {
        self.inner.borrow().options.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animation.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().destroyed
    }

    /// Frames advanced since construction
    pub fn frames_advanced(&self) -> u64 {
        self.inner.borrow().frames
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Register a scroll listener; listeners run in registration order
    pub fn subscribe(&self, callback: ScrollCallback) -> SubscriptionId {
        self.inner.borrow_mut().on_scroll(callback)
    }

    /// Remove a registration, false when it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().off_scroll(id)
    }

    /// Request a scroll; zero duration jumps and notifies immediately,
    /// otherwise the position is interpolated over the following frames
    pub fn scroll_to(&self, target: &ScrollTarget, request: &ScrollToRequest) {
        let state = self.inner.borrow_mut().scroll_to(target, request);
        self.dispatch(state);
    }

    pub fn wheel(&self, input: WheelInput) {
        let state = self.inner.borrow_mut().wheel(input);
        self.dispatch(state);
    }

    pub fn touch_start(&self, point: TouchPoint) {
        self.inner.borrow_mut().touch_start(point);
    }

    pub fn touch_move(&self, point: TouchPoint) {
        let state = self.inner.borrow_mut().touch_move(point);
        self.dispatch(state);
    }

    pub fn touch_end(&self) {
        let state = self.inner.borrow_mut().touch_end();
        self.dispatch(state);
    }

    /// Set viewport and content extent along the scroll axis; the scroll
    /// limit is their difference
    pub fn set_dimensions(&self, viewport: f64, content: f64) {
        let state = self.inner.borrow_mut().set_dimensions(viewport, content);
        self.dispatch(state);
    }

    /// Register a named point in the document for `ScrollTarget::Anchor`
    pub fn set_anchor(&self, name: impl Into<String>, position: f64) {
        self.inner.borrow_mut().anchors.insert(name.into(), position);
    }

    pub(crate) fn advance(&self, timestamp: Duration) {
        let state = self.inner.borrow_mut().advance(timestamp);
        self.dispatch(state);
    }

    pub(crate) fn destroy(&self) {
        self.inner.borrow_mut().destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ScrollToOptions;

    fn linear_options() -> ControllerOptions {
        ControllerOptions {
            duration: Duration::from_millis(100),
            easing: EasingType::Linear,
            ..ControllerOptions::site_default()
        }
    }

    fn recorder(handle: &ScrollHandle) -> Rc<RefCell<Vec<f64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        handle.subscribe(Rc::new(move |state: &ScrollState| {
            sink.borrow_mut().push(state.scroll)
        }));
        seen
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_immediate_scroll_notifies_once() {
        let handle = ScrollHandle::new(linear_options());
        let seen = recorder(&handle);

        handle.scroll_to(&ScrollTarget::Offset(300.0), &ScrollToOptions::immediate().resolve());

        assert_eq!(handle.scroll(), 300.0);
        assert!(!handle.is_animating());
        assert_eq!(*seen.borrow(), vec![300.0]);
    }

    #[test]
    fn test_animated_scroll_follows_frames() {
        let handle = ScrollHandle::new(linear_options());
        let seen = recorder(&handle);

        let request = ScrollToOptions::default()
            .with_easing(EasingType::Linear)
            .with_duration(ms(100))
            .resolve();
        handle.scroll_to(&ScrollTarget::Offset(200.0), &request);
        assert!(handle.is_animating());
        assert!(seen.borrow().is_empty());

        handle.advance(ms(0));
        handle.advance(ms(50));
        assert!((handle.scroll() - 100.0).abs() < 1e-9);
        assert_eq!(handle.state().direction, ScrollDirection::Forward);

        handle.advance(ms(100));
        assert_eq!(handle.scroll(), 200.0);
        assert!(!handle.is_animating());

        // Idle frames produce no events
        handle.advance(ms(150));
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(handle.frames_advanced(), 4);
    }

    #[test]
    fn test_listeners_in_registration_order() {
        let handle = ScrollHandle::new(linear_options());
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            handle.subscribe(Rc::new(move |_: &ScrollState| order.borrow_mut().push(name)));
        }

        handle.scroll_to(&ScrollTarget::Top, &ScrollToOptions::immediate().resolve());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_subscribe_then_unsubscribe_leaves_set_unchanged() {
        let handle = ScrollHandle::new(linear_options());
        let _existing = recorder(&handle);
        assert_eq!(handle.subscriber_count(), 1);

        let id = handle.subscribe(Rc::new(|_: &ScrollState| {}));
        assert!(handle.unsubscribe(id));
        assert_eq!(handle.subscriber_count(), 1);
        assert!(!handle.unsubscribe(id));
    }

    #[test]
    fn test_same_callback_registered_twice_has_two_identities() {
        let handle = ScrollHandle::new(linear_options());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let callback: ScrollCallback = Rc::new(move |_: &ScrollState| counter.set(counter.get() + 1));

        let first = handle.subscribe(Rc::clone(&callback));
        let second = handle.subscribe(callback);
        assert_ne!(first, second);

        handle.unsubscribe(first);
        handle.scroll_to(&ScrollTarget::Top, &ScrollToOptions::immediate().resolve());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_listener_may_reenter_handle() {
        let handle = ScrollHandle::new(linear_options());
        let inner = handle.clone();
        handle.subscribe(Rc::new(move |state: &ScrollState| {
            if state.scroll > 500.0 {
                inner.scroll_to(&ScrollTarget::Offset(500.0), &ScrollToOptions::immediate().resolve());
            }
        }));

        handle.scroll_to(&ScrollTarget::Offset(800.0), &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.scroll(), 500.0);
        handle.destroy();
    }

    #[test]
    fn test_dimensions_clamp_and_bottom() {
        let handle = ScrollHandle::new(linear_options());
        handle.scroll_to(&ScrollTarget::Offset(5000.0), &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.scroll(), 5000.0);

        handle.set_dimensions(800.0, 3000.0);
        assert_eq!(handle.scroll(), 2200.0);
        assert_eq!(handle.state().limit, 2200.0);
        assert_eq!(handle.state().progress, 1.0);

        handle.scroll_to(&ScrollTarget::Offset(-40.0), &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.scroll(), 0.0);

        handle.scroll_to(&ScrollTarget::Bottom, &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.scroll(), 2200.0);
    }

    #[test]
    fn test_bottom_unknown_without_dimensions() {
        let handle = ScrollHandle::new(linear_options());
        handle.scroll_to(&ScrollTarget::Bottom, &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.scroll(), 0.0);
    }

    #[test]
    fn test_anchor_with_offset() {
        let handle = ScrollHandle::new(linear_options());
        handle.set_anchor("faq", 1200.0);

        let request = ScrollToOptions::immediate().with_offset(-80.0).resolve();
        handle.scroll_to(&ScrollTarget::from("#faq"), &request);
        assert_eq!(handle.scroll(), 1120.0);

        handle.scroll_to(&ScrollTarget::from("#missing"), &request);
        assert_eq!(handle.scroll(), 1120.0);
    }

    #[test]
    fn test_infinite_does_not_clamp() {
        let handle = ScrollHandle::new(ControllerOptions {
            infinite: true,
            ..linear_options()
        });
        handle.set_dimensions(800.0, 1000.0);
        handle.scroll_to(&ScrollTarget::Offset(-50.0), &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.scroll(), -50.0);
    }

    #[test]
    fn test_wheel_normalized_and_smooth() {
        let handle = ScrollHandle::new(linear_options());

        handle.wheel(WheelInput::vertical(450.0));
        assert!(handle.is_animating());
        assert_eq!(handle.state().target, 100.0);

        // Retargets from the running animation's target
        handle.wheel(WheelInput {
            delta_y: 3.0,
            mode: DeltaMode::Line,
            ..Default::default()
        });
        assert!((handle.state().target - 150.0).abs() < 1e-9);

        handle.advance(ms(0));
        handle.advance(ms(200));
        assert!((handle.scroll() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_ignores_horizontal_for_vertical_gestures() {
        let handle = ScrollHandle::new(linear_options());
        handle.wheel(WheelInput {
            delta_x: 80.0,
            ..Default::default()
        });
        assert!(!handle.is_animating());
        assert_eq!(handle.state().target, 0.0);
    }

    #[test]
    fn test_wheel_jumps_when_not_smooth() {
        let handle = ScrollHandle::new(ControllerOptions {
            smooth: false,
            wheel_multiplier: 2.0,
            ..linear_options()
        });
        let seen = recorder(&handle);

        handle.wheel(WheelInput::vertical(40.0));
        assert_eq!(handle.scroll(), 80.0);
        assert_eq!(*seen.borrow(), vec![80.0]);
    }

    #[test]
    fn test_scroll_to_jumps_when_not_smooth() {
        let handle = ScrollHandle::new(ControllerOptions {
            smooth: false,
            ..ControllerOptions::site_default()
        });
        let seen = recorder(&handle);

        handle.scroll_to(&ScrollTarget::Offset(300.0), &ScrollToOptions::default().resolve());
        assert_eq!(handle.scroll(), 300.0);
        assert!(!handle.is_animating());
        assert_eq!(*seen.borrow(), vec![300.0]);
    }

    #[test]
    fn test_horizontal_direction_maps_vertical_wheel_to_x() {
        let wheel = WheelInput {
            delta_x: 60.0,
            delta_y: 40.0,
            ..Default::default()
        };

        let vertical = ScrollHandle::new(ControllerOptions {
            smooth: false,
            ..linear_options()
        });
        vertical.wheel(wheel);
        assert_eq!(vertical.state().axis, ScrollAxis::Vertical);
        assert_eq!(vertical.state().window_position(), (0.0, 40.0));
        drop(vertical);

        let horizontal = ScrollHandle::new(ControllerOptions {
            smooth: false,
            direction: ScrollAxis::Horizontal,
            ..linear_options()
        });
        horizontal.wheel(wheel);
        assert_eq!(horizontal.state().axis, ScrollAxis::Horizontal);
        assert_eq!(horizontal.state().window_position(), (40.0, 0.0));
    }

    #[test]
    fn test_touch_follows_finger_then_glides() {
        let handle = ScrollHandle::new(linear_options());
        handle.set_dimensions(800.0, 10_000.0);

        handle.touch_start(TouchPoint::new(0.0, 500.0));
        assert!(handle.state().is_scrolling);
        handle.touch_move(TouchPoint::new(0.0, 480.0));
        // touch multiplier 2, smooth touch off
        assert_eq!(handle.scroll(), 40.0);
        assert!(!handle.is_animating());

        handle.touch_end();
        assert!(handle.is_animating());
        assert_eq!(handle.state().target, 40.0 + 40.0 * TOUCH_INERTIA_MULTIPLIER);
    }

    #[test]
    fn test_touch_without_inertia_stops() {
        let handle = ScrollHandle::new(ControllerOptions {
            touch_inertia: false,
            ..linear_options()
        });
        handle.touch_start(TouchPoint::new(0.0, 300.0));
        handle.touch_move(TouchPoint::new(0.0, 250.0));
        handle.touch_end();
        assert_eq!(handle.scroll(), 100.0);
        assert!(!handle.is_animating());
        assert!(!handle.state().is_scrolling);
    }

    #[test]
    fn test_destroy_stops_everything() {
        let before = live_controllers();
        let handle = ScrollHandle::new(linear_options());
        assert_eq!(live_controllers(), before + 1);
        let seen = recorder(&handle);

        handle.destroy();
        handle.destroy();
        assert_eq!(live_controllers(), before);
        assert!(handle.is_destroyed());
        assert_eq!(handle.subscriber_count(), 0);

        handle.advance(ms(16));
        handle.scroll_to(&ScrollTarget::Offset(100.0), &ScrollToOptions::immediate().resolve());
        assert_eq!(handle.frames_advanced(), 0);
        assert_eq!(handle.scroll(), 0.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_live_count() {
        let before = live_controllers();
        {
            let _handle = ScrollHandle::new(linear_options());
            assert_eq!(live_controllers(), before + 1);
        }
        assert_eq!(live_controllers(), before);
    }
}
