//! Scroll back to the top on every navigation

use std::rc::Rc;

use tracing::debug;

use crate::context::Scope;
use crate::controller::ControllerId;
use crate::request::ScrollToOptions;
use crate::scroll_to::ScrollTo;
use crate::window::WindowScroll;

/// How a route reset was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Immediate scroll-to-top through the smooth controller
    Controller,
    /// Direct window assignment to (0, 0)
    WindowFallback,
}

/// Route observer that resets the scroll position when the route or the
/// controller behind it changes
pub struct RouteScrollReset {
    scroll_to: ScrollTo,
    window: Rc<dyn WindowScroll>,
    last: Option<(String, Option<ControllerId>)>,
    resets: u64,
}

impl RouteScrollReset {
    /// Works inside or outside an engine's subtree; outside, every reset
    /// falls back to the window
    pub fn new(scope: &Scope, window: Rc<dyn WindowScroll>) -> Self {
        Self {
            scroll_to: ScrollTo::lenient(scope),
            window,
            last: None,
            resets: 0,
        }
    }

    /// Observe the current path, resetting when it or the controller changed
    /// since the previous observation
    pub fn observe(&mut self, path: &str) -> Option<ResetOutcome> {
        let identity = self.scroll_to.identity();
        let unchanged = self
            .last
            .as_ref()
            .is_some_and(|(last_path, last_identity)| last_path == path && *last_identity == identity);
        if unchanged {
            return None;
        }
        self.last = Some((path.to_string(), identity));
        self.resets += 1;

        if self.scroll_to.scroll_to_top(ScrollToOptions::immediate()) {
            debug!(path, "Route changed, scrolled to top");
            Some(ResetOutcome::Controller)
        } else {
            debug!(path, "Route changed without scroll controller, resetting window");
            self.window.scroll_window_to(0.0, 0.0);
            Some(ResetOutcome::WindowFallback)
        }
    }

    /// Resets performed so far
    pub fn resets(&self) -> u64 {
        self.resets
    }
}
