//! Imperative scroll-to requests against the published controller

use tracing::debug;

use crate::context::{use_scroll, Scope, ScrollContext};
use crate::controller::{ControllerId, ScrollHandle};
use crate::error::Result;
use crate::request::{ScrollTarget, ScrollToOptions};

/// Scroll-to operations bound to the nearest engine's context
///
/// Requests made while no controller is published are dropped and reported
/// as `false`.
#[derive(Debug, Clone)]
pub struct ScrollTo {
    context: Option<ScrollContext>,
}

impl ScrollTo {
    /// Bind to the engine above `scope`, failing outside an engine's subtree
    pub fn new(scope: &Scope) -> Result<Self> {
        Ok(Self {
            context: Some(use_scroll(scope)?),
        })
    }

    /// Bind to the engine above `scope` if there is one
    pub fn lenient(scope: &Scope) -> Self {
        Self {
            context: scope.scroll_context(),
        }
    }

    pub fn controller(&self) -> Option<ScrollHandle> {
        self.context.as_ref().and_then(ScrollContext::get)
    }

    /// Identity of the controller requests currently go to
    pub fn identity(&self) -> Option<ControllerId> {
        self.controller().map(|controller| controller.id())
    }

    pub fn is_available(&self) -> bool {
        self.controller().is_some()
    }

    /// Scroll to `target`, returns false when there is no controller
    pub fn scroll_to(&self, target: impl Into<ScrollTarget>, options: ScrollToOptions) -> bool {
        let target = target.into();
        let Some(controller) = self.controller() else {
            debug!(?target, "Scroll request dropped, no scroll controller");
            return false;
        };

        let request = options.resolve();
        debug!(
            ?target,
            offset = request.offset,
            duration_ms = request.duration.as_millis() as u64,
            "Scroll requested"
        );
        controller.scroll_to(&target, &request);
        true
    }

    /// Same as scrolling to offset 0
    pub fn scroll_to_top(&self, options: ScrollToOptions) -> bool {
        self.scroll_to(ScrollTarget::Offset(0.0), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::config::ControllerOptions;
    use crate::engine::ScrollEngine;
    use crate::error::Error;
    use crate::frame::FrameQueue;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_no_controller_is_a_no_op() {
        let queue = Rc::new(FrameQueue::new());
        let engine =
            ScrollEngine::mount(&Scope::root(), queue, ControllerOptions::site_default());
        let scroll = ScrollTo::new(engine.scope()).unwrap();

        assert!(!scroll.is_available());
        assert!(scroll.identity().is_none());
        assert!(!scroll.scroll_to(300.0, ScrollToOptions::default()));
        assert!(!scroll.scroll_to_top(ScrollToOptions::immediate()));
    }

    #[test]
    fn test_strict_outside_engine_fails() {
        assert!(matches!(
            ScrollTo::new(&Scope::root()),
            Err(Error::OutsideScrollProvider)
        ));
        assert!(!ScrollTo::lenient(&Scope::root()).scroll_to(10.0, ScrollToOptions::default()));
    }

    #[test]
    fn test_half_second_request_reaches_target_on_time() {
        let queue = Rc::new(FrameQueue::new());
        let mut engine =
            ScrollEngine::mount(&Scope::root(), queue.clone(), ControllerOptions::site_default());
        let handle = engine.activate().unwrap();
        let scroll = ScrollTo::new(&engine.scope().child()).unwrap();
        queue.run_frame(ms(0));

        assert!(scroll.scroll_to(500u32, ScrollToOptions::default().with_duration(ms(500))));
        assert_eq!(handle.state().target, 500.0);

        queue.run_frame(ms(250));
        let midway = handle.scroll();
        // Expo decay front-loads the motion
        assert!(midway > 250.0 && midway < 500.0);

        queue.run_frame(ms(500));
        assert_eq!(handle.scroll(), 500.0);
        assert!(!handle.is_animating());
    }

    #[test]
    fn test_default_duration_is_site_duration() {
        let queue = Rc::new(FrameQueue::new());
        let mut engine =
            ScrollEngine::mount(&Scope::root(), queue.clone(), ControllerOptions::site_default());
        let handle = engine.activate().unwrap();
        let scroll = ScrollTo::new(engine.scope()).unwrap();
        queue.run_frame(ms(0));

        scroll.scroll_to(1000.0, ScrollToOptions::default());
        queue.run_frame(ms(600));
        assert!(handle.is_animating());
        queue.run_frame(ms(1200));
        assert_eq!(handle.scroll(), 1000.0);
    }

    #[test]
    fn test_scroll_to_top_matches_offset_zero() {
        let queue = Rc::new(FrameQueue::new());
        let mut engine =
            ScrollEngine::mount(&Scope::root(), queue, ControllerOptions::site_default());
        let handle = engine.activate().unwrap();
        let scroll = ScrollTo::new(engine.scope()).unwrap();

        scroll.scroll_to(700.0, ScrollToOptions::immediate());
        assert_eq!(handle.scroll(), 700.0);

        assert!(scroll.scroll_to_top(ScrollToOptions::immediate()));
        assert_eq!(handle.scroll(), 0.0);
        assert_eq!(scroll.identity(), Some(handle.id()));
    }

    #[test]
    fn test_offset_applies_to_anchor() {
        let queue = Rc::new(FrameQueue::new());
        let mut engine =
            ScrollEngine::mount(&Scope::root(), queue, ControllerOptions::site_default());
        let handle = engine.activate().unwrap();
        handle.set_anchor("products", 900.0);

        let scroll = ScrollTo::new(engine.scope()).unwrap();
        scroll.scroll_to("#products", ScrollToOptions::immediate().with_offset(-100.0));
        assert_eq!(handle.scroll(), 800.0);
    }
}
