//! Scroll engine: owns the single scroll controller, drives it once per frame
//! and publishes it to its subtree.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::ControllerOptions;
use crate::context::{Scope, ScrollContext};
use crate::controller::{live_controllers, ScrollHandle};
use crate::error::{Error, Result};
use crate::frame::{FrameRequestId, FrameScheduler};

/// Self re-arming frame task
///
/// Each tick advances the controller, then requests the next frame. `alive`
/// is checked before advancing and before re-arming, so stopping from inside
/// a scroll listener also ends the loop.
struct FrameLoop {
    scheduler: Rc<dyn FrameScheduler>,
    controller: ScrollHandle,
    alive: Cell<bool>,
    pending: Cell<Option<FrameRequestId>>,
}

impl FrameLoop {
    fn start(scheduler: Rc<dyn FrameScheduler>, controller: ScrollHandle) -> Rc<Self> {
        let frame_loop = Rc::new(Self {
            scheduler,
            controller,
            alive: Cell::new(true),
            pending: Cell::new(None),
        });
        Self::arm(&frame_loop);
        frame_loop
    }

    fn arm(this: &Rc<Self>) {
        if !this.alive.get() {
            return;
        }
        let next = Rc::clone(this);
        let id = this
            .scheduler
            .request_frame(Box::new(move |timestamp| next.tick(timestamp)));
        this.pending.set(Some(id));
    }

    fn tick(self: Rc<Self>, timestamp: Duration) {
        self.pending.set(None);
        if !self.alive.get() {
            return;
        }
        self.controller.advance(timestamp);
        Self::arm(&self);
    }

    fn stop(&self) {
        self.alive.set(false);
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}

/// Owner of the application's scroll controller
pub struct ScrollEngine {
    options: ControllerOptions,
    scheduler: Rc<dyn FrameScheduler>,
    context: ScrollContext,
    scope: Scope,
    frame_loop: Option<Rc<FrameLoop>>,
    torn_down: bool,
}

impl ScrollEngine {
    /// Mount the engine under `parent`; the controller is created by `activate`
    pub fn mount(
        parent: &Scope,
        scheduler: Rc<dyn FrameScheduler>,
        options: ControllerOptions,
    ) -> Self {
        let context = ScrollContext::new();
        let scope = parent.provide(context.clone());

        Self {
            options,
            scheduler,
            context,
            scope,
            frame_loop: None,
            torn_down: false,
        }
    }

    /// Create the controller, start the frame loop and publish the controller
    ///
    /// Returns the existing controller when already active. Fails when
    /// another controller is live on this thread or after teardown.
    pub fn activate(&mut self) -> Result<ScrollHandle> {
        if self.torn_down {
            return Err(Error::EngineTornDown);
        }
        if let Some(handle) = self.context.get() {
            return Ok(handle);
        }
        if live_controllers() > 0 {
            return Err(Error::ControllerAlreadyLive);
        }

        let controller = ScrollHandle::new(self.options.clone());
        self.frame_loop = Some(FrameLoop::start(
            Rc::clone(&self.scheduler),
            controller.clone(),
        ));
        self.context.publish(controller.clone());

        info!(
            controller = %controller.id(),
            duration_ms = self.options.duration.as_millis() as u64,
            easing = ?self.options.easing,
            "Scroll engine started"
        );
        Ok(controller)
    }

    /// Scope whose descendants see this engine's context
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn context(&self) -> &ScrollContext {
        &self.context
    }

    pub fn controller(&self) -> Option<ScrollHandle> {
        self.context.get()
    }

    pub fn is_active(&self) -> bool {
        !self.torn_down && self.context.is_ready()
    }

    /// Stop the frame loop and destroy the controller
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if let Some(controller) = self.context.clear() {
            controller.destroy();
            info!(controller = %controller.id(), "Scroll engine stopped");
        } else {
            debug!("Scroll engine unmounted before activation");
        }
    }
}

impl Drop for ScrollEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}
