//! Smooth scrolling for the Dronehub storefront
//!
//! One [`ScrollEngine`] owns the page's scroll controller, advances it once per
//! display frame and publishes it to its subtree through a [`ScrollContext`].
//! Consumers below the engine subscribe to scroll events, request scrolls and
//! reset the position on navigation.
//!
//! # Layout
//!
//! ## Atoms
//! - `easing` - Easing curves (cubic, quintic, exponential decay)
//! - `timing` - Progress, interpolation and frame deltas
//! - `config` - Controller options (scroll configuration lives in dronehub-core)
//! - `request` - Scroll targets and scroll-to option merging
//!
//! ## Molecules
//! - `animation` - Tween between two positions
//! - `controller` - Scroll controller and its shared handle
//! - `frame` / `driver` - Frame scheduling and a tokio display clock
//!
//! ## Organisms
//! - `engine` - Controller ownership and the frame loop
//! - `subscription`, `scroll_to`, `route_reset` - Consumers of the context
//!
//! # Usage
//!
//! ```ignore
//! use std::rc::Rc;
//! use dronehub_scroll::{ControllerOptions, FrameQueue, Scope, ScrollEngine, ScrollTo, ScrollToOptions};
//!
//! let queue = Rc::new(FrameQueue::new());
//! let mut engine = ScrollEngine::mount(&Scope::root(), queue.clone(), ControllerOptions::site_default());
//! engine.activate()?;
//!
//! let scroll = ScrollTo::new(engine.scope())?;
//! scroll.scroll_to(500.0, ScrollToOptions::default());
//!
//! // Once per display refresh
//! queue.run_frame(timestamp);
//! ```

pub mod config;
pub mod easing;
pub mod error;
pub mod request;
pub mod timing;

mod animation;
pub mod controller;
pub mod driver;
pub mod frame;

pub mod context;
pub mod engine;
pub mod route_reset;
pub mod scroll_to;
pub mod subscription;
pub mod window;

pub use config::{ControllerOptions, ScrollConfigExt};
pub use context::{use_scroll, Scope, ScrollContext};
pub use controller::{
    live_controllers, ControllerId, DeltaMode, ScrollCallback, ScrollDirection, ScrollHandle,
    ScrollState, SubscriptionId, TouchPoint, WheelInput, WheelSource,
};
pub use driver::FrameDriver;
pub use easing::{EasingType, EasingTypeExt};
pub use engine::ScrollEngine;
pub use error::{Error, Result};
pub use frame::{FrameCallback, FrameQueue, FrameRequestId, FrameScheduler};
pub use request::{ScrollTarget, ScrollToOptions, ScrollToRequest};
pub use route_reset::{ResetOutcome, RouteScrollReset};
pub use scroll_to::ScrollTo;
pub use subscription::ScrollSubscription;
pub use window::{HeadlessWindow, WindowScroll};
