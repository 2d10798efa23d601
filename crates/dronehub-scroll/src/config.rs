//! Controller options derived from the scroll configuration in dronehub-core

use std::time::Duration;

pub use dronehub_core::config::{GestureAxis, ScrollAxis};
pub use dronehub_core::{EasingType, ScrollConfig};

/// Options a scroll controller is constructed with
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerOptions {
    /// Duration of animated scrolls
    pub duration: Duration,
    pub easing: EasingType,
    /// Axis the scroll offset is applied to; gestures along
    /// `gesture_direction` drive it either way
    pub direction: ScrollAxis,
    pub gesture_direction: GestureAxis,
    /// Animate wheel input
    pub smooth: bool,
    pub mouse_multiplier: f64,
    /// Animate touch input
    pub smooth_touch: bool,
    pub touch_multiplier: f64,
    pub infinite: bool,
    pub normalize_wheel: bool,
    pub wheel_multiplier: f64,
    /// Glide after the finger lifts
    pub touch_inertia: bool,
}

impl ControllerOptions {
    /// Site-wide configuration: 1.2s exponential decay, vertical only,
    /// smooth wheel, native touch with inertia
    pub fn site_default() -> Self {
        ScrollConfig::default().controller_options()
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::site_default()
    }
}

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;

    /// Build controller options from this configuration
    fn controller_options(&self) -> ControllerOptions;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            duration: self.animation_duration(),
            easing: self.easing,
            direction: self.direction,
            gesture_direction: self.gesture_direction,
            smooth: self.is_smooth(),
            mouse_multiplier: self.mouse_multiplier,
            smooth_touch: self.smooth_touch,
            touch_multiplier: self.touch_multiplier,
            infinite: self.infinite,
            normalize_wheel: self.normalize_wheel,
            wheel_multiplier: self.wheel_multiplier,
            touch_inertia: self.touch_inertia,
        }
    }
}
