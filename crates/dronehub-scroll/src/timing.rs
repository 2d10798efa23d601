//! Time calculation utilities for scroll animations
//!
//! Animations are driven by frame timestamps rather than the wall clock,
//! so all functions take elapsed time explicitly.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Time between two frame timestamps, zero when the clock goes backwards
#[inline]
pub fn frame_delta(previous: Option<Duration>, now: Duration) -> Duration {
    previous.map_or(Duration::ZERO, |prev| now.saturating_sub(prev))
}
