//! Tween between two scroll positions, advanced by frame deltas

use std::time::Duration;

use crate::easing::{EasingType, EasingTypeExt};
use crate::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ActiveAnimation {
    /// Starting scroll position
    from: f64,
    /// Target scroll position
    to: f64,
    /// Time advanced so far
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
}

impl ActiveAnimation {
    pub(crate) fn new(from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub(crate) fn target(&self) -> f64 {
        self.to
    }

    /// Current interpolated position
    pub(crate) fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let t = progress(self.elapsed, self.duration);
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Advance by a frame delta and return the new position
    pub(crate) fn advance(&mut self, delta: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.value()
    }

    pub(crate) fn is_complete(&self) -> bool {
        is_complete(self.elapsed, self.duration)
    }
}
