//! Pure easing functions for scroll animations
//!
//! Map input [0, 1] to output [0, 1].

pub use dronehub_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::ExpoDecay => exponential_decay(t),
        }
    }
}

/// Exponential decay: f(t) = min(1, 1.001 - 2^(-10t))
///
/// Overshoots 1 slightly before the end, so it settles before t = 1.
#[inline]
fn exponential_decay(t: f64) -> f64 {
    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 2] = [EasingType::Linear, EasingType::ExpoDecay];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            // t=0 should give ~0
            assert!(easing.apply(0.0).abs() < 0.002, "{:?} at t=0", easing);
            // t=1 should give 1
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_expo_decay_values() {
        let easing = EasingType::ExpoDecay;
        assert!((easing.apply(0.0) - 0.001).abs() < 1e-9);
        assert!((easing.apply(0.1) - 0.501).abs() < 1e-9);
        // Saturates once 2^(-10t) <= 0.001
        assert_eq!(easing.apply(0.999), 1.0);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }
}
