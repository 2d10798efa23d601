//! Scroll-to directives and their option merging

use std::time::Duration;

use crate::easing::EasingType;

/// Where a scroll-to request should land
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    /// Absolute offset along the scroll axis
    Offset(f64),
    Top,
    Bottom,
    /// Named point in the document registered with `ScrollHandle::set_anchor`
    Anchor(String),
}

impl From<f64> for ScrollTarget {
    fn from(offset: f64) -> Self {
        ScrollTarget::Offset(offset)
    }
}

impl From<u32> for ScrollTarget {
    fn from(offset: u32) -> Self {
        ScrollTarget::Offset(offset as f64)
    }
}

impl From<&str> for ScrollTarget {
    /// "top" and "bottom" are keywords, anything else names an anchor ("#faq" or "faq")
    fn from(target: &str) -> Self {
        match target {
            "top" => ScrollTarget::Top,
            "bottom" => ScrollTarget::Bottom,
            anchor => ScrollTarget::Anchor(anchor.trim_start_matches('#').to_string()),
        }
    }
}

/// Fully resolved scroll-to parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToRequest {
    /// Added to the resolved target position
    pub offset: f64,
    /// Zero jumps immediately
    pub duration: Duration,
    pub easing: EasingType,
}

impl Default for ScrollToRequest {
    fn default() -> Self {
        Self {
            offset: 0.0,
            duration: Duration::from_millis(1200),
            easing: EasingType::ExpoDecay,
        }
    }
}

impl ScrollToRequest {
    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Caller overrides, merged field by field over the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollToOptions {
    pub offset: Option<f64>,
    pub duration: Option<Duration>,
    pub easing: Option<EasingType>,
}

impl ScrollToOptions {
    /// Zero-duration request: jump without animating
    pub fn immediate() -> Self {
        Self {
            duration: Some(Duration::ZERO),
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Shallow merge: every set field wins over `defaults`
    pub fn merge_over(self, defaults: ScrollToRequest) -> ScrollToRequest {
        ScrollToRequest {
            offset: self.offset.unwrap_or(defaults.offset),
            duration: self.duration.unwrap_or(defaults.duration),
            easing: self.easing.unwrap_or(defaults.easing),
        }
    }

    /// Merge over the default request
    pub fn resolve(self) -> ScrollToRequest {
        self.merge_over(ScrollToRequest::default())
    }
}
