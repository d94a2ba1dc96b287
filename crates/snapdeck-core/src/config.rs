//! Deck configuration.
//!
//! The cooldown is never configured directly: it is derived as
//! `duration + settle`, which keeps it at least as long as the tween so a
//! new gesture can only begin after the previous transition has landed.

use crate::constants::{SETTLE_MS, SLIDE_DURATION_MS, SWIPE_MIN_DISTANCE_PX};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    duration_ms: f64,
    settle_ms: f64,
}

impl Timing {
    pub fn new(duration_ms: f64, settle_ms: f64) -> Result<Self, ConfigError> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(ConfigError::InvalidDuration(duration_ms));
        }
        if !settle_ms.is_finite() || settle_ms < 0.0 {
            return Err(ConfigError::InvalidSettle(settle_ms));
        }
        Ok(Self {
            duration_ms,
            settle_ms,
        })
    }

    /// Length of one slide tween.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn settle_ms(&self) -> f64 {
        self.settle_ms
    }

    /// Minimum spacing between two accepted gestures.
    pub fn cooldown_ms(&self) -> f64 {
        self.duration_ms + self.settle_ms
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: SLIDE_DURATION_MS,
            settle_ms: SETTLE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeckConfig {
    total_slides: usize,
    timing: Timing,
    swipe_min_distance_px: f64,
}

impl DeckConfig {
    pub fn new(total_slides: usize) -> Result<Self, ConfigError> {
        if total_slides == 0 {
            return Err(ConfigError::NoSlides);
        }
        Ok(Self {
            total_slides,
            timing: Timing::default(),
            swipe_min_distance_px: SWIPE_MIN_DISTANCE_PX,
        })
    }

    /// Always at least one.
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn swipe_min_distance_px(&self) -> f64 {
        self.swipe_min_distance_px
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_swipe_threshold(mut self, px: f64) -> Result<Self, ConfigError> {
        if !px.is_finite() || px <= 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(px));
        }
        self.swipe_min_distance_px = px;
        Ok(self)
    }

    pub fn last_index(&self) -> usize {
        self.total_slides - 1
    }
}
