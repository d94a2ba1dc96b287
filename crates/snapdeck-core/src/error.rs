use thiserror::Error;

/// Rejected deck configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("a deck needs at least one slide")]
    NoSlides,
    #[error("slide duration must be positive and finite, got {0}ms")]
    InvalidDuration(f64),
    #[error("settle period must be non-negative and finite, got {0}ms")]
    InvalidSettle(f64),
    #[error("swipe threshold must be positive and finite, got {0}px")]
    InvalidSwipeThreshold(f64),
}

/// Failure to take the writer side of a [`crate::SlideBridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("position bridge already has a writer")]
    AlreadyBound,
}
