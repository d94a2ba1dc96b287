// Shared timing and gesture tuning constants used by every frontend.

// Tween
pub const SLIDE_DURATION_MS: f64 = 700.0; // one slide transition, wall-clock
pub const SETTLE_MS: f64 = 50.0; // quiet period after a transition lands

// Gestures
pub const SWIPE_MIN_DISTANCE_PX: f64 = 40.0; // shorter vertical swipes are taps
pub const NEGLIGIBLE_OFFSET_PX: f64 = 1.0; // offset deltas below this never animate

// Mounting
pub const ATTACH_MAX_ATTEMPTS: u32 = 20; // one per animation frame, ~330ms at 60Hz

// Affordances
pub const TO_TOP_REVEAL_FRACTION: f64 = 0.5; // viewport fraction scrolled before "to top" shows
