//! Gesture recognition for wheel, touch and keyboard input.
//!
//! Every qualifying gesture collapses to a single [`Direction`]. Wheel
//! magnitude is ignored; a trackpad burst yields one signal per event and
//! the cooldown absorbs all but the first.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher slide indices (scroll down, swipe up).
    Forward,
    /// Towards slide 0.
    Backward,
}

impl Direction {
    #[inline]
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Direction implied by a DOM-convention wheel delta (positive is down).
    #[inline]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Forward)
        } else if delta_y < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value to a navigation key.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "PageDown" => Some(NavKey::PageDown),
            "PageUp" => Some(NavKey::PageUp),
            _ => None,
        }
    }

    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            NavKey::ArrowDown | NavKey::PageDown => Direction::Forward,
            NavKey::ArrowUp | NavKey::PageUp => Direction::Backward,
        }
    }
}

/// Raw input, already reduced to the single vertical axis we care about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f64 },
    TouchStart { y: f64 },
    TouchMove,
    TouchEnd { y: f64 },
    TouchCancel,
    Key(NavKey),
}

/// What the aggregator decided about one input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gesture {
    pub direction: Option<Direction>,
    /// The host should cancel the event's default scrolling action.
    pub suppress_default: bool,
}

impl Gesture {
    fn none() -> Self {
        Self::default()
    }

    fn suppressed(direction: Option<Direction>) -> Self {
        Self {
            direction,
            suppress_default: true,
        }
    }
}

/// Turns raw events into directional signals, holding the pending touch
/// start between `TouchStart` and `TouchEnd`.
#[derive(Clone, Debug)]
pub struct InputAggregator {
    swipe_min_distance_px: f64,
    touch_start_y: Option<f64>,
}

impl InputAggregator {
    pub fn new(swipe_min_distance_px: f64) -> Self {
        Self {
            swipe_min_distance_px,
            touch_start_y: None,
        }
    }

    pub fn touch_pending(&self) -> bool {
        self.touch_start_y.is_some()
    }

    pub fn recognize(&mut self, event: InputEvent) -> Gesture {
        match event {
            InputEvent::Wheel { delta_y } => {
                Gesture::suppressed(Direction::from_wheel_delta(delta_y))
            }
            InputEvent::Key(key) => Gesture::suppressed(Some(key.direction())),
            InputEvent::TouchStart { y } => {
                self.touch_start_y = Some(y);
                Gesture::none()
            }
            InputEvent::TouchMove => {
                if self.touch_pending() {
                    Gesture::suppressed(None)
                } else {
                    Gesture::none()
                }
            }
            InputEvent::TouchEnd { y } => {
                let Some(start_y) = self.touch_start_y.take() else {
                    return Gesture::none();
                };
                Gesture {
                    direction: self.swipe_direction(start_y, y),
                    suppress_default: false,
                }
            }
            InputEvent::TouchCancel => {
                self.touch_start_y = None;
                Gesture::none()
            }
        }
    }

    // Finger moving up (start below end) advances the deck.
    fn swipe_direction(&self, start_y: f64, end_y: f64) -> Option<Direction> {
        let displacement = start_y - end_y;
        if !displacement.is_finite() || displacement.abs() < self.swipe_min_distance_px {
            return None;
        }
        if displacement > 0.0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }
}
