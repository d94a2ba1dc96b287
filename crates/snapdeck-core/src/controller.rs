//! Fuses the input aggregator, cooldown gate and animator into the one
//! object a frontend drives.
//!
//! Transition table:
//!
//! | state     | trigger                     | result                         |
//! |-----------|-----------------------------|--------------------------------|
//! | Idle      | signal admitted, tween made | Animating, cooldown stamped    |
//! | Idle      | signal resolves to no-op    | dropped, cooldown untouched    |
//! | Idle      | signal inside cooldown      | dropped                        |
//! | Animating | any signal                  | dropped                        |
//! | Animating | frame at t >= duration      | Idle, index committed          |

use crate::animator::{AnimationState, Frame, SlideAnimator, SlideRequest, Tween};
use crate::config::DeckConfig;
use crate::gate::CooldownGate;
use crate::input::{InputAggregator, InputEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputOutcome {
    /// Cancel the host event's default action.
    pub suppress_default: bool,
    /// Present when this event started a transition.
    pub started: Option<Tween>,
}

#[derive(Clone, Debug)]
pub struct SlideController {
    config: DeckConfig,
    aggregator: InputAggregator,
    gate: CooldownGate,
    animator: SlideAnimator,
}

impl SlideController {
    pub fn new(config: DeckConfig, viewport_height: f64) -> Self {
        let aggregator = InputAggregator::new(config.swipe_min_distance_px());
        let gate = CooldownGate::new(config.timing().cooldown_ms());
        let animator = SlideAnimator::new(
            config.total_slides(),
            viewport_height,
            config.timing().duration_ms(),
        );
        Self {
            config,
            aggregator,
            gate,
            animator,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.animator.current_index()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn viewport_height(&self) -> f64 {
        self.animator.viewport_height()
    }

    pub fn resting_offset(&self) -> f64 {
        self.animator.resting_offset()
    }

    pub fn handle_input(&mut self, event: InputEvent, live_offset: f64, now_ms: f64) -> InputOutcome {
        let gesture = self.aggregator.recognize(event);
        let started = gesture
            .direction
            .and_then(|direction| self.request(SlideRequest::Step(direction), live_offset, now_ms));
        InputOutcome {
            suppress_default: gesture.suppress_default,
            started,
        }
    }

    /// Gate-checked slide request, shared by gestures and bridge jumps.
    ///
    /// The cooldown window is stamped only when a tween actually starts.
    /// Requests the animator resolves to nothing (clamped to the current
    /// slide, negligible offset) leave the gate untouched.
    pub fn request(&mut self, request: SlideRequest, live_offset: f64, now_ms: f64) -> Option<Tween> {
        if !self.gate.would_admit(now_ms, self.animator.is_animating()) {
            log::trace!("[controller] dropped {:?} at {:.0}ms", request, now_ms);
            return None;
        }
        let tween = self.animator.request(request, live_offset, now_ms)?;
        self.gate.admit(now_ms, false);
        Some(tween)
    }

    pub fn frame(&mut self, now_ms: f64) -> Option<Frame> {
        self.animator.frame(now_ms)
    }

    pub fn set_viewport_height(&mut self, height: f64) -> Option<f64> {
        self.animator.set_viewport_height(height)
    }

    /// Instantly move to `index` (clamped), e.g. after navigation.
    pub fn reset_to(&mut self, index: i64) -> f64 {
        self.gate.reset();
        self.animator.reset_to(index)
    }

    pub fn cancel(&mut self) {
        self.animator.cancel();
    }
}
