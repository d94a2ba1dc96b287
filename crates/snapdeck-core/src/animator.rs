//! The slide animator: authoritative slide index plus the offset tween.
//!
//! The animator never touches a real scroll container. Callers pass the
//! container's live offset in when requesting a slide and write back the
//! offsets returned by [`SlideAnimator::frame`].

use crate::constants::NEGLIGIBLE_OFFSET_PX;
use crate::easing::{ease_in_out_cubic, lerp};
use crate::input::Direction;

/// Either a relative step or an absolute target. Both are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideRequest {
    Step(Direction),
    To(i64),
}

/// One in-flight transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from_index: usize,
    pub target_index: usize,
    pub start_offset: f64,
    pub target_offset: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    /// Linear progress in \[0, 1\], re-derived from wall-clock time.
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        lerp(
            self.start_offset,
            self.target_offset,
            ease_in_out_cubic(self.progress(now_ms)),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating(Tween),
}

/// Result of sampling the animator on a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Tween still running; write `offset` and schedule another frame.
    Moving { offset: f64 },
    /// Tween finished; `offset` is exactly `index × viewport height`.
    Landed { offset: f64, index: usize },
}

impl Frame {
    pub fn offset(&self) -> f64 {
        match *self {
            Frame::Moving { offset } | Frame::Landed { offset, .. } => offset,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SlideAnimator {
    total_slides: usize,
    viewport_height: f64,
    duration_ms: f64,
    current: usize,
    state: AnimationState,
}

impl SlideAnimator {
    pub fn new(total_slides: usize, viewport_height: f64, duration_ms: f64) -> Self {
        Self {
            total_slides: total_slides.max(1),
            viewport_height: sanitize_height(viewport_height),
            duration_ms,
            current: 0,
            state: AnimationState::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating(_))
    }

    /// Offset at which `index` rests.
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.viewport_height
    }

    pub fn resting_offset(&self) -> f64 {
        self.offset_of(self.current)
    }

    pub fn resolve_target(&self, request: SlideRequest) -> usize {
        let last = (self.total_slides - 1) as i64;
        let raw = match request {
            SlideRequest::Step(direction) => (self.current as i64).saturating_add(direction.step()),
            SlideRequest::To(index) => index,
        };
        raw.clamp(0, last) as usize
    }

    /// Start a transition from `live_offset`, the container's real position.
    ///
    /// Returns `None` without side effects when already animating, when the
    /// clamped target is the current slide, or when the offset delta is
    /// negligible.
    pub fn request(&mut self, request: SlideRequest, live_offset: f64, now_ms: f64) -> Option<Tween> {
        if self.is_animating() {
            return None;
        }
        let target = self.resolve_target(request);
        if target == self.current {
            return None;
        }
        let target_offset = self.offset_of(target);
        let start_offset = if live_offset.is_finite() {
            live_offset
        } else {
            self.resting_offset()
        };
        if (target_offset - start_offset).abs() < NEGLIGIBLE_OFFSET_PX {
            return None;
        }
        let tween = Tween {
            from_index: self.current,
            target_index: target,
            start_offset,
            target_offset,
            start_ms: now_ms,
            duration_ms: self.duration_ms,
        };
        self.state = AnimationState::Animating(tween);
        log::debug!(
            "[animator] slide {} -> {} ({:.0}px -> {:.0}px)",
            tween.from_index,
            tween.target_index,
            start_offset,
            target_offset
        );
        Some(tween)
    }

    /// Sample the tween at `now_ms`. `None` while idle.
    pub fn frame(&mut self, now_ms: f64) -> Option<Frame> {
        let AnimationState::Animating(tween) = self.state else {
            return None;
        };
        if !tween.is_complete(now_ms) {
            return Some(Frame::Moving {
                offset: tween.sample(now_ms),
            });
        }
        self.state = AnimationState::Idle;
        self.current = tween.target_index;
        log::debug!("[animator] landed on slide {}", self.current);
        Some(Frame::Landed {
            offset: tween.target_offset,
            index: self.current,
        })
    }

    /// Adopt a new viewport height.
    ///
    /// While idle, returns the offset the container must be re-snapped to.
    /// While animating, the tween is retargeted and `None` is returned.
    pub fn set_viewport_height(&mut self, height: f64) -> Option<f64> {
        self.viewport_height = sanitize_height(height);
        match self.state {
            AnimationState::Idle => Some(self.resting_offset()),
            AnimationState::Animating(mut tween) => {
                tween.target_offset = self.offset_of(tween.target_index);
                self.state = AnimationState::Animating(tween);
                None
            }
        }
    }

    /// Jump without animating. Cancels any tween and commits immediately.
    pub fn reset_to(&mut self, index: i64) -> f64 {
        self.state = AnimationState::Idle;
        self.current = self.resolve_target(SlideRequest::To(index));
        self.resting_offset()
    }

    /// Abandon an in-flight tween without committing its target.
    pub fn cancel(&mut self) {
        if let AnimationState::Animating(tween) = self.state {
            log::debug!("[animator] cancelled tween to slide {}", tween.target_index);
        }
        self.state = AnimationState::Idle;
    }
}

fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
