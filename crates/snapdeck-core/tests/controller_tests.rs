use snapdeck_core::{
    AnimationState, DeckConfig, Frame, InputEvent, NavKey, SlideController, SlideRequest, Timing,
};

const H: f64 = 900.0;

fn controller(total: usize) -> SlideController {
    SlideController::new(DeckConfig::new(total).unwrap(), H)
}

/// Minimal stand-in for a scroll container plus frame scheduler.
struct Harness {
    ctl: SlideController,
    offset: f64,
    landings: Vec<usize>,
}

impl Harness {
    fn new(total: usize) -> Self {
        Self {
            ctl: controller(total),
            offset: 0.0,
            landings: Vec::new(),
        }
    }

    fn input(&mut self, event: InputEvent, now: f64) -> bool {
        self.ctl.handle_input(event, self.offset, now).started.is_some()
    }

    fn wheel_down(&mut self, now: f64) -> bool {
        self.input(InputEvent::Wheel { delta_y: 48.0 }, now)
    }

    fn jump(&mut self, index: i64, now: f64) -> bool {
        self.ctl.request(SlideRequest::To(index), self.offset, now).is_some()
    }

    /// Advance frames at 60Hz up to and including `until`.
    fn frames_until(&mut self, from: f64, until: f64) {
        let mut now = from;
        while now <= until {
            if let Some(frame) = self.ctl.frame(now) {
                self.offset = frame.offset();
                if let Frame::Landed { index, .. } = frame {
                    self.landings.push(index);
                }
            }
            now += 1000.0 / 60.0;
        }
    }
}

#[test]
fn default_timing_keeps_cooldown_above_duration() {
    let timing = Timing::default();
    assert_eq!(timing.duration_ms(), 700.0);
    assert_eq!(timing.cooldown_ms(), 750.0);
    assert!(timing.cooldown_ms() >= timing.duration_ms());
}

#[test]
fn wheel_burst_moves_exactly_one_slide() {
    let mut h = Harness::new(11);
    let mut started = 0;
    // Fifty trackpad events over 600ms, interleaved with frames.
    for i in 0..50 {
        let now = i as f64 * 12.0;
        if h.wheel_down(now) {
            started += 1;
        }
        h.frames_until(now, now);
    }
    h.frames_until(600.0, 1000.0);
    assert_eq!(started, 1);
    assert_eq!(h.landings, vec![1]);
    assert_eq!(h.ctl.current_index(), 1);
    assert_eq!(h.offset, H);
}

#[test]
fn burst_direction_is_first_event() {
    let mut h = Harness::new(11);
    h.ctl.reset_to(4);
    h.offset = 4.0 * H;
    assert!(h.input(InputEvent::Wheel { delta_y: -3.0 }, 0.0));
    for i in 1..30 {
        assert!(!h.input(InputEvent::Wheel { delta_y: 200.0 }, i as f64 * 10.0));
    }
    h.frames_until(0.0, 800.0);
    assert_eq!(h.ctl.current_index(), 3);
    assert_eq!(h.offset, 3.0 * H);
}

#[test]
fn eleven_slide_wheel_timeline() {
    let mut h = Harness::new(11);
    assert!(h.wheel_down(0.0));
    h.frames_until(0.0, 300.0);
    // Inside the 750ms cooldown and mid-tween.
    assert!(!h.wheel_down(300.0));
    h.frames_until(300.0, 720.0);
    assert_eq!(h.ctl.current_index(), 1);
    assert!(!h.ctl.is_animating());
    assert!(h.wheel_down(900.0));
    h.frames_until(900.0, 1700.0);
    assert_eq!(h.landings, vec![1, 2]);
    assert_eq!(h.offset, 2.0 * H);
}

#[test]
fn settled_but_inside_cooldown_is_dropped() {
    let mut h = Harness::new(11);
    assert!(h.wheel_down(0.0));
    h.frames_until(0.0, 720.0);
    assert!(!h.ctl.is_animating());
    assert!(!h.wheel_down(740.0));
    assert!(h.wheel_down(750.0));
}

#[test]
fn jump_to_zero_from_five() {
    let mut h = Harness::new(11);
    h.offset = h.ctl.reset_to(5);
    assert_eq!(h.offset, 5.0 * H);
    assert!(h.jump(0, 10_000.0));
    h.frames_until(10_000.0, 10_350.0);
    assert!(h.offset < 5.0 * H && h.offset > 0.0);
    assert_eq!(h.ctl.current_index(), 5);
    h.frames_until(10_350.0, 10_800.0);
    assert_eq!(h.offset, 0.0);
    assert_eq!(h.ctl.current_index(), 0);
}

#[test]
fn jump_mid_tween_has_no_effect() {
    let mut h = Harness::new(11);
    assert!(h.wheel_down(0.0));
    h.frames_until(0.0, 350.0);
    assert!(!h.jump(7, 350.0));
    h.frames_until(350.0, 800.0);
    assert_eq!(h.landings, vec![1]);
    assert_eq!(h.offset, H);
}

#[test]
fn jump_out_of_range_from_zero_is_noop() {
    let mut h = Harness::new(11);
    assert!(!h.jump(-5, 0.0));
    assert!(!h.ctl.is_animating());
    assert_eq!(h.ctl.current_index(), 0);
}

#[test]
fn noop_jump_leaves_cooldown_open() {
    let mut h = Harness::new(11);
    assert!(!h.jump(-5, 0.0));
    assert!(h.wheel_down(100.0));
    h.frames_until(100.0, 900.0);
    assert_eq!(h.landings, vec![1]);
}

#[test]
fn wheel_up_at_top_then_down_is_accepted() {
    let mut h = Harness::new(11);
    assert!(!h.input(InputEvent::Wheel { delta_y: -48.0 }, 0.0));
    assert!(h.wheel_down(400.0));
    assert!(matches!(
        h.ctl.state(),
        AnimationState::Animating(t) if t.target_index == 1
    ));
}

#[test]
fn step_past_last_slide_is_noop() {
    let mut h = Harness::new(11);
    h.offset = h.ctl.reset_to(10);
    assert!(!h.wheel_down(0.0));
    assert!(!h.input(InputEvent::Key(NavKey::PageDown), 5_000.0));
    assert_eq!(h.ctl.current_index(), 10);
}

#[test]
fn short_swipe_does_nothing_long_swipe_moves_once() {
    let mut h = Harness::new(11);
    h.input(InputEvent::TouchStart { y: 700.0 }, 0.0);
    assert!(!h.input(InputEvent::TouchEnd { y: 661.0 }, 80.0));
    h.input(InputEvent::TouchStart { y: 700.0 }, 200.0);
    assert!(h.input(InputEvent::TouchEnd { y: 500.0 }, 320.0));
    h.frames_until(320.0, 1100.0);
    assert_eq!(h.landings, vec![1]);
}

#[test]
fn touch_end_without_position_cancels_pending_swipe() {
    let mut ctl = controller(11);
    ctl.handle_input(InputEvent::TouchStart { y: 700.0 }, 0.0, 0.0);
    // Frontends report a touchend with no lifted touch as a cancel.
    ctl.handle_input(InputEvent::TouchCancel, 0.0, 50.0);
    let out = ctl.handle_input(InputEvent::TouchMove, 0.0, 60.0);
    assert!(!out.suppress_default);
    let out = ctl.handle_input(InputEvent::TouchEnd { y: 100.0 }, 0.0, 70.0);
    assert!(out.started.is_none());
    assert_eq!(ctl.current_index(), 0);
}

#[test]
fn keys_report_suppression() {
    let mut ctl = controller(3);
    let out = ctl.handle_input(InputEvent::Key(NavKey::ArrowDown), 0.0, 0.0);
    assert!(out.suppress_default);
    assert_eq!(out.started.map(|t| t.target_index), Some(1));
    // Dropped by the gate, still suppressed.
    let out = ctl.handle_input(InputEvent::Key(NavKey::ArrowDown), 0.0, 10.0);
    assert!(out.suppress_default);
    assert!(out.started.is_none());
}

#[test]
fn custom_timing_is_honoured() {
    let config = DeckConfig::new(4)
        .unwrap()
        .with_timing(Timing::new(200.0, 0.0).unwrap());
    let mut ctl = SlideController::new(config, 100.0);
    ctl.request(SlideRequest::To(3), 0.0, 0.0).unwrap();
    assert_eq!(
        ctl.frame(200.0),
        Some(Frame::Landed {
            offset: 300.0,
            index: 3
        })
    );
    assert!(ctl.request(SlideRequest::To(0), 300.0, 200.0).is_some());
}

#[test]
fn resize_resnaps_idle_controller() {
    let mut ctl = controller(11);
    ctl.reset_to(3);
    assert_eq!(ctl.set_viewport_height(700.0), Some(2100.0));
    assert_eq!(ctl.viewport_height(), 700.0);
}
