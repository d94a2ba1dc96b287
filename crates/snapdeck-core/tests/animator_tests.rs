use snapdeck_core::{AnimationState, Direction, Frame, SlideAnimator, SlideRequest};

const H: f64 = 800.0;

fn animator(total: usize) -> SlideAnimator {
    SlideAnimator::new(total, H, 700.0)
}

fn run_to_completion(a: &mut SlideAnimator, start_ms: f64) -> Frame {
    let mut now = start_ms;
    loop {
        now += 16.0;
        match a.frame(now) {
            Some(f @ Frame::Landed { .. }) => return f,
            Some(Frame::Moving { .. }) => {}
            None => panic!("animator went idle without landing"),
        }
    }
}

#[test]
fn step_forward_lands_exactly() {
    let mut a = animator(11);
    let tween = a.request(SlideRequest::Step(Direction::Forward), 0.0, 0.0).unwrap();
    assert_eq!(tween.target_index, 1);
    assert_eq!(tween.target_offset, H);
    assert!(a.is_animating());
    // Not committed until landing.
    assert_eq!(a.current_index(), 0);

    let landed = run_to_completion(&mut a, 0.0);
    assert_eq!(
        landed,
        Frame::Landed {
            offset: H,
            index: 1
        }
    );
    assert_eq!(a.current_index(), 1);
    assert_eq!(a.state(), AnimationState::Idle);
    assert_eq!(a.frame(2000.0), None);
}

#[test]
fn offset_follows_eased_wall_clock() {
    let mut a = animator(3);
    a.request(SlideRequest::To(2), 0.0, 100.0).unwrap();
    let at = |a: &mut SlideAnimator, now| a.frame(now).unwrap().offset();
    assert_eq!(at(&mut a, 100.0), 0.0);
    // Halfway through time is halfway through distance for a symmetric ease.
    assert!((at(&mut a, 450.0) - 2.0 * H / 2.0).abs() < 1e-9);
    // A skipped frame does not slow the tween down.
    let late = a.frame(799.0).unwrap();
    assert!(matches!(late, Frame::Moving { .. }));
    assert!(late.offset() > 1590.0 && late.offset() < 2.0 * H);
    assert_eq!(
        a.frame(800.0),
        Some(Frame::Landed {
            offset: 2.0 * H,
            index: 2
        })
    );
}

#[test]
fn step_back_at_zero_is_noop() {
    let mut a = animator(11);
    assert_eq!(a.request(SlideRequest::Step(Direction::Backward), 0.0, 0.0), None);
    assert!(!a.is_animating());
}

#[test]
fn step_forward_at_last_is_noop() {
    let mut a = animator(4);
    a.reset_to(3);
    assert_eq!(a.request(SlideRequest::Step(Direction::Forward), 3.0 * H, 0.0), None);
    assert_eq!(a.current_index(), 3);
}

#[test]
fn absolute_targets_are_clamped() {
    let a = animator(11);
    assert_eq!(a.resolve_target(SlideRequest::To(-5)), 0);
    assert_eq!(a.resolve_target(SlideRequest::To(99)), 10);
    assert_eq!(a.resolve_target(SlideRequest::To(i64::MIN)), 0);
    assert_eq!(a.resolve_target(SlideRequest::To(i64::MAX)), 10);

    let mut a = animator(11);
    assert_eq!(a.request(SlideRequest::To(-5), 0.0, 0.0), None);
    let t = a.request(SlideRequest::To(40), 0.0, 0.0).unwrap();
    assert_eq!(t.target_index, 10);
}

#[test]
fn requests_during_animation_are_ignored() {
    let mut a = animator(11);
    a.request(SlideRequest::Step(Direction::Forward), 0.0, 0.0).unwrap();
    a.frame(300.0);
    assert_eq!(a.request(SlideRequest::To(7), 400.0, 300.0), None);
    let landed = run_to_completion(&mut a, 300.0);
    assert_eq!(landed, Frame::Landed { offset: H, index: 1 });
}

#[test]
fn start_offset_is_the_live_offset() {
    let mut a = animator(5);
    // User dragged the container to 250px without changing the index.
    let t = a.request(SlideRequest::Step(Direction::Forward), 250.0, 0.0).unwrap();
    assert_eq!(t.start_offset, 250.0);
    assert_eq!(a.frame(0.0).unwrap().offset(), 250.0);
    assert_eq!(a.frame(700.0).unwrap().offset(), H);
}

#[test]
fn negligible_offset_delta_is_noop() {
    let mut a = animator(5);
    assert_eq!(
        a.request(SlideRequest::Step(Direction::Forward), H - 0.4, 0.0),
        None
    );
    assert_eq!(a.current_index(), 0);
}

#[test]
fn non_finite_live_offset_falls_back_to_resting() {
    let mut a = animator(5);
    let t = a
        .request(SlideRequest::Step(Direction::Forward), f64::NAN, 0.0)
        .unwrap();
    assert_eq!(t.start_offset, 0.0);
}

#[test]
fn resize_while_idle_returns_resnap_offset() {
    let mut a = animator(5);
    a.reset_to(2);
    assert_eq!(a.set_viewport_height(600.0), Some(1200.0));
    assert_eq!(a.resting_offset(), 1200.0);
}

#[test]
fn resize_while_animating_retargets() {
    let mut a = animator(5);
    a.request(SlideRequest::To(3), 0.0, 0.0).unwrap();
    assert_eq!(a.set_viewport_height(500.0), None);
    assert_eq!(
        a.frame(700.0),
        Some(Frame::Landed {
            offset: 1500.0,
            index: 3
        })
    );
}

#[test]
fn reset_cancels_and_commits() {
    let mut a = animator(11);
    a.request(SlideRequest::To(5), 0.0, 0.0).unwrap();
    assert_eq!(a.reset_to(0), 0.0);
    assert!(!a.is_animating());
    assert_eq!(a.current_index(), 0);
    assert_eq!(a.reset_to(42), 10.0 * H);
}

#[test]
fn cancel_drops_tween_without_commit() {
    let mut a = animator(11);
    a.request(SlideRequest::To(4), 0.0, 0.0).unwrap();
    a.frame(200.0);
    a.cancel();
    assert_eq!(a.frame(900.0), None);
    assert_eq!(a.current_index(), 0);
}

#[test]
fn single_slide_deck_never_animates() {
    let mut a = animator(1);
    assert_eq!(a.request(SlideRequest::Step(Direction::Forward), 0.0, 0.0), None);
    assert_eq!(a.request(SlideRequest::To(3), 0.0, 0.0), None);
}
