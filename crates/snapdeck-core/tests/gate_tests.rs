use snapdeck_core::CooldownGate;

#[test]
fn first_signal_is_admitted() {
    let mut gate = CooldownGate::new(750.0);
    assert!(gate.admit(0.0, false));
    assert_eq!(gate.last_accepted_ms(), Some(0.0));
}

#[test]
fn signals_inside_cooldown_are_dropped() {
    let mut gate = CooldownGate::new(750.0);
    assert!(gate.admit(1000.0, false));
    assert!(!gate.admit(1001.0, false));
    assert!(!gate.admit(1749.9, false));
    // Rejections do not move the window.
    assert_eq!(gate.last_accepted_ms(), Some(1000.0));
    assert!(gate.admit(1750.0, false));
}

#[test]
fn animating_blocks_even_after_cooldown() {
    let mut gate = CooldownGate::new(750.0);
    assert!(gate.admit(0.0, false));
    assert!(!gate.admit(5000.0, true));
    assert!(gate.admit(5000.0, false));
}

#[test]
fn clock_going_backwards_is_rejected() {
    let mut gate = CooldownGate::new(750.0);
    assert!(gate.admit(2000.0, false));
    assert!(!gate.would_admit(100.0, false));
}

#[test]
fn reset_reopens_the_gate() {
    let mut gate = CooldownGate::new(750.0);
    assert!(gate.admit(0.0, false));
    gate.reset();
    assert!(gate.admit(10.0, false));
}
