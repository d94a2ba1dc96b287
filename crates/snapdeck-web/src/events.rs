use crate::deck::Shared;
use crate::dom;
use crate::listener::Listener;
use snapdeck_core::{InputEvent, NavKey};
use std::rc::{Rc, Weak};
use web_sys as web;

/// Attach wheel, touch, keyboard and resize listeners for one deck.
pub(crate) fn wire(shared: &Rc<Shared>, window: &web::Window) -> anyhow::Result<Vec<Listener>> {
    let container = shared.container().clone();
    let weak = Rc::downgrade(shared);
    let mut listeners = Vec::with_capacity(7);

    listeners.push(Listener::new(&container, "wheel", false, {
        let weak = weak.clone();
        move |ev: web::WheelEvent| {
            with(&weak, |s| {
                s.handle_input(InputEvent::Wheel { delta_y: ev.delta_y() }, &ev)
            })
        }
    })?);

    listeners.push(Listener::new(&container, "touchstart", true, {
        let weak = weak.clone();
        move |ev: web::TouchEvent| {
            // Only single-finger swipes count; a second finger aborts.
            let touches = ev.touches();
            let event = match touches.get(0) {
                Some(touch) if touches.length() == 1 => InputEvent::TouchStart {
                    y: touch.client_y() as f64,
                },
                _ => InputEvent::TouchCancel,
            };
            with(&weak, |s| s.handle_input(event, &ev))
        }
    })?);

    listeners.push(Listener::new(&container, "touchmove", false, {
        let weak = weak.clone();
        move |ev: web::TouchEvent| with(&weak, |s| s.handle_input(InputEvent::TouchMove, &ev))
    })?);

    listeners.push(Listener::new(&container, "touchend", true, {
        let weak = weak.clone();
        move |ev: web::TouchEvent| {
            // No lifted touch reported: drop the pending start.
            let event = match ev.changed_touches().get(0) {
                Some(touch) => InputEvent::TouchEnd {
                    y: touch.client_y() as f64,
                },
                None => InputEvent::TouchCancel,
            };
            with(&weak, |s| s.handle_input(event, &ev))
        }
    })?);

    listeners.push(Listener::new(&container, "touchcancel", true, {
        let weak = weak.clone();
        move |ev: web::TouchEvent| with(&weak, |s| s.handle_input(InputEvent::TouchCancel, &ev))
    })?);

    listeners.push(Listener::new(window, "keydown", false, {
        let weak = weak.clone();
        move |ev: web::KeyboardEvent| {
            let Some(key) = NavKey::from_key(&ev.key()) else {
                return;
            };
            if ev.default_prevented() || dom::is_editing_target(ev.target()) {
                return;
            }
            with(&weak, |s| s.handle_input(InputEvent::Key(key), &ev))
        }
    })?);

    listeners.push(Listener::new(window, "resize", true, {
        let weak = weak.clone();
        move |_: web::Event| with(&weak, |s| s.resize())
    })?);

    Ok(listeners)
}

#[inline]
fn with(weak: &Weak<Shared>, f: impl FnOnce(&Shared)) {
    if let Some(shared) = weak.upgrade() {
        f(&shared);
    }
}
