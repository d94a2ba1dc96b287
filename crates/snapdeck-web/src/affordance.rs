use crate::constants::{CURRENT_CLASS, TO_TOP_ID, VISIBLE_CLASS};
use crate::dom;
use crate::listener::Listener;
use snapdeck_core::{to_top_visible, SlideBridge, Subscription};
use web_sys as web;

/// UI outside the scroll region that follows the deck: the optional
/// "return to top" button and the `is-current` marker on slide sections.
pub struct Affordances {
    _listeners: Vec<Listener>,
    _current: Subscription,
}

pub fn wire(
    document: &web::Document,
    container: &web::Element,
    bridge: &SlideBridge,
) -> anyhow::Result<Affordances> {
    let mut listeners = Vec::new();
    if let Some(button) = document.get_element_by_id(TO_TOP_ID) {
        sync_to_top(&button, container);
        let (b, c) = (button.clone(), container.clone());
        listeners.push(Listener::new(container, "scroll", true, move |_: web::Event| {
            sync_to_top(&b, &c)
        })?);
        let bridge = bridge.clone();
        listeners.push(Listener::new(&button, "click", false, move |ev: web::MouseEvent| {
            ev.prevent_default();
            bridge.jump(0);
        })?);
    } else {
        log::debug!("[affordance] no #{} element, skipping", TO_TOP_ID);
    }

    mark_current(container, bridge.current_index());
    let c = container.clone();
    let current = bridge.subscribe(move |index| mark_current(&c, index));

    Ok(Affordances {
        _listeners: listeners,
        _current: current,
    })
}

fn sync_to_top(button: &web::Element, container: &web::Element) {
    let visible = to_top_visible(
        dom::scroll_offset(container),
        dom::viewport_height(container),
    );
    dom::toggle_class(button, VISIBLE_CLASS, visible);
}

fn mark_current(container: &web::Element, index: usize) {
    let slides = container.children();
    for i in 0..slides.length() {
        if let Some(slide) = slides.item(i) {
            dom::toggle_class(&slide, CURRENT_CLASS, i as usize == index);
        }
    }
}
