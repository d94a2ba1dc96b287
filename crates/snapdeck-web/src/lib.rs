#![cfg(target_arch = "wasm32")]
use crate::constants::CONTAINER_ID;
use crate::mount::Mount;
use snapdeck_core::{SlideBridge, Subscription};
use wasm_bindgen::prelude::*;

mod affordance;
mod attrs;
mod config;
mod constants;
mod deck;
mod dom;
mod events;
mod frame;
mod listener;
mod mount;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snapdeck-web starting");
    Ok(())
}

/// JS handle to one slide deck. It wraps the position bridge, so any UI
/// holding it can read the landed slide or request a jump.
#[wasm_bindgen]
pub struct SlideDeck {
    bridge: SlideBridge,
    mount: Option<Mount>,
    subscriptions: Vec<(u32, Subscription)>,
    next_subscription: u32,
}

#[wasm_bindgen]
impl SlideDeck {
    /// Mount onto `#container_id` (default `snap-container`), retrying for a
    /// few frames if the element is not in the document yet.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: Option<String>) -> Result<SlideDeck, JsValue> {
        let id = container_id.unwrap_or_else(|| CONTAINER_ID.to_string());
        let bridge = SlideBridge::new();
        let mount = Mount::start(&id, bridge.clone())
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        Ok(SlideDeck {
            bridge,
            mount: Some(mount),
            subscriptions: Vec::new(),
            next_subscription: 0,
        })
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.bridge.current_index() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount.as_ref().is_some_and(Mount::is_mounted)
    }

    /// Ask for an animated transition to `index`. Subject to the same
    /// cooldown and clamping as gestures; returns `false` only when no
    /// container is attached.
    pub fn jump(&self, index: i32) -> bool {
        self.bridge.jump(index as i64)
    }

    /// Snap to slide 0 without animating, for route changes.
    #[wasm_bindgen(js_name = resetToTop)]
    pub fn reset_to_top(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.reset_to(0))
    }

    /// Call `callback(index)` whenever a slide lands. Returns an id for
    /// `offChange`.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: js_sys::Function) -> u32 {
        let subscription = self.bridge.subscribe(move |index| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from(index as u32)) {
                log::error!("[deck] onChange callback threw: {:?}", e);
            }
        });
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscriptions.push((id, subscription));
        id
    }

    #[wasm_bindgen(js_name = offChange)]
    pub fn off_change(&mut self, id: u32) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|(sid, _)| *sid != id);
        self.subscriptions.len() != before
    }

    /// Detach all listeners and cancel any pending frame or retry.
    pub fn unmount(&mut self) {
        self.subscriptions.clear();
        if let Some(mount) = self.mount.take() {
            mount.unmount();
        }
    }
}
