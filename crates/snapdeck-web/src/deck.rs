use crate::affordance::{self, Affordances};
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use crate::listener::Listener;
use snapdeck_core::{
    nearest_index, BridgeBinding, DeckConfig, Frame, InputEvent, SlideBridge, SlideController,
    SlideRequest,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// State reachable from every listener and frame callback. Callbacks hold
/// a `Weak` to it, so only the owning [`Deck`] keeps it alive.
pub(crate) struct Shared {
    container: web::Element,
    controller: RefCell<SlideController>,
    binding: RefCell<Option<BridgeBinding>>,
    frames: FrameLoop,
}

impl Shared {
    pub(crate) fn container(&self) -> &web::Element {
        &self.container
    }

    fn live_offset(&self) -> f64 {
        dom::scroll_offset(&self.container)
    }

    pub(crate) fn handle_input(&self, event: InputEvent, raw: &web::Event) {
        let live = self.live_offset();
        let outcome = self
            .controller
            .borrow_mut()
            .handle_input(event, live, dom::now_ms());
        if outcome.suppress_default {
            raw.prevent_default();
        }
        if outcome.started.is_some() {
            self.frames.request();
        }
    }

    pub(crate) fn request(&self, request: SlideRequest) -> bool {
        let live = self.live_offset();
        let started = self
            .controller
            .borrow_mut()
            .request(request, live, dom::now_ms());
        if started.is_some() {
            self.frames.request();
        }
        started.is_some()
    }

    fn on_frame(&self) {
        self.frames.clear_pending();
        let frame = self.controller.borrow_mut().frame(dom::now_ms());
        match frame {
            None => {}
            Some(Frame::Moving { offset }) => {
                dom::set_scroll_offset(&self.container, offset);
                self.frames.request();
            }
            Some(Frame::Landed { offset, index }) => {
                dom::set_scroll_offset(&self.container, offset);
                self.publish(index);
            }
        }
    }

    pub(crate) fn resize(&self) {
        let height = dom::viewport_height(&self.container);
        let resnap = self.controller.borrow_mut().set_viewport_height(height);
        if let Some(offset) = resnap {
            dom::set_scroll_offset(&self.container, offset);
        }
    }

    fn reset_to(&self, index: i64) {
        self.frames.cancel();
        let (offset, current) = {
            let mut controller = self.controller.borrow_mut();
            let offset = controller.reset_to(index);
            (offset, controller.current_index())
        };
        dom::set_scroll_offset(&self.container, offset);
        self.publish(current);
    }

    fn publish(&self, index: usize) {
        if let Some(binding) = self.binding.borrow().as_ref() {
            binding.publish(index);
        }
    }

    fn teardown(&self) {
        self.frames.cancel();
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.cancel();
        }
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.take();
        }
    }
}

/// A controller attached to one live scroll container.
pub struct Deck {
    shared: Rc<Shared>,
    listeners: Vec<Listener>,
    affordances: Option<Affordances>,
}

impl Deck {
    pub fn attach(
        container: web::Element,
        config: DeckConfig,
        bridge: &SlideBridge,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let height = dom::viewport_height(&container);
        let total = config.total_slides();
        let mut controller = SlideController::new(config, height);
        // A container restored mid-deck starts on the nearest slide.
        let start = nearest_index(dom::scroll_offset(&container), height, total);
        let offset = controller.reset_to(start as i64);
        dom::set_scroll_offset(&container, offset);

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let frames = FrameLoop::new(window.clone(), move |_ts: f64| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_frame();
                }
            });
            Shared {
                container: container.clone(),
                controller: RefCell::new(controller),
                binding: RefCell::new(None),
                frames,
            }
        });

        let weak = Rc::downgrade(&shared);
        let binding = bridge
            .bind(start, move |index| {
                if let Some(shared) = weak.upgrade() {
                    shared.request(SlideRequest::To(index));
                }
            })
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        *shared.binding.borrow_mut() = Some(binding);

        let listeners = events::wire(&shared, &window)?;
        let affordances = affordance::wire(&document, &container, bridge)?;
        log::info!(
            "[deck] attached: {} slides, starting at {}, viewport {:.0}px",
            total,
            start,
            height
        );
        Ok(Self {
            shared,
            listeners,
            affordances: Some(affordances),
        })
    }

    /// Jump without animating, e.g. when the host page navigates.
    pub fn reset_to(&self, index: i64) {
        self.shared.reset_to(index);
    }
}

impl Drop for Deck {
    fn drop(&mut self) {
        self.listeners.clear();
        self.affordances = None;
        self.shared.teardown();
        log::info!("[deck] detached");
    }
}
