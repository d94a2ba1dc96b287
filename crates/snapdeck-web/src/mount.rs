use crate::config;
use crate::deck::Deck;
use crate::dom;
use crate::frame::FrameLoop;
use snapdeck_core::constants::ATTACH_MAX_ATTEMPTS;
use snapdeck_core::{AttachRetry, AttachStep, SlideBridge};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct Inner {
    container_id: String,
    bridge: SlideBridge,
    retry: RefCell<AttachRetry>,
    deck: RefCell<Option<Rc<Deck>>>,
    frames: FrameLoop,
}

impl Inner {
    fn attempt(&self) {
        self.frames.clear_pending();
        let found = dom::window_document().and_then(|d| d.get_element_by_id(&self.container_id));
        let step = self.retry.borrow_mut().record(found.is_some());
        match (step, found) {
            (AttachStep::Attached, Some(container)) => {
                match config::from_element(&container)
                    .and_then(|cfg| Deck::attach(container, cfg, &self.bridge))
                {
                    Ok(deck) => *self.deck.borrow_mut() = Some(Rc::new(deck)),
                    Err(e) => log::error!("[mount] #{}: {:#}", self.container_id, e),
                }
            }
            (AttachStep::Retry { attempt }, _) => {
                log::debug!("[mount] #{} not ready (attempt {})", self.container_id, attempt);
                self.frames.request();
            }
            _ => {}
        }
    }
}

/// Attaches a deck to `#container_id`, retrying once per frame while the
/// element does not exist yet. Dropping the mount (or calling
/// [`Mount::unmount`]) cancels a pending retry and detaches the deck.
pub struct Mount {
    inner: Rc<Inner>,
}

impl Mount {
    pub fn start(container_id: &str, bridge: SlideBridge) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let weak = weak.clone();
            Inner {
                container_id: container_id.to_string(),
                bridge,
                retry: RefCell::new(AttachRetry::new(ATTACH_MAX_ATTEMPTS)),
                deck: RefCell::new(None),
                frames: FrameLoop::new(window, move |_ts: f64| {
                    if let Some(inner) = weak.upgrade() {
                        inner.attempt();
                    }
                }),
            }
        });
        inner.attempt();
        Ok(Self { inner })
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.deck.borrow().is_some()
    }

    /// Instantly move to `index`; `false` when nothing is attached.
    pub fn reset_to(&self, index: i64) -> bool {
        // Cloned out so subscribers notified by the reset may unmount.
        let deck = self.inner.deck.borrow().clone();
        match deck {
            Some(deck) => {
                deck.reset_to(index);
                true
            }
            None => false,
        }
    }

    pub fn unmount(&self) {
        self.inner.frames.cancel();
        self.inner.retry.borrow_mut().cancel();
        let deck = self.inner.deck.borrow_mut().take();
        drop(deck);
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmount();
    }
}
