//! Position bridge: a cloneable handle through which distant UI reads the
//! landed slide index and asks for "jump to slide N".
//!
//! The handle is passed explicitly to every consumer. Exactly one writer,
//! the frontend owning the scroll container, holds a [`BridgeBinding`];
//! dropping it (unmount) unbinds the jump command. Reads and jumps on an
//! unbound bridge are safe no-ops.

use crate::error::BridgeError;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type JumpFn = Rc<dyn Fn(i64)>;
type Listener = Rc<dyn Fn(usize)>;

#[derive(Default)]
struct Slot {
    current: usize,
    jump: Option<JumpFn>,
    listeners: SmallVec<[(u64, Listener); 4]>,
    next_id: u64,
}

#[derive(Clone, Default)]
pub struct SlideBridge {
    slot: Rc<RefCell<Slot>>,
}

impl fmt::Debug for SlideBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("SlideBridge")
            .field("current", &slot.current)
            .field("bound", &slot.jump.is_some())
            .field("listeners", &slot.listeners.len())
            .finish()
    }
}

impl SlideBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed slide index; 0 before anything was published.
    pub fn current_index(&self) -> usize {
        self.slot.borrow().current
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().jump.is_some()
    }

    /// Request a transition to `index`. The request goes through the same
    /// cooldown and no-op rules as a gesture. Returns `false` when no
    /// controller is bound.
    pub fn jump(&self, index: i64) -> bool {
        let jump = self.slot.borrow().jump.clone();
        match jump {
            Some(jump) => {
                jump(index);
                true
            }
            None => {
                log::debug!("[bridge] jump({}) ignored: no controller bound", index);
                false
            }
        }
    }

    /// Call `listener` with the new index every time a slide lands.
    pub fn subscribe(&self, listener: impl Fn(usize) + 'static) -> Subscription {
        let mut slot = self.slot.borrow_mut();
        let id = slot.next_id;
        slot.next_id += 1;
        slot.listeners.push((id, Rc::new(listener)));
        Subscription {
            slot: Rc::downgrade(&self.slot),
            id,
        }
    }

    /// Become the single writer, installing the jump command.
    pub fn bind(
        &self,
        current: usize,
        jump: impl Fn(i64) + 'static,
    ) -> Result<BridgeBinding, BridgeError> {
        let mut slot = self.slot.borrow_mut();
        if slot.jump.is_some() {
            log::warn!("[bridge] refusing second writer");
            return Err(BridgeError::AlreadyBound);
        }
        slot.jump = Some(Rc::new(jump));
        slot.current = current;
        Ok(BridgeBinding {
            slot: self.slot.clone(),
        })
    }
}

/// Writer side of a [`SlideBridge`]. Unbinds on drop.
pub struct BridgeBinding {
    slot: Rc<RefCell<Slot>>,
}

impl fmt::Debug for BridgeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeBinding").finish_non_exhaustive()
    }
}

impl BridgeBinding {
    /// Commit `index` and notify subscribers.
    ///
    /// Subscribers run after the slot is released, so they may read the
    /// bridge or call `jump` from inside the callback.
    pub fn publish(&self, index: usize) {
        let listeners: SmallVec<[Listener; 4]> = {
            let mut slot = self.slot.borrow_mut();
            slot.current = index;
            slot.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(index);
        }
    }
}

impl Drop for BridgeBinding {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            slot.jump = None;
        }
    }
}

/// Keeps a bridge listener registered; unsubscribes on drop.
pub struct Subscription {
    slot: Weak<RefCell<Slot>>,
    id: u64,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.upgrade() {
            if let Ok(mut slot) = slot.try_borrow_mut() {
                slot.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
