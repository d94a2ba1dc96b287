use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `requestAnimationFrame` callback that is scheduled on demand rather
/// than running forever. At most one frame is pending at a time, and a
/// pending frame is cancelled on drop so it cannot fire into a torn-down
/// owner.
pub struct FrameLoop {
    window: web::Window,
    pending: Cell<Option<i32>>,
    tick: Closure<dyn FnMut(f64)>,
}

impl FrameLoop {
    pub fn new(window: web::Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            window,
            pending: Cell::new(None),
            tick: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
        }
    }

    pub fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    /// Call first thing inside the frame callback.
    pub fn clear_pending(&self) {
        self.pending.set(None);
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
