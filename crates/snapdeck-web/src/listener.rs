use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that removes itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Attach `handler` for `kind` events. Non-passive listeners may call
    /// `prevent_default`; passive ones cannot.
    pub fn new<E>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
