//! Scoped DOM event listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, EventTarget};

use super::dom;

/// A listener attached to an event target. Detached on drop.
pub struct EventListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerHandle {
    /// Attaches `handler` for `event` on `target`.
    pub fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }

    /// Attaches `handler` on `document`.
    pub fn document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::attach(dom::document()?.into(), event, handler)
    }

    /// Attaches `handler` on `window`.
    pub fn window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::attach(dom::window()?.into(), event, handler)
    }
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
