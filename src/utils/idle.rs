//! Idle-period scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use super::dom;
use crate::core::IdleScheduler;

/// A deferred task shared between the idle callback and the timeout
/// fallback. Whichever side runs first takes it; the other finds it gone.
#[derive(Clone)]
struct PendingTask(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl PendingTask {
    fn new(task: Box<dyn FnOnce()>) -> Self {
        Self(Rc::new(RefCell::new(Some(task))))
    }

    /// Runs the task if it has not run yet. Returns whether it ran.
    fn run(&self) -> bool {
        let task = self.0.borrow_mut().take();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

/// Runs deferred work via `requestIdleCallback`, falling back to a zero-delay
/// timeout where the browser lacks it (Safari) or the call throws.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleCallbackScheduler;

impl IdleScheduler for IdleCallbackScheduler {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        let pending = PendingTask::new(task);

        if let Some(window) = dom::window()
            && let Ok(ric) = Reflect::get(&window, &JsValue::from_str("requestIdleCallback"))
            && let Some(ric) = ric.dyn_ref::<Function>()
        {
            let on_idle = pending.clone();
            let callback = Closure::once_into_js(move || {
                on_idle.run();
            });
            match ric.call1(&window, &callback) {
                Ok(_) => return,
                Err(e) => log::warn!("requestIdleCallback failed, using timeout: {:?}", e),
            }
        }

        Timeout::new(0, move || {
            pending.run();
        })
        .forget();
    }
}
