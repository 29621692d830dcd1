//! Custom hooks shared by overlay components.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node};

use crate::app::AppContext;
use crate::core::{ArmChange, DismissDetector, Interaction, Region};
use crate::models::OverlayId;
use crate::utils::EventListenerHandle;

/// An element counted as inside an overlay.
///
/// Resolved on every check, so it can be registered before the element
/// is mounted.
pub struct ElementRegion(Box<dyn Fn() -> Option<Element>>);

impl ElementRegion {
    pub fn new(resolve: impl Fn() -> Option<Element> + 'static) -> Self {
        Self(Box::new(resolve))
    }
}

impl Region<Node> for ElementRegion {
    fn contains(&self, target: &Node) -> bool {
        (self.0)().is_some_and(|el| el.contains(Some(target)))
    }
}

/// Dismisses `overlay` on pointer-down outside `regions` or on Escape.
///
/// Document listeners exist only while the overlay is open: they are
/// attached when it opens and dropped when it closes or the calling
/// component unmounts.
pub fn use_dismiss(overlay: OverlayId, regions: Vec<ElementRegion>) {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let mut detector = DismissDetector::new(overlay);
    for region in regions {
        detector.register(Rc::new(region));
    }
    let detector = Rc::new(RefCell::new(detector));
    let listeners: Rc<RefCell<Vec<EventListenerHandle>>> = Rc::default();

    Effect::new(move || {
        let change = ctx.overlays.with(|store| detector.borrow_mut().sync(store));
        match change {
            Some(ArmChange::Armed) => {
                let mut handles = listeners.borrow_mut();

                let d = Rc::clone(&detector);
                handles.extend(EventListenerHandle::document("pointerdown", move |ev| {
                    let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
                    ctx.overlays.maybe_update(|store| {
                        d.borrow()
                            .handle(Interaction::PointerDown(target.as_ref()), store)
                    });
                }));

                let d = Rc::clone(&detector);
                handles.extend(EventListenerHandle::document("keydown", move |ev| {
                    let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
                        return;
                    };
                    ctx.overlays
                        .maybe_update(|store| d.borrow().handle(Interaction::Key(&key), store));
                }));
            }
            Some(ArmChange::Disarmed) => listeners.borrow_mut().clear(),
            None => {}
        }
    });
}
