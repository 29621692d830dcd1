//! Outside-interaction dismissal.
//!
//! A [`DismissDetector`] turns document-level pointer and keyboard activity
//! into close requests for one overlay. It only reacts while armed, and it is
//! armed exactly while its overlay is open (see [`DismissDetector::sync`]).
//! The browser layer attaches its document listeners on [`ArmChange::Armed`]
//! and drops them on [`ArmChange::Disarmed`].

use std::rc::Rc;

use crate::core::visibility::VisibilityStore;
use crate::models::OverlayId;

/// Key value that always dismisses.
pub const ESCAPE_KEY: &str = "Escape";

/// An area of the page that counts as "inside" an overlay.
///
/// `T` is the event target type: `web_sys::Node` in the browser, anything
/// comparable in tests.
pub trait Region<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

/// A document-level interaction.
#[derive(Debug)]
pub enum Interaction<'a, T: ?Sized> {
    /// Pointer pressed on `target` (`None` when the event had no node target).
    PointerDown(Option<&'a T>),
    /// Key pressed, by `KeyboardEvent.key` value.
    Key(&'a str),
}

/// Result of [`DismissDetector::sync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmChange {
    Armed,
    Disarmed,
}

pub struct DismissDetector<T: ?Sized> {
    overlay: OverlayId,
    regions: Vec<Rc<dyn Region<T>>>,
    armed: bool,
}

impl<T: ?Sized> DismissDetector<T> {
    pub fn new(overlay: OverlayId) -> Self {
        Self {
            overlay,
            regions: Vec::new(),
            armed: false,
        }
    }

    /// Registers a region exempt from outside-pointer dismissal
    /// (the overlay root, the trigger that opened it).
    pub fn register(&mut self, region: Rc<dyn Region<T>>) {
        self.regions.push(region);
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Brings the armed flag in line with the overlay's visibility.
    ///
    /// Returns the transition, if any, so the caller can attach or detach
    /// its event listeners in the same step.
    pub fn sync(&mut self, store: &VisibilityStore) -> Option<ArmChange> {
        let open = store.is_open(self.overlay) && self.overlay.dismiss_on_outside();
        match (self.armed, open) {
            (false, true) => {
                self.armed = true;
                Some(ArmChange::Armed)
            }
            (true, false) => {
                self.armed = false;
                Some(ArmChange::Disarmed)
            }
            _ => None,
        }
    }

    /// Applies one interaction. Returns `true` if a close was issued.
    pub fn handle(&self, interaction: Interaction<'_, T>, store: &mut VisibilityStore) -> bool {
        if !self.armed {
            return false;
        }
        let dismiss = match &interaction {
            Interaction::Key(key) => *key == ESCAPE_KEY,
            Interaction::PointerDown(Some(target)) => {
                !self.regions.iter().any(|r| r.contains(target))
            }
            Interaction::PointerDown(None) => true,
        };
        if dismiss {
            log::debug!("dismissing {:?} on {}", self.overlay, describe(&interaction));
            store.close(self.overlay);
        }
        dismiss
    }
}

fn describe<T: ?Sized>(interaction: &Interaction<'_, T>) -> &'static str {
    match interaction {
        Interaction::Key(_) => "escape",
        Interaction::PointerDown(_) => "outside pointer",
    }
}
