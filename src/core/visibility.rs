//! Overlay visibility store.
//!
//! Single source of truth for which overlays are open. Scroll locking is
//! tied to the open interval of an overlay through an RAII guard stored in
//! the overlay's state: the guard is taken on the closed → open transition
//! and dropped on every path back to closed, including dropping the store
//! itself when the owning component unmounts.

use std::fmt;
use std::rc::Rc;

use crate::models::OverlayId;

// ============================================================================
// Scroll lock
// ============================================================================

/// Page scroll lock shared by all scroll-locking overlays.
///
/// Implementations may be called with nested lock/unlock pairs and must only
/// restore scrolling once every lock has been released.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Held while a scroll-locking overlay is open. Unlocks on drop.
pub struct ScrollLockGuard {
    target: Rc<dyn ScrollLock>,
}

impl ScrollLockGuard {
    fn acquire(target: &Rc<dyn ScrollLock>) -> Self {
        target.lock();
        Self {
            target: Rc::clone(target),
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.target.unlock();
    }
}

// ============================================================================
// OverlayState
// ============================================================================

/// Visibility of one overlay.
#[derive(Default)]
pub struct OverlayState {
    is_open: bool,
    /// Milliseconds since epoch of the last open. Debugging only.
    opened_at: Option<f64>,
    scroll_guard: Option<ScrollLockGuard>,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn opened_at(&self) -> Option<f64> {
        self.opened_at
    }
}

impl fmt::Debug for OverlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayState")
            .field("is_open", &self.is_open)
            .field("opened_at", &self.opened_at)
            .field("scroll_locked", &self.scroll_guard.is_some())
            .finish()
    }
}

// ============================================================================
// VisibilityStore
// ============================================================================

/// Open/closed state for every [`OverlayId`].
///
/// The store does not enforce mutual exclusion between overlays; callers
/// close one before opening another.
pub struct VisibilityStore {
    overlays: [OverlayState; OverlayId::ALL.len()],
    scroll_lock: Rc<dyn ScrollLock>,
    clock: fn() -> f64,
}

impl VisibilityStore {
    /// Creates a store with every overlay closed.
    pub fn new(scroll_lock: Rc<dyn ScrollLock>) -> Self {
        Self::with_clock(scroll_lock, now_ms)
    }

    pub fn with_clock(scroll_lock: Rc<dyn ScrollLock>, clock: fn() -> f64) -> Self {
        Self {
            overlays: Default::default(),
            scroll_lock,
            clock,
        }
    }

    /// Opens an overlay. Opening an open overlay changes nothing.
    pub fn open(&mut self, id: OverlayId) {
        let now = (self.clock)();
        let state = &mut self.overlays[id.index()];
        if state.is_open {
            return;
        }
        state.is_open = true;
        state.opened_at = Some(now);
        if id.locks_scroll() {
            state.scroll_guard = Some(ScrollLockGuard::acquire(&self.scroll_lock));
        }
        log::debug!("overlay {:?} opened", id);
    }

    /// Closes an overlay. Closing a closed overlay is a no-op.
    pub fn close(&mut self, id: OverlayId) {
        let state = &mut self.overlays[id.index()];
        if !state.is_open {
            return;
        }
        state.is_open = false;
        // Dropping the guard releases the scroll lock.
        state.scroll_guard = None;
        log::debug!("overlay {:?} closed", id);
    }

    pub fn toggle(&mut self, id: OverlayId) {
        if self.is_open(id) {
            self.close(id);
        } else {
            self.open(id);
        }
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.overlays[id.index()].is_open
    }

    pub fn state(&self, id: OverlayId) -> &OverlayState {
        &self.overlays[id.index()]
    }

    /// Closes every overlay. Called when the owning layout unmounts.
    pub fn close_all(&mut self) {
        for id in OverlayId::ALL {
            self.close(id);
        }
    }
}

impl fmt::Debug for VisibilityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityStore")
            .field("overlays", &self.overlays)
            .finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;

    /// Scroll lock that counts outstanding locks.
    #[derive(Default)]
    pub(crate) struct CountingLock {
        pub depth: Cell<i32>,
        pub acquired: Cell<u32>,
        pub released: Cell<u32>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&self) {
            self.depth.set(self.depth.get() + 1);
            self.acquired.set(self.acquired.get() + 1);
        }

        fn unlock(&self) {
            self.depth.set(self.depth.get() - 1);
            self.released.set(self.released.get() + 1);
        }
    }

    pub(crate) fn store() -> (VisibilityStore, Rc<CountingLock>) {
        let lock = Rc::new(CountingLock::default());
        let store = VisibilityStore::with_clock(lock.clone(), || 1_000.0);
        (store, lock)
    }

    #[test]
    fn test_starts_closed() {
        let (store, lock) = store();
        for id in OverlayId::ALL {
            assert!(!store.is_open(id));
            assert_eq!(store.state(id).opened_at(), None);
        }
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_open_records_timestamp() {
        let (mut store, _) = store();
        store.open(OverlayId::ContactSheet);
        assert!(store.is_open(OverlayId::ContactSheet));
        assert_eq!(store.state(OverlayId::ContactSheet).opened_at(), Some(1_000.0));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut store, lock) = store();
        for id in OverlayId::ALL {
            store.open(id);
            store.close(id);
            let once = store.is_open(id);
            store.close(id);
            assert_eq!(store.is_open(id), once);
            assert!(!store.is_open(id));
        }
        assert_eq!(lock.depth.get(), 0);
        assert_eq!(lock.acquired.get(), lock.released.get());
    }

    #[test]
    fn test_close_never_opened() {
        let (mut store, lock) = store();
        store.close(OverlayId::MobileNav);
        assert!(!store.is_open(OverlayId::MobileNav));
        assert_eq!(lock.released.get(), 0);
    }

    #[test]
    fn test_toggle() {
        let (mut store, lock) = store();
        store.toggle(OverlayId::MobileNav);
        assert!(store.is_open(OverlayId::MobileNav));
        assert_eq!(lock.depth.get(), 1);
        store.toggle(OverlayId::MobileNav);
        assert!(!store.is_open(OverlayId::MobileNav));
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_reopen_does_not_double_lock() {
        let (mut store, lock) = store();
        store.open(OverlayId::ContactSheet);
        store.open(OverlayId::ContactSheet);
        assert_eq!(lock.acquired.get(), 1);
        store.close(OverlayId::ContactSheet);
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_loading_indicator_does_not_lock() {
        let (mut store, lock) = store();
        store.open(OverlayId::LoadingIndicator);
        assert_eq!(lock.acquired.get(), 0);
        assert!(store.is_open(OverlayId::LoadingIndicator));
    }

    #[test]
    fn test_no_mutual_exclusion() {
        let (mut store, lock) = store();
        store.open(OverlayId::MobileNav);
        store.open(OverlayId::ContactSheet);
        assert!(store.is_open(OverlayId::MobileNav));
        assert!(store.is_open(OverlayId::ContactSheet));
        assert_eq!(lock.depth.get(), 2);
        store.close(OverlayId::MobileNav);
        assert_eq!(lock.depth.get(), 1);
    }

    #[test]
    fn test_close_all_releases_locks() {
        let (mut store, lock) = store();
        store.open(OverlayId::MobileNav);
        store.open(OverlayId::ContactSheet);
        store.open(OverlayId::LoadingIndicator);
        store.close_all();
        assert!(OverlayId::ALL.iter().all(|id| !store.is_open(*id)));
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_unmount_releases_lock() {
        let (mut store, lock) = store();
        store.open(OverlayId::ContactSheet);
        assert_eq!(lock.depth.get(), 1);
        drop(store);
        assert_eq!(lock.depth.get(), 0);
        assert_eq!(lock.released.get(), 1);
    }
}
