//! Route-change observer.
//!
//! Tracks navigation progress as a two-state machine and applies the
//! post-navigation cleanup (loading indicator, scroll reset, stale overlays).
//!
//! ```text
//! Idle --Start{n}--> Navigating{n} --Complete{n}/Error{n}--> Idle
//!                    Navigating{n} --Start{m>n}------------> Navigating{m}
//! ```
//!
//! Completion events carry the sequence number of the navigation they belong
//! to. Only the most recent navigation may finish; anything else is stale
//! and dropped.

use crate::core::visibility::VisibilityStore;
use crate::models::{NavSeq, NavigationEvent, OverlayId, RoutePath};

/// Page viewport operations needed after a navigation.
pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Observer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPhase {
    #[default]
    Idle,
    Navigating(NavSeq),
}

/// What [`RouteObserver::handle`] did with an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Loading indicator shown.
    Started,
    /// Navigation finished; `path` is now current and should be prefetched from.
    Completed(RoutePath),
    /// Navigation failed; indicator hidden, nothing else changes.
    Failed,
    /// Event belonged to a superseded navigation and was ignored.
    Stale,
}

#[derive(Debug, Default)]
pub struct RouteObserver {
    phase: NavPhase,
    latest: Option<NavSeq>,
    issued: u64,
    current: Option<RoutePath>,
}

impl RouteObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Path of the last completed navigation.
    pub fn current(&self) -> Option<&RoutePath> {
        self.current.as_ref()
    }

    /// Issues the sequence number for a new navigation.
    pub fn begin(&mut self) -> NavSeq {
        self.issued += 1;
        NavSeq(self.issued)
    }

    pub fn handle(
        &mut self,
        event: NavigationEvent,
        store: &mut VisibilityStore,
        viewport: &dyn Viewport,
    ) -> NavOutcome {
        match event {
            NavigationEvent::Start { seq } => {
                if self.latest.is_some_and(|latest| seq <= latest) {
                    log::debug!("ignoring out-of-order start {:?}", seq);
                    return NavOutcome::Stale;
                }
                self.latest = Some(seq);
                self.phase = NavPhase::Navigating(seq);
                store.open(OverlayId::LoadingIndicator);
                NavOutcome::Started
            }
            NavigationEvent::Complete { seq, path } => {
                if !self.finish(seq, store) {
                    return NavOutcome::Stale;
                }
                viewport.scroll_to_top();
                for id in OverlayId::ALL {
                    if id.closes_on_navigation() {
                        store.close(id);
                    }
                }
                log::debug!("navigation {:?} complete at {}", seq, path);
                self.current = Some(path.clone());
                NavOutcome::Completed(path)
            }
            NavigationEvent::Error { seq } => {
                if !self.finish(seq, store) {
                    return NavOutcome::Stale;
                }
                log::debug!("navigation {:?} failed", seq);
                NavOutcome::Failed
            }
        }
    }

    /// Returns to `Idle` if `seq` is the navigation in flight.
    fn finish(&mut self, seq: NavSeq, store: &mut VisibilityStore) -> bool {
        if self.phase != NavPhase::Navigating(seq) {
            log::debug!("ignoring stale completion {:?} in {:?}", seq, self.phase);
            return false;
        }
        self.phase = NavPhase::Idle;
        store.close(OverlayId::LoadingIndicator);
        true
    }
}
