//! Idle-time route prefetching.
//!
//! After mount and after every completed navigation, every known route other
//! than the current one is prefetched once per page load. Work is deferred
//! through an [`IdleScheduler`] so it never runs on the triggering event, and
//! each route is recorded in the [`PrefetchLedger`] before its request is
//! issued. A failed prefetch stays recorded and is not retried.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::core::error::PrefetchError;
use crate::models::{RoutePath, RouteSet};

// ============================================================================
// Collaborators
// ============================================================================

/// Defers work to an idle period.
///
/// `defer` must not run `task` before returning.
pub trait IdleScheduler {
    fn defer(&self, task: Box<dyn FnOnce()>);
}

/// Underlying prefetch primitive. Takes a bare path, nothing else.
pub trait Prefetcher {
    fn prefetch(&self, path: &str) -> Result<(), PrefetchError>;
}

// ============================================================================
// PrefetchLedger
// ============================================================================

/// Paths already handed to the prefetcher this page load. Only grows.
#[derive(Debug, Default)]
pub struct PrefetchLedger {
    requested: BTreeSet<RoutePath>,
}

impl PrefetchLedger {
    pub fn contains(&self, path: &RoutePath) -> bool {
        self.requested.contains(path)
    }

    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// Records `path`. Returns `false` if it was already recorded.
    fn record(&mut self, path: RoutePath) -> bool {
        self.requested.insert(path)
    }
}

// ============================================================================
// PrefetchScheduler
// ============================================================================

/// Prefetch coordinator shared by the router and navigation links.
#[derive(Clone)]
pub struct PrefetchScheduler {
    routes: Rc<RouteSet>,
    ledger: Rc<RefCell<PrefetchLedger>>,
    idle: Rc<dyn IdleScheduler>,
    prefetcher: Rc<dyn Prefetcher>,
}

impl PrefetchScheduler {
    pub fn new(routes: RouteSet, idle: Rc<dyn IdleScheduler>, prefetcher: Rc<dyn Prefetcher>) -> Self {
        Self {
            routes: Rc::new(routes),
            ledger: Rc::new(RefCell::new(PrefetchLedger::default())),
            idle,
            prefetcher,
        }
    }

    /// Known routes not yet requested, excluding `current`.
    pub fn targets(&self, current: &RoutePath) -> Vec<RoutePath> {
        let ledger = self.ledger.borrow();
        self.routes
            .iter()
            .filter(|r| *r != current && !ledger.contains(r))
            .cloned()
            .collect()
    }

    /// Schedules prefetching of every outstanding route for an idle period.
    ///
    /// Returns the number of routes scheduled; zero means nothing was deferred.
    pub fn schedule(&self, current: &RoutePath) -> usize {
        let targets = self.targets(current);
        if targets.is_empty() {
            return 0;
        }
        let count = targets.len();
        let ledger = Rc::clone(&self.ledger);
        let prefetcher = Rc::clone(&self.prefetcher);
        self.idle.defer(Box::new(move || {
            for target in targets {
                // An earlier task may already have taken this route.
                issue(&ledger, prefetcher.as_ref(), target);
            }
        }));
        log::debug!("scheduled {} prefetches from {}", count, current);
        count
    }

    /// Prefetches one path right away, unless it was already requested.
    ///
    /// Used for hover preloading; the path need not be a known route.
    pub fn prefetch_now(&self, path: &RoutePath) -> bool {
        issue(&self.ledger, self.prefetcher.as_ref(), path.clone())
    }

    /// Prefetches an untyped route descriptor.
    ///
    /// Anything other than a valid path string is rejected before it reaches
    /// the prefetcher and leaves the ledger untouched.
    pub fn prefetch_descriptor(&self, descriptor: &serde_json::Value) -> bool {
        match RoutePath::from_descriptor(descriptor) {
            Ok(path) => self.prefetch_now(&path),
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    pub fn is_prefetched(&self, path: &RoutePath) -> bool {
        self.ledger.borrow().contains(path)
    }

    pub fn prefetched_count(&self) -> usize {
        self.ledger.borrow().len()
    }
}

/// Records `path` and, if new, hands it to the prefetcher.
fn issue(ledger: &RefCell<PrefetchLedger>, prefetcher: &dyn Prefetcher, path: RoutePath) -> bool {
    // Record first so a slow or failing request cannot be issued twice.
    if !ledger.borrow_mut().record(path.clone()) {
        return false;
    }
    if let Err(e) = prefetcher.prefetch(path.as_str()) {
        log::debug!("{}", e);
    }
    true
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use serde_json::json;

    use super::*;

    /// Holds deferred tasks until drained.
    #[derive(Default)]
    pub(crate) struct QueuedScheduler {
        tasks: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl QueuedScheduler {
        pub(crate) fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        pub(crate) fn run_pending(&self) {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            for task in tasks {
                task();
            }
        }
    }

    impl IdleScheduler for QueuedScheduler {
        fn defer(&self, task: Box<dyn FnOnce()>) {
            self.tasks.borrow_mut().push(task);
        }
    }

    /// Records requested paths; fails the ones listed in `failing`.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) calls: RefCell<Vec<String>>,
        failing: Vec<&'static str>,
        ledger_seen: Cell<Option<bool>>,
        probe: RefCell<Option<PrefetchScheduler>>,
    }

    impl Prefetcher for Recorder {
        fn prefetch(&self, path: &str) -> Result<(), PrefetchError> {
            if let Some(scheduler) = self.probe.borrow().as_ref() {
                let recorded = scheduler.is_prefetched(&RoutePath::parse(path).unwrap());
                self.ledger_seen.set(Some(recorded));
            }
            self.calls.borrow_mut().push(path.to_string());
            if self.failing.iter().any(|f| *f == path) {
                return Err(PrefetchError::Failed {
                    path: path.to_string(),
                    reason: "offline".into(),
                });
            }
            Ok(())
        }
    }

    const ROUTES: [&str; 5] = ["/", "/about", "/projects", "/resume", "/leetcode"];

    fn setup(failing: Vec<&'static str>) -> (PrefetchScheduler, Rc<QueuedScheduler>, Rc<Recorder>) {
        let idle = Rc::new(QueuedScheduler::default());
        let recorder = Rc::new(Recorder {
            failing,
            ..Default::default()
        });
        let scheduler = PrefetchScheduler::new(
            RouteSet::new(ROUTES).unwrap(),
            idle.clone(),
            recorder.clone(),
        );
        (scheduler, idle, recorder)
    }

    fn root() -> RoutePath {
        RoutePath::root()
    }

    #[test]
    fn test_schedule_defers_work() {
        let (scheduler, idle, recorder) = setup(vec![]);
        assert_eq!(scheduler.schedule(&root()), 4);
        assert!(recorder.calls.borrow().is_empty());
        assert_eq!(scheduler.prefetched_count(), 0);
        assert_eq!(idle.pending(), 1);

        idle.run_pending();
        assert_eq!(
            *recorder.calls.borrow(),
            vec!["/about", "/projects", "/resume", "/leetcode"]
        );
    }

    #[test]
    fn test_no_duplicate_prefetch_across_invocations() {
        let (scheduler, idle, recorder) = setup(vec![]);
        scheduler.schedule(&root());
        scheduler.schedule(&root());
        idle.run_pending();

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 4);
        for route in &ROUTES[1..] {
            assert_eq!(calls.iter().filter(|c| c == route).count(), 1);
        }
        assert!(!calls.contains(&"/".to_string()));
    }

    #[test]
    fn test_schedule_after_drain_is_noop() {
        let (scheduler, idle, _) = setup(vec![]);
        scheduler.schedule(&root());
        idle.run_pending();
        assert_eq!(scheduler.schedule(&root()), 0);
        assert_eq!(idle.pending(), 0);
    }

    #[test]
    fn test_new_current_route_picks_up_previous_page() {
        let (scheduler, idle, recorder) = setup(vec![]);
        scheduler.schedule(&root());
        idle.run_pending();

        let about = RoutePath::parse("/about").unwrap();
        assert_eq!(scheduler.targets(&about), vec![root()]);
        assert_eq!(scheduler.schedule(&about), 1);
        idle.run_pending();
        assert_eq!(recorder.calls.borrow().last().map(String::as_str), Some("/"));
        assert_eq!(scheduler.prefetched_count(), 5);
    }

    #[test]
    fn test_ledger_recorded_before_request() {
        let (scheduler, idle, recorder) = setup(vec![]);
        *recorder.probe.borrow_mut() = Some(scheduler.clone());
        scheduler.schedule(&root());
        idle.run_pending();
        assert_eq!(recorder.ledger_seen.get(), Some(true));
        recorder.probe.borrow_mut().take();
    }

    #[test]
    fn test_failure_is_not_retried() {
        let (scheduler, idle, recorder) = setup(vec!["/projects"]);
        scheduler.schedule(&root());
        idle.run_pending();
        assert!(scheduler.is_prefetched(&RoutePath::parse("/projects").unwrap()));

        scheduler.schedule(&RoutePath::parse("/about").unwrap());
        idle.run_pending();
        let calls = recorder.calls.borrow();
        assert_eq!(calls.iter().filter(|c| *c == "/projects").count(), 1);
        assert_eq!(calls.len(), 5);
    }

    #[test]
    fn test_prefetch_now_dedupes_with_schedule() {
        let (scheduler, idle, recorder) = setup(vec![]);
        let resume = RoutePath::parse("/resume").unwrap();
        assert!(scheduler.prefetch_now(&resume));
        assert!(!scheduler.prefetch_now(&resume));

        scheduler.schedule(&root());
        idle.run_pending();
        let calls = recorder.calls.borrow();
        assert_eq!(calls.iter().filter(|c| *c == "/resume").count(), 1);
        assert_eq!(calls[0], "/resume");
    }

    #[test]
    fn test_prefetch_now_accepts_assets() {
        let (scheduler, _, recorder) = setup(vec![]);
        let pdf = RoutePath::parse("/Muhammad-Zain-Resume.pdf").unwrap();
        assert!(scheduler.prefetch_now(&pdf));
        assert_eq!(*recorder.calls.borrow(), vec!["/Muhammad-Zain-Resume.pdf"]);
    }

    #[test]
    fn test_malformed_descriptor_rejected() {
        let (scheduler, idle, recorder) = setup(vec![]);
        assert!(!scheduler.prefetch_descriptor(&json!({ "href": "/about", "priority": "high" })));
        assert!(!scheduler.prefetch_descriptor(&json!(7)));
        assert!(!scheduler.prefetch_descriptor(&json!("about")));
        assert_eq!(scheduler.prefetched_count(), 0);
        assert!(recorder.calls.borrow().is_empty());
        assert_eq!(idle.pending(), 0);

        assert!(scheduler.prefetch_descriptor(&json!("/about")));
        assert_eq!(scheduler.prefetched_count(), 1);
    }
}
