//! Root application module.
//!
//! Contains the main App component, AppContext definition, NavigationState,
//! and application-level setup logic following Leptos conventions.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsValue;

use crate::components::AppRouter;
use crate::config;
use crate::core::error::NavigationError;
use crate::core::{
    IdleScheduler, NavOutcome, PrefetchScheduler, Prefetcher, RouteObserver, ScrollLock,
    Viewport, VisibilityStore, VisitBeacon,
};
use crate::models::{NavigationEvent, OverlayId, RoutePath, RouteSet, Theme};
use crate::utils::{
    self, BodyScrollLock, FetchBeacon, IdleCallbackScheduler, LinkPrefetcher, WindowViewport,
    dom,
};

// ============================================================================
// NavigationState
// ============================================================================

/// Non-reactive navigation machinery: the route observer, the prefetch
/// scheduler, and the viewport they act on.
///
/// Cloning is cheap; all fields are shared handles.
#[derive(Clone)]
pub struct NavigationState {
    routes: Rc<RouteSet>,
    observer: Rc<RefCell<RouteObserver>>,
    prefetch: PrefetchScheduler,
    viewport: Rc<dyn Viewport>,
}

impl NavigationState {
    pub fn new(
        routes: RouteSet,
        idle: Rc<dyn IdleScheduler>,
        prefetcher: Rc<dyn Prefetcher>,
        viewport: Rc<dyn Viewport>,
    ) -> Self {
        Self {
            prefetch: PrefetchScheduler::new(routes.clone(), idle, prefetcher),
            routes: Rc::new(routes),
            observer: Rc::new(RefCell::new(RouteObserver::new())),
            viewport,
        }
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    pub fn prefetch(&self) -> &PrefetchScheduler {
        &self.prefetch
    }

    /// Issues the sequence number for a new navigation.
    pub fn begin(&self) -> crate::models::NavSeq {
        self.observer.borrow_mut().begin()
    }

    /// Applies a lifecycle event to the overlay store and, on completion,
    /// schedules prefetching from the new page.
    pub fn dispatch(&self, event: NavigationEvent, store: &mut VisibilityStore) -> NavOutcome {
        let outcome = self
            .observer
            .borrow_mut()
            .handle(event, store, self.viewport.as_ref());
        if let NavOutcome::Completed(path) = &outcome {
            self.prefetch.schedule(path);
        }
        outcome
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Overlays**: which dismissible layers are open
/// - **Route**: the page currently displayed
/// - **Navigation**: lifecycle sequencing and prefetching (non-reactive)
/// - **Theme**: the visitor's color theme choice
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Overlay visibility (mobile nav, contact sheet, loading indicator).
    pub overlays: RwSignal<VisibilityStore, LocalStorage>,

    /// Route currently rendered.
    pub route: RwSignal<RoutePath>,

    /// Route observer and prefetch scheduler.
    pub navigation: StoredValue<NavigationState, LocalStorage>,

    /// Theme choice (persisted to localStorage).
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Creates the context with the browser implementations of every seam.
    pub fn new() -> Self {
        let scroll_lock: Rc<dyn ScrollLock> = Rc::new(BodyScrollLock::new());
        let navigation = NavigationState::new(
            RouteSet::configured(),
            Rc::new(IdleCallbackScheduler),
            Rc::new(LinkPrefetcher),
            Rc::new(WindowViewport),
        );
        let route = RoutePath::current();

        Self {
            overlays: RwSignal::new_local(VisibilityStore::new(scroll_lock)),
            route: RwSignal::new(route),
            navigation: StoredValue::new_local(navigation),
            theme: RwSignal::new(load_theme()),
        }
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.overlays.with(|s| s.is_open(id))
    }

    pub fn open(&self, id: OverlayId) {
        self.overlays.update(|s| s.open(id));
    }

    pub fn close(&self, id: OverlayId) {
        self.overlays.update(|s| s.close(id));
    }

    pub fn toggle(&self, id: OverlayId) {
        self.overlays.update(|s| s.toggle(id));
    }

    /// Closes `other` and opens `id` in one update.
    pub fn open_exclusive(&self, id: OverlayId, other: OverlayId) {
        self.overlays.update(|s| {
            s.close(other);
            s.open(id);
        });
    }

    /// Navigates to `target`.
    ///
    /// Emits `Start`, swaps the rendered page, and emits `Complete` once the
    /// new page has painted. Unknown routes end in `Error` and leave the
    /// current page in place. With `push`, the browser history gains an entry.
    pub fn navigate(&self, target: RoutePath, push: bool) {
        let nav = self.navigation.get_value();
        let seq = nav.begin();
        self.dispatch(&nav, NavigationEvent::Start { seq });

        if !nav.routes().contains(&target) {
            log::warn!("{}", NavigationError::UnknownRoute(target.to_string()));
            self.dispatch(&nav, NavigationEvent::Error { seq });
            return;
        }

        if push {
            target.push();
        }
        self.route.set(target.clone());

        let ctx = *self;
        request_animation_frame(move || {
            let nav = ctx.navigation.get_value();
            ctx.dispatch(&nav, NavigationEvent::Complete { seq, path: target });
        });
    }

    fn dispatch(&self, nav: &NavigationState, event: NavigationEvent) -> Option<NavOutcome> {
        self.overlays.try_update(|store| nav.dispatch(event, store))
    }

    /// Prefetches a route descriptor immediately (hover preloading).
    ///
    /// Only path strings are accepted; anything else is logged and dropped
    /// without touching the prefetch ledger.
    pub fn preload(&self, descriptor: &JsValue) {
        let descriptor = utils::descriptor_from_js(descriptor);
        self.navigation
            .with_value(|nav| nav.prefetch().prefetch_descriptor(&descriptor));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

fn load_theme() -> Theme {
    dom::local_storage()
        .and_then(|s| s.get_item(config::storage::THEME_KEY).ok().flatten())
        .map(|v| Theme::from_storage(&v))
        .unwrap_or_default()
}

/// Applies the resolved theme to `<html>` and persists the choice.
fn setup_theme_effect(theme: RwSignal<Theme>) {
    let prefers_dark = use_media_query(config::theme::DARK_QUERY.to_string());
    Effect::new(move || {
        let choice = theme.get();
        dom::set_root_class(config::theme::DARK_CLASS, choice.is_dark(prefers_dark.get()));
        if let Some(storage) = dom::local_storage() {
            let _ = storage.set_item(config::storage::THEME_KEY, choice.as_str());
        }
    });
}

/// Landing-page work: prefetch every other route and send the visit beacon.
fn on_landing(ctx: AppContext) {
    let landing = ctx.route.get_untracked();
    ctx.navigation
        .with_value(|nav| nav.prefetch().schedule(&landing));

    let beacon = VisitBeacon::new(config::beacon::ENDPOINT, Rc::new(FetchBeacon));
    if let Err(e) = beacon.emit(&utils::visit_payload(landing.as_str())) {
        log::debug!("{}", e);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts landing prefetch and the visit beacon
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    setup_theme_effect(ctx.theme);

    // Runs once, after the first render.
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            on_landing(ctx);
        }
    });

    on_cleanup(move || {
        ctx.overlays.try_update(|s| s.close_all());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="opacity: 0.7; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="font-size: 0.9rem; color: #dc2626;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.75rem 2rem; border-radius: 0.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefetch::tests::{QueuedScheduler, Recorder};
    use crate::core::visibility::tests::store;

    struct NoScroll;

    impl Viewport for NoScroll {
        fn scroll_to_top(&self) {}
    }

    #[test]
    fn test_completion_schedules_prefetch_from_new_path() {
        let idle = Rc::new(QueuedScheduler::default());
        let recorder = Rc::new(Recorder::default());
        let nav = NavigationState::new(
            RouteSet::configured(),
            idle.clone(),
            recorder.clone(),
            Rc::new(NoScroll),
        );
        let (mut s, _) = store();

        // landing on /
        nav.prefetch().schedule(&RoutePath::root());

        let seq = nav.begin();
        nav.dispatch(NavigationEvent::Start { seq }, &mut s);
        let about = RoutePath::parse("/about").unwrap();
        let outcome = nav.dispatch(
            NavigationEvent::Complete {
                seq,
                path: about.clone(),
            },
            &mut s,
        );
        assert_eq!(outcome, NavOutcome::Completed(about));
        assert_eq!(idle.pending(), 2);

        idle.run_pending();
        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls.last().map(String::as_str), Some("/"));
    }

    #[test]
    fn test_stale_completion_does_not_prefetch() {
        let idle = Rc::new(QueuedScheduler::default());
        let nav = NavigationState::new(
            RouteSet::configured(),
            idle.clone(),
            Rc::new(Recorder::default()),
            Rc::new(NoScroll),
        );
        let (mut s, _) = store();

        let first = nav.begin();
        let second = nav.begin();
        nav.dispatch(NavigationEvent::Start { seq: first }, &mut s);
        nav.dispatch(NavigationEvent::Start { seq: second }, &mut s);
        nav.dispatch(
            NavigationEvent::Complete {
                seq: first,
                path: RoutePath::root(),
            },
            &mut s,
        );
        assert_eq!(idle.pending(), 0);
        assert!(s.is_open(OverlayId::LoadingIndicator));
    }
}
