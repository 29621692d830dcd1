//! Application router component.
//!
//! Path-based routing over the History API. Uses native popstate events
//! instead of leptos_router so every navigation flows through
//! [`AppContext::navigate`] and its lifecycle events.
//!
//! # Architecture
//!
//! - **`AppContext::route` is the source of truth**: the page is derived from it
//! - **Chrome never re-renders on navigation**: nav bars and the contact
//!   widget stay mounted while the page swaps
//! - **popstate events**: browser back/forward buttons work automatically

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::app::AppContext;
use crate::components::bottom_nav::BottomNav;
use crate::components::contact::ContactWidget;
use crate::components::footer::Footer;
use crate::components::loading::LoadingBar;
use crate::components::navbar::NavBar;
use crate::components::pages::{About, Home, LeetCode, NotFound, Projects, Resume};
use crate::models::RoutePath;
use crate::utils::EventListenerHandle;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Renders the persistent chrome around the page for the current route:
/// - `/` → Home
/// - `/about`, `/projects`, `/resume`, `/leetcode` → their pages
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Back/forward: the browser already moved, so no history push.
    let popstate = EventListenerHandle::window("popstate", move |_| {
        ctx.navigate(RoutePath::current(), false);
    });
    let _popstate = StoredValue::new_local(popstate);

    let page = move || match ctx.route.get().as_str() {
        "/" => view! { <Home /> }.into_any(),
        "/about" => view! { <About /> }.into_any(),
        "/projects" => view! { <Projects /> }.into_any(),
        "/resume" => view! { <Resume /> }.into_any(),
        "/leetcode" => view! { <LeetCode /> }.into_any(),
        _ => view! { <NotFound /> }.into_any(),
    };

    view! {
        <LoadingBar />
        <NavBar />
        <main class=css::main>{page}</main>
        <Footer />
        <ContactWidget />
        <BottomNav />
    }
}

// ============================================================================
// NavLink
// ============================================================================

/// Whether a click should be left to the browser (new tab, download, ...).
fn is_browser_handled(ev: &MouseEvent) -> bool {
    ev.button() != 0 || ev.meta_key() || ev.ctrl_key() || ev.shift_key() || ev.alt_key()
}

/// In-app link that navigates through [`AppContext::navigate`].
///
/// With `preload`, hovering the link prefetches that descriptor.
///
/// Modified clicks fall through to the browser so "open in new tab" keeps
/// working.
#[component]
pub fn NavLink(
    path: RoutePath,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] active_class: String,
    #[prop(optional_no_strip)] preload: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let href = path.to_string();
    let target = path.clone();
    let on_click = move |ev: MouseEvent| {
        if is_browser_handled(&ev) {
            return;
        }
        ev.prevent_default();
        ctx.navigate(target.clone(), true);
    };

    let is_active = Memo::new(move |_| ctx.route.with(|current| path.is_active_for(current)));
    let class = move || {
        if is_active.get() && !active_class.is_empty() {
            format!("{class} {active_class}")
        } else {
            class.clone()
        }
    };

    view! {
        <a
            href=href
            class=class
            aria-current=move || is_active.get().then_some("page")
            on:click=on_click
            on:mouseenter=move |_| {
                if let Some(descriptor) = preload {
                    ctx.preload(&JsValue::from_str(descriptor));
                }
            }
        >
            {children()}
        </a>
    }
}
