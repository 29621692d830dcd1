//! Mobile bottom navigation bar with hide-on-scroll.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::NavLink;
use crate::config::{layout, routes};
use crate::core::ScrollDirectionTracker;
use crate::utils::{EventListenerHandle, dom};

stylance::import_crate_style!(css, "src/components/bottom_nav/bottom_nav.module.css");

#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let visible = RwSignal::new(true);

    let tracker = RefCell::new(ScrollDirectionTracker::new(layout::BOTTOM_NAV_HIDE_OFFSET));
    let on_scroll = EventListenerHandle::window("scroll", move |_| {
        let shown = tracker.borrow_mut().update(dom::scroll_y());
        if visible.get_untracked() != shown {
            visible.set(shown);
        }
    });
    let _on_scroll = StoredValue::new_local(on_scroll);

    let items = ctx.navigation.with_value(|nav| {
        nav.routes()
            .iter()
            .zip(routes::LABELS)
            .enumerate()
            .map(|(i, (path, label))| {
                view! {
                    <NavLink path=path.clone() class=css::item active_class=css::active>
                        <span class=css::icon><Icon icon=ic::route_icon(i) /></span>
                        <span class=css::label>{*label}</span>
                    </NavLink>
                }
            })
            .collect_view()
    });

    view! {
        <nav
            class=move || if visible.get() { css::bar } else { css::barHidden }
            aria-label="Bottom"
        >
            {items}
        </nav>
    }
}
