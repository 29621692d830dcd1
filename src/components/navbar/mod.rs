//! Top navigation bar.
//!
//! Desktop shows inline links and the theme switch. Below the mobile
//! breakpoint the links move into a dismissible panel behind a menu button.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::hooks::{ElementRegion, use_dismiss};
use crate::components::icons as ic;
use crate::components::router::NavLink;
use crate::config::{self, routes};
use crate::models::{OverlayId, RoutePath};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    // The toggle counts as inside so its own click is not seen as an
    // outside press before it toggles.
    use_dismiss(
        OverlayId::MobileNav,
        vec![
            ElementRegion::new(move || panel_ref.get_untracked().map(Into::into)),
            ElementRegion::new(move || toggle_ref.get_untracked().map(Into::into)),
        ],
    );

    let is_open = Signal::derive(move || ctx.is_open(OverlayId::MobileNav));

    let links = move |item_class: &'static str| {
        ctx.navigation.with_value(|nav| {
            nav.routes()
                .iter()
                .zip(routes::LABELS)
                .map(|(path, label)| {
                    let preload = (path.as_str() == "/resume").then_some(routes::RESUME_PDF);
                    view! {
                        <NavLink
                            path=path.clone()
                            class=item_class
                            active_class=css::active
                            preload=preload
                        >
                            {*label}
                        </NavLink>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <header class=css::bar>
            <NavLink path=RoutePath::root() class=css::brand>
                {config::APP_NAME}
            </NavLink>

            <nav class=css::links aria-label="Primary">{links(css::link)}</nav>

            <div class=css::actions>
                <ThemeSwitch />
                <button
                    node_ref=toggle_ref
                    class=css::menuButton
                    aria-label="Toggle navigation"
                    aria-expanded=move || is_open.get().to_string()
                    on:click=move |_| ctx.toggle(OverlayId::MobileNav)
                >
                    {move || if is_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }
                    } else {
                        view! { <Icon icon=ic::MENU /> }
                    }}
                </button>
            </div>
        </header>

        <div
            node_ref=panel_ref
            class=move || if is_open.get() { css::panelOpen } else { css::panel }
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <nav class=css::panelLinks aria-label="Mobile">{links(css::panelLink)}</nav>
        </div>
    }
}

/// Light/dark toggle. Flips the resolved theme, so a `System` choice
/// becomes the explicit opposite of what is currently shown.
#[component]
fn ThemeSwitch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let prefers_dark = use_media_query(config::theme::DARK_QUERY.to_string());

    let is_dark = move || ctx.theme.get().is_dark(prefers_dark.get());

    view! {
        <button
            class=css::themeButton
            aria-label="Toggle theme"
            on:click=move |_| {
                let system = prefers_dark.get_untracked();
                ctx.theme.update(|t| *t = t.toggled(system));
            }
        >
            {move || if is_dark() {
                view! { <Icon icon=ic::SUN /> }
            } else {
                view! { <Icon icon=ic::MOON /> }
            }}
        </button>
    }
}
